//! `door_gfxs` table: door graphic definitions.

use doorconv_catalog::DoorGfx;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dump::{Column, DumpRecord, insert_pattern, int_field, text_field};

static GFX_ROW: Lazy<Regex> = Lazy::new(|| {
    insert_pattern(
        GfxEntry::TABLE,
        &[
            Column::Unsigned,
            Column::Text,
            Column::Unsigned,
            Column::Signed,
            Column::Signed,
        ],
    )
    .expect("door_gfxs row pattern compiles")
});

/// A single `door_gfxs` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfxEntry {
    pub gfxid: i32,
    /// Free-text description. Not written to the catalog.
    pub note: String,
    pub direction: i32,
    /// May be negative.
    pub left_edge_offset: i32,
    /// May be negative.
    pub right_edge_offset: i32,
}

impl DumpRecord for GfxEntry {
    const TABLE: &'static str = "door_gfxs";
    const LABEL: &'static str = "GFX";

    type Output = DoorGfx;

    fn pattern() -> &'static Regex {
        &GFX_ROW
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            gfxid: int_field(caps, 1)?,
            note: text_field(caps, 2),
            direction: int_field(caps, 3)?,
            left_edge_offset: int_field(caps, 4)?,
            right_edge_offset: int_field(caps, 5)?,
        })
    }
}

impl From<&GfxEntry> for DoorGfx {
    fn from(e: &GfxEntry) -> Self {
        DoorGfx {
            gfxid: e.gfxid,
            direction: e.direction,
            left_edge_offset: e.left_edge_offset,
            right_edge_offset: e.right_edge_offset,
        }
    }
}
