//! `spawnlist_door` table: doors placed in the world.

use doorconv_catalog::DoorSpawn;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dump::{Column, DumpRecord, insert_pattern, int_field, text_field};

static SPAWN_ROW: Lazy<Regex> = Lazy::new(|| {
    let mut columns = vec![Column::Unsigned, Column::Text];
    columns.extend([Column::Unsigned; 6]);
    columns.push(Column::Text);
    insert_pattern(SpawnEntry::TABLE, &columns).expect("spawnlist_door row pattern compiles")
});

/// A single `spawnlist_door` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnEntry {
    pub id: i32,
    /// Human-readable location name. Not written to the catalog.
    pub location: String,
    pub gfxid: i32,
    pub x: i32,
    pub y: i32,
    pub map_id: i32,
    pub hp: i32,
    pub keeper: i32,
    /// `true` only when the source column is exactly `1`; any other
    /// literal, including an empty one, reads as `false`.
    pub is_opening: bool,
}

impl DumpRecord for SpawnEntry {
    const TABLE: &'static str = "spawnlist_door";
    const LABEL: &'static str = "spawn";

    type Output = DoorSpawn;

    fn pattern() -> &'static Regex {
        &SPAWN_ROW
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            id: int_field(caps, 1)?,
            location: text_field(caps, 2),
            gfxid: int_field(caps, 3)?,
            x: int_field(caps, 4)?,
            y: int_field(caps, 5)?,
            map_id: int_field(caps, 6)?,
            hp: int_field(caps, 7)?,
            keeper: int_field(caps, 8)?,
            is_opening: caps.get(9).is_some_and(|m| m.as_str() == "1"),
        })
    }
}

impl From<&SpawnEntry> for DoorSpawn {
    fn from(e: &SpawnEntry) -> Self {
        DoorSpawn {
            id: e.id,
            gfxid: e.gfxid,
            x: e.x,
            y: e.y,
            map_id: e.map_id,
            hp: e.hp,
            keeper: e.keeper,
            is_opening: e.is_opening,
        }
    }
}
