//! Data model types for the door catalog.
//!
//! These are the public output records: only the fields the server reads.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Scalars ─────────────────────────────────────────────────────────────────

/// A single YAML scalar value as written by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Int(i32),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Bool(true) => f.write_str("true"),
            Scalar::Bool(false) => f.write_str("false"),
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// A record that can be emitted as one item of a top-level YAML list.
pub trait CatalogEntry {
    /// Top-level key the list lives under (e.g. `door_gfxs`).
    const ROOT_KEY: &'static str;

    /// Output fields in emission order.
    fn fields(&self) -> Vec<(&'static str, Scalar)>;
}

// ── Door graphics ───────────────────────────────────────────────────────────

/// A door graphic/animation definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorGfx {
    pub gfxid: i32,
    pub direction: i32,
    pub left_edge_offset: i32,
    pub right_edge_offset: i32,
}

impl CatalogEntry for DoorGfx {
    const ROOT_KEY: &'static str = "door_gfxs";

    fn fields(&self) -> Vec<(&'static str, Scalar)> {
        vec![
            ("gfxid", self.gfxid.into()),
            ("direction", self.direction.into()),
            ("left_edge_offset", self.left_edge_offset.into()),
            ("right_edge_offset", self.right_edge_offset.into()),
        ]
    }
}

// ── Door spawns ─────────────────────────────────────────────────────────────

/// A door instance placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpawn {
    pub id: i32,
    /// References [`DoorGfx::gfxid`]; not checked.
    pub gfxid: i32,
    pub x: i32,
    pub y: i32,
    pub map_id: i32,
    pub hp: i32,
    pub keeper: i32,
    pub is_opening: bool,
}

impl CatalogEntry for DoorSpawn {
    const ROOT_KEY: &'static str = "doors";

    fn fields(&self) -> Vec<(&'static str, Scalar)> {
        vec![
            ("id", self.id.into()),
            ("gfxid", self.gfxid.into()),
            ("x", self.x.into()),
            ("y", self.y.into()),
            ("map_id", self.map_id.into()),
            ("hp", self.hp.into()),
            ("keeper", self.keeper.into()),
            ("is_opening", self.is_opening.into()),
        ]
    }
}
