//! Door catalog data model types and YAML I/O.
//!
//! This crate defines the records the game server loads from
//! `server/data/yaml/`, without any knowledge of where they came from.
//! Producers (such as `doorconv-sql`) project their own records into these
//! types and hand them to [`write_entries`].

pub mod types;
pub mod yaml;

pub use types::*;
pub use yaml::{YamlError, load_entries, render_entries, write_entries};
