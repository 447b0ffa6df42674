//! YAML emission and loading for door catalog documents.
//!
//! Documents are a single top-level key holding a block list:
//!
//! ```text
//! door_gfxs:
//!   - gfxid: 101
//!     direction: 2
//!     left_edge_offset: -5
//!     right_edge_offset: 10
//! ```
//!
//! Emission is hand-formatted so the layout stays stable regardless of the
//! YAML library's own indentation rules. Loading goes through `serde_yml`.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::CatalogEntry;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Key `{key}` not found in {path}")]
    MissingKey { path: String, key: &'static str },
}

impl YamlError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Render entries as a complete YAML document.
///
/// An empty slice yields just the root key line.
pub fn render_entries<T: CatalogEntry>(entries: &[T]) -> String {
    let mut out = String::new();
    out.push_str(T::ROOT_KEY);
    out.push_str(":\n");

    for entry in entries {
        for (i, (name, value)) in entry.fields().into_iter().enumerate() {
            let lead = if i == 0 { "  - " } else { "    " };
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{lead}{name}: {value}");
        }
    }

    out
}

/// Render entries and replace the document at `path`.
///
/// The content is staged to `<path>.tmp` and renamed into place. The parent
/// directory must already exist.
pub fn write_entries<T: CatalogEntry>(entries: &[T], path: &Path) -> Result<(), YamlError> {
    let rendered = render_entries(entries);

    let tmp = staging_path(path);
    let staged = std::fs::write(&tmp, rendered).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = staged {
        // A partial write may have created the staging file.
        let _ = std::fs::remove_file(&tmp);
        return Err(YamlError::io(path, e));
    }

    Ok(())
}

/// Load the list stored under `T::ROOT_KEY` from a YAML document.
///
/// A key with no items (`doors:` alone) loads as an empty list.
pub fn load_entries<T>(path: &Path) -> Result<Vec<T>, YamlError>
where
    T: CatalogEntry + DeserializeOwned,
{
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::io(path, e))?;
    let mut doc: BTreeMap<String, Option<Vec<T>>> =
        serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

    match doc.remove(T::ROOT_KEY) {
        Some(items) => Ok(items.unwrap_or_default()),
        None => Err(YamlError::MissingKey {
            path: path.display().to_string(),
            key: T::ROOT_KEY,
        }),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
