//! Dump → catalog conversion for a single table.

use std::fmt;
use std::path::{Path, PathBuf};

use doorconv_catalog::{load_entries, write_entries};

use crate::dump::{DumpRecord, ParseMode, parse_dump_file};
use crate::error::SqlError;

/// Options shared by every table conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub mode: ParseMode,
    /// Re-read the written document and compare the entry count.
    pub verify: bool,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub label: &'static str,
    pub written: usize,
    /// Malformed insert lines dropped in permissive mode.
    pub skipped: usize,
    pub dest: PathBuf,
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} {} entries to {}",
            self.written,
            self.label,
            self.dest.display()
        )
    }
}

/// Extract every `R` row from `source` and write the catalog document to `dest`.
pub fn convert_dump<R: DumpRecord>(
    source: &Path,
    dest: &Path,
    options: &ConvertOptions,
) -> Result<ConvertReport, SqlError> {
    let scan = parse_dump_file::<R>(source, options.mode)?;
    if !scan.malformed.is_empty() {
        log::debug!(
            "{}: dropped {} malformed `{}` rows",
            source.display(),
            scan.malformed.len(),
            R::TABLE
        );
    }

    let entries: Vec<R::Output> = scan.records.iter().map(R::project).collect();
    write_entries(&entries, dest)?;

    if options.verify {
        let loaded = load_entries::<R::Output>(dest)?;
        if loaded.len() != entries.len() {
            return Err(SqlError::VerifyMismatch {
                path: dest.display().to_string(),
                expected: entries.len(),
                actual: loaded.len(),
            });
        }
        log::debug!("Verified {} entries in {}", loaded.len(), dest.display());
    }

    Ok(ConvertReport {
        label: R::LABEL,
        written: entries.len(),
        skipped: scan.malformed.len(),
        dest: dest.to_path_buf(),
    })
}
