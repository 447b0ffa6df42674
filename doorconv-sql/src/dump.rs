//! Line-oriented extraction of `INSERT INTO` rows from MySQL dump files.
//!
//! Each table is described by a [`DumpRecord`] implementation: the table
//! name, a compiled row pattern, and a conversion from captures to a typed
//! record. Rows are expected one per line, in the form
//!
//! ```text
//! INSERT INTO `door_gfxs` VALUES ('101', 'north door', '2', '-5', '10');
//! ```
//!
//! Lines that do not match are skipped. Lines that carry the table's insert
//! marker but fail to match are additionally counted as malformed so that
//! [`ParseMode::Strict`] can reject them.

use std::path::Path;

use doorconv_catalog::CatalogEntry;
use regex::{Captures, Regex};
use serde::de::DeserializeOwned;

use crate::error::SqlError;

/// Shape of a single quoted column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Decimal digits only.
    Unsigned,
    /// Decimal digits with an optional leading `-`.
    Signed,
    /// Any text without a single quote.
    Text,
}

impl Column {
    fn capture(self) -> &'static str {
        match self {
            Column::Unsigned => r"(\d+)",
            Column::Signed => r"(-?\d+)",
            Column::Text => r"([^']*)",
        }
    }
}

/// Build the row pattern for `table` with the given column shapes.
///
/// Every value is single-quoted; whitespace after each separating comma is
/// optional. Capture group `n` holds column `n - 1`.
pub fn insert_pattern(table: &str, columns: &[Column]) -> Result<Regex, regex::Error> {
    let values = columns
        .iter()
        .map(|c| format!("'{}'", c.capture()))
        .collect::<Vec<_>>()
        .join(r",\s*");
    Regex::new(&format!(
        r"INSERT INTO `{}` VALUES \({}\);",
        regex::escape(table),
        values
    ))
}

/// A typed row of one dump table.
pub trait DumpRecord: Sized {
    /// Table name as it appears between backticks.
    const TABLE: &'static str;

    /// Human-readable label used in completion messages.
    const LABEL: &'static str;

    /// Public record written to the YAML catalog.
    type Output: CatalogEntry + DeserializeOwned + for<'a> From<&'a Self>;

    /// Compiled row pattern.
    fn pattern() -> &'static Regex;

    /// Convert a successful match. `None` when a numeric column does not fit.
    fn from_captures(caps: &Captures<'_>) -> Option<Self>;

    /// Project to the public record.
    fn project(&self) -> Self::Output {
        <Self::Output as From<&Self>>::from(self)
    }
}

/// How non-matching insert lines are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip them.
    #[default]
    Permissive,
    /// Fail the parse if any exist.
    Strict,
}

/// Result of scanning one dump.
#[derive(Debug, Clone)]
pub struct DumpScan<R> {
    /// Records in input order.
    pub records: Vec<R>,
    /// 1-based line numbers of malformed insert lines.
    pub malformed: Vec<usize>,
}

/// Scan dump content for rows of `R`.
pub fn scan_dump<R: DumpRecord>(content: &str) -> DumpScan<R> {
    let marker = format!("INSERT INTO `{}`", R::TABLE);
    let mut records = Vec::new();
    let mut malformed = Vec::new();

    for (idx, line) in dump_lines(content).enumerate() {
        let record = R::pattern()
            .captures(line)
            .and_then(|caps| R::from_captures(&caps));

        match record {
            Some(record) => records.push(record),
            None if line.contains(&marker) => {
                log::debug!("Skipping malformed `{}` row at line {}", R::TABLE, idx + 1);
                malformed.push(idx + 1);
            }
            None => {}
        }
    }

    DumpScan { records, malformed }
}

/// Split dump content into lines, accepting `\n`, `\r\n` and bare `\r`
/// terminators.
fn dump_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Read and scan a dump file.
pub fn parse_dump_file<R: DumpRecord>(path: &Path, mode: ParseMode) -> Result<DumpScan<R>, SqlError> {
    let content = std::fs::read_to_string(path).map_err(|e| SqlError::io(path, e))?;
    let scan = scan_dump::<R>(&content);

    if mode == ParseMode::Strict {
        if let Some(&first_line) = scan.malformed.first() {
            return Err(SqlError::MalformedRows {
                path: path.display().to_string(),
                table: R::TABLE,
                count: scan.malformed.len(),
                first_line,
            });
        }
    }

    Ok(scan)
}

/// Parse capture group `i` as a decimal `i32`.
pub(crate) fn int_field(caps: &Captures<'_>, i: usize) -> Option<i32> {
    caps.get(i)?.as_str().parse().ok()
}

/// Capture group `i` as owned text.
pub(crate) fn text_field(caps: &Captures<'_>, i: usize) -> String {
    caps.get(i).map_or_else(String::new, |m| m.as_str().to_string())
}
