use std::path::Path;

use doorconv_catalog::YamlError;

/// Errors that can occur while converting an SQL dump.
#[derive(Debug, thiserror::Error)]
pub enum SqlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{count} malformed `{table}` rows in {path} (first at line {first_line})")]
    MalformedRows {
        path: String,
        table: &'static str,
        count: usize,
        first_line: usize,
    },

    #[error(transparent)]
    Yaml(#[from] YamlError),

    #[error("Verification failed for {path}: wrote {expected} entries, read back {actual}")]
    VerifyMismatch {
        path: String,
        expected: usize,
        actual: usize,
    },
}

impl SqlError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
