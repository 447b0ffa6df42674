use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A table conversion failed
    #[error(transparent)]
    Sql(#[from] doorconv_sql::SqlError),

    /// One or more pipelines did not complete
    #[error("{0} of the conversions failed")]
    PipelineFailed(usize),
}
