use thiserror::Error;

/// Errors emitted by the output writers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The SQL renderer assumes a uniform column set per table and rejects
    /// anything else rather than emit misaligned statements.
    #[error("mismatched columns in table '{table}': {detail}")]
    MismatchedColumns { table: String, detail: String },
}
