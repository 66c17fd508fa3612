use thiserror::Error;

/// Core error type shared across Rowpress crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The entity model description violates internal invariants, e.g. a
    /// junction column whose foreign key targets neither side of the
    /// relationship.
    #[error("malformed entity model: {0}")]
    MalformedModel(String),
}

/// Convenience alias for results returned by Rowpress crates.
pub type Result<T> = std::result::Result<T, Error>;
