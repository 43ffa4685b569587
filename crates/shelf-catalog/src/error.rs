use thiserror::Error;

/// Failure while loading the catalog payload.
///
/// Any failure means no books at all; the source never returns a partial
/// collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Payload file missing or unreadable.
    #[error("failed to read catalog payload: {0}")]
    Io(#[from] std::io::Error),
    /// Payload present but structurally invalid.
    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
