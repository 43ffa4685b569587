use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("unknown filter option: {0}")]
    UnknownFilter(String),
    #[error("unknown sort option: {0}")]
    UnknownSort(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
