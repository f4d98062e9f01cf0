use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate hairstyle in taxonomy: {0}")]
    DuplicateStyle(String),

    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("Invalid skin mask: {0}")]
    InvalidMask(String),
}

pub type Result<T> = std::result::Result<T, Error>;
