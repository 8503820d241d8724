use thiserror::Error;
use tilecss::StyleError;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Operation needs exactly {expected} selected style(s), found {actual}")]
    InvalidSelection { expected: usize, actual: usize },

    #[error("The palette is empty; save a style first")]
    EmptyPalette,

    #[error("No style is selected")]
    NoStyleSelected,

    #[error("Palette index {index} is out of range for {len} styles")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Attribute `{0}` can only be added once")]
    DuplicateAttribute(String),

    #[error("No active attribute with instance id `{0}`")]
    UnknownInstance(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ForgeError>;
