use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unknown style: {0}")]
    UnknownStyle(String),
    #[error("unknown character: {0:?}")]
    UnknownChar(char),
    #[error("invalid render options: {0}")]
    InvalidOptions(String),
    #[error("renderer panicked: {0}")]
    Panicked(String),
    #[error("render target rejected output")]
    Target,
    #[error("unrecognized font format")]
    UnrecognizedFormat,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FontError>;
