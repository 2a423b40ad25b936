use std::fmt;

#[derive(Debug)]
pub enum ZImageError {
    ConfigError(String),
    UpstreamError { status: u16, detail: String },
    TransportError(String),
    ResponseError(String),
    IoError(String),
}

impl fmt::Display for ZImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZImageError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ZImageError::UpstreamError { status, detail } => {
                write!(f, "API error: {} - {}", status, detail)
            }
            ZImageError::TransportError(msg) => write!(f, "Transport error: {}", msg),
            ZImageError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            ZImageError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ZImageError {}

pub type Result<T> = std::result::Result<T, ZImageError>;
