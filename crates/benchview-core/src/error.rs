use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchviewError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Container not found: #{0}")]
    ContainerNotFound(String),

    #[error("Modal error: {0}")]
    Modal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BenchviewError>;
