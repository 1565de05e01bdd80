use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockpulseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Docker error: {0}")]
    Docker(String),

    #[error("container {0} not found")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, DockpulseError>;
