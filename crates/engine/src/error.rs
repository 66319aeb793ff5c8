use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("event channel closed")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, EngineError>;
