use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Browser window is not available")]
    WindowUnavailable,

    #[error("Failed to register event listener: {0}")]
    ListenerRegistration(String),

    #[error("Failed to remove event listener: {0}")]
    ListenerRemoval(String),

    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
