use thiserror::Error;

use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EMG signal source disconnected")]
    EmgDisconnected,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
