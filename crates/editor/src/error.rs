// Chunk: docs/chunks/editor_config - Pixel projection and timing settings

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the host. Editing itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid editor config: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed editor config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
