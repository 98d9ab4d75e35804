use std::io;

/// All error types for scene binding.
///
/// Every variant is fatal for the object being set up. Recoverable
/// conditions (a missing material file, an unknown token, a malformed
/// number) never reach this type.
#[derive(thiserror::Error, Debug)]
pub enum SceneBinderError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("Mesh error: {0}")]
    Mesh(String),
    #[error("Texture error: {0}")]
    Texture(String),
    #[error("Area light error: {0}")]
    AreaLight(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SceneBinderError>;
