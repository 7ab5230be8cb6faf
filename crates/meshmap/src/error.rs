//! Error types for the height map pipeline

use thiserror::Error;

/// Result type for pipeline operations
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while building a height map
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to load mesh: {0}")]
    MeshLoad(#[from] tobj::LoadError),

    #[error("mesh contains no vertices")]
    EmptyMesh,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
