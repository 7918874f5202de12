//! Error types for point export.

use thiserror::Error;

/// Errors that can occur while exporting mesh points.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The decoded asset is not a single triangulated mesh.
    #[error("asset is not a single mesh: found {found}")]
    InvalidAsset { found: String },

    /// The input could not be parsed as a glTF/GLB container.
    #[error("failed to decode glTF asset: {0}")]
    Decode(#[from] gltf::Error),

    /// The point list could not be encoded as JSON.
    #[error("failed to encode points as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading the input or writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
