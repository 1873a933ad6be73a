//! Error types for syncomp-is
//!
//! The mapping engine itself only fails on precondition violations, which
//! arrive as `syncomp_common::Error::InvalidInput`. Everything else here
//! belongs to the front-end collaborators (image decoding, library file).

use thiserror::Error;

/// InputSense error type
#[derive(Debug, Error)]
pub enum SenseError {
    /// syncomp-common error (invalid input, config, not found)
    #[error("{0}")]
    Common(#[from] syncomp_common::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image could not be opened or decoded
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Library file is not valid JSON
    #[error("Library format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SenseError {
    /// True when the caller supplied input the engine refuses to map
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SenseError::Common(syncomp_common::Error::InvalidInput(_))
        )
    }
}

/// Result type for InputSense operations
pub type SenseResult<T> = Result<T, SenseError>;
