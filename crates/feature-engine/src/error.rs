//! Feature Error Types

use thiserror::Error;

/// Errors raised while preparing feature vectors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Per-sample width does not match what the stage expects
    #[error("Invalid input shape: expected {expected} features, got {actual}")]
    InvalidShape { expected: usize, actual: usize },

    /// Scaler parameters are inconsistent
    #[error("Invalid scaler parameters: {0}")]
    InvalidScaler(String),

    /// Preprocessor artifact could not be read or parsed
    #[error("Failed to load preprocessor: {0}")]
    LoadFailed(String),
}
