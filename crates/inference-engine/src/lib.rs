//! Inference Engine
//!
//! Runs preprocessed questionnaire features through a pre-trained classifier
//! and decodes the predicted class into its RIASEC label.

mod artifacts;
mod classifier;
mod encoder;
mod engine;
mod onnx;

pub use artifacts::{ArtifactPaths, ModelArtifacts};
pub use classifier::{Classifier, LinearClassifier};
pub use encoder::LabelEncoder;
pub use engine::{InferenceEngine, Prediction};
pub use onnx::OnnxClassifier;

use feature_engine::FeatureError;
use thiserror::Error;

/// Errors during inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
    #[error("Class index {index} has no label ({classes} labels known)")]
    UnknownClassIndex { index: usize, classes: usize },
}

impl From<FeatureError> for InferenceError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::InvalidShape { expected, actual } => {
                InferenceError::InvalidInputShape { expected, actual }
            }
            FeatureError::LoadFailed(msg) => InferenceError::ModelLoadError(msg),
            FeatureError::InvalidScaler(msg) => InferenceError::ModelLoadError(msg),
        }
    }
}
