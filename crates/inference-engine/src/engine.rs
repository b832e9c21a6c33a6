//! Inference Engine Implementation

use crate::artifacts::{ArtifactPaths, ModelArtifacts};
use crate::classifier::Classifier;
use crate::encoder::LabelEncoder;
use crate::InferenceError;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Prediction result for one questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class index produced by the classifier
    pub class_index: usize,
    /// Decoded label (expected to be a RIASEC letter)
    pub label: String,
    /// Preprocess + classify + decode latency in microseconds
    pub latency_us: u64,
}

/// Preprocess -> classify -> decode
///
/// Immutable once built, so it can be shared across request handlers without locking.
#[derive(Debug)]
pub struct InferenceEngine {
    artifacts: ModelArtifacts,
}

impl InferenceEngine {
    /// Create an engine over already loaded artifacts
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self { artifacts }
    }

    /// Load artifacts from disk and build an engine
    pub fn load(paths: &ArtifactPaths) -> Result<Self, InferenceError> {
        Ok(Self::new(ModelArtifacts::load(paths)?))
    }

    /// Predict the label for one validated answer vector
    pub fn predict(&self, answers: &[f64]) -> Result<Prediction, InferenceError> {
        let start = Instant::now();

        let features = self.artifacts.preprocessor.transform(answers)?;
        let class_index = self.artifacts.classifier.predict(&features)?;
        let label = self.artifacts.labels.decode(class_index)?.to_string();

        let latency_us = start.elapsed().as_micros() as u64;
        debug!(
            "Predicted class {} ({}) in {}us",
            class_index, label, latency_us
        );

        Ok(Prediction {
            class_index,
            label,
            latency_us,
        })
    }

    /// Predict labels for a batch of answer vectors, one per row
    pub fn predict_batch(&self, answers: ArrayView2<'_, f64>) -> Result<Vec<Prediction>, InferenceError> {
        let start = Instant::now();

        let features = self.artifacts.preprocessor.transform_batch(answers)?;
        let indices = self.artifacts.classifier.predict_batch(features.view())?;

        let latency_us = start.elapsed().as_micros() as u64;
        debug!("Predicted batch of {} in {}us", indices.len(), latency_us);

        indices
            .into_iter()
            .map(|class_index| {
                Ok(Prediction {
                    class_index,
                    label: self.artifacts.labels.decode(class_index)?.to_string(),
                    latency_us,
                })
            })
            .collect()
    }

    /// Label encoder in use
    pub fn labels(&self) -> &LabelEncoder {
        &self.artifacts.labels
    }
}
