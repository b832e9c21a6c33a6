//! Model Artifact Loading

use crate::classifier::{Classifier, LinearClassifier};
use crate::encoder::LabelEncoder;
use crate::onnx::OnnxClassifier;
use crate::InferenceError;
use feature_engine::{Preprocessor, EXPANDED_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Locations of the three trained artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    /// Scaler + expander pipeline (JSON)
    pub preprocessor: PathBuf,
    /// Classifier (`.onnx` graph or linear-model JSON)
    pub classifier: PathBuf,
    /// Label encoder (JSON)
    pub label_encoder: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            preprocessor: PathBuf::from("assets/preprocessor.json"),
            classifier: PathBuf::from("assets/classifier.json"),
            label_encoder: PathBuf::from("assets/label_encoder.json"),
        }
    }
}

/// Loaded artifacts, checked against each other
pub struct ModelArtifacts {
    pub preprocessor: Preprocessor,
    pub classifier: Box<dyn Classifier>,
    pub labels: LabelEncoder,
}

impl std::fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("preprocessor", &self.preprocessor)
            .field("classifier_width", &self.classifier.input_width())
            .field("labels", &self.labels)
            .finish()
    }
}

impl ModelArtifacts {
    /// Bundle artifacts after checking that their shapes line up
    pub fn new(
        preprocessor: Preprocessor,
        classifier: Box<dyn Classifier>,
        labels: LabelEncoder,
    ) -> Result<Self, InferenceError> {
        if classifier.input_width() != preprocessor.output_width() {
            return Err(InferenceError::ModelLoadError(format!(
                "classifier expects {} features but the preprocessor produces {}",
                classifier.input_width(),
                preprocessor.output_width()
            )));
        }
        if classifier.n_classes() != labels.len() {
            return Err(InferenceError::ModelLoadError(format!(
                "classifier has {} classes but the label encoder knows {}",
                classifier.n_classes(),
                labels.len()
            )));
        }

        Ok(Self {
            preprocessor,
            classifier,
            labels,
        })
    }

    /// Load all three artifacts from disk
    pub fn load(paths: &ArtifactPaths) -> Result<Self, InferenceError> {
        let preprocessor = Preprocessor::from_path(&paths.preprocessor)?;
        let labels = LabelEncoder::from_path(&paths.label_encoder)?;

        let is_onnx = paths
            .classifier
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("onnx"));
        let classifier: Box<dyn Classifier> = if is_onnx {
            Box::new(OnnxClassifier::load(
                &paths.classifier,
                EXPANDED_WIDTH,
                labels.len(),
            )?)
        } else {
            Box::new(LinearClassifier::from_path(&paths.classifier)?)
        };

        let artifacts = Self::new(preprocessor, classifier, labels)?;
        info!(
            "Model artifacts loaded: {} classes {:?}",
            artifacts.labels.len(),
            artifacts.labels.classes()
        );
        Ok(artifacts)
    }
}
