//! Label Encoder

use crate::InferenceError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Maps class indices back to the labels the classifier was trained on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Create an encoder; class `i` decodes to `classes[i]`
    pub fn new(classes: Vec<String>) -> Result<Self, InferenceError> {
        if classes.is_empty() {
            return Err(InferenceError::ModelLoadError(
                "label encoder has no classes".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = classes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(InferenceError::ModelLoadError(format!(
                "duplicate class label {dup:?}"
            )));
        }
        Ok(Self { classes })
    }

    /// Load from a JSON artifact: `{"classes": [...]}`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading label encoder from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Parse from JSON text
    pub fn from_json(raw: &str) -> Result<Self, InferenceError> {
        let parsed: Self = serde_json::from_str(raw)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))?;
        Self::new(parsed.classes)
    }

    /// Label for a class index
    pub fn decode(&self, index: usize) -> Result<&str, InferenceError> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClassIndex {
                index,
                classes: self.classes.len(),
            })
    }

    /// Class index for a label
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    /// Known labels in class order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a constructed encoder
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
