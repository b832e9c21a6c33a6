//! Classifier Interface and Linear Backend

use crate::InferenceError;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A pre-trained classifier: feature vector in, class index out
pub trait Classifier: Send + Sync {
    /// Predict the class index for one feature vector
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError>;

    /// Number of classes the model distinguishes
    fn n_classes(&self) -> usize;

    /// Feature vector width the model was trained on
    fn input_width(&self) -> usize;

    /// Predict one class index per row
    fn predict_batch(&self, features: ArrayView2<'_, f64>) -> Result<Vec<usize>, InferenceError> {
        features
            .outer_iter()
            .map(|row| self.predict(&row.to_vec()))
            .collect()
    }
}

/// Index of the first maximum; non-finite scores are an error
pub(crate) fn argmax(scores: impl IntoIterator<Item = f64>) -> Result<usize, InferenceError> {
    let mut best: Option<(usize, f64)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        if !score.is_finite() {
            return Err(InferenceError::InferenceFailed(format!(
                "non-finite score {score} for class {i}"
            )));
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
        .ok_or_else(|| InferenceError::InferenceFailed("model produced no scores".to_string()))
}

#[derive(Debug, Serialize, Deserialize)]
struct LinearModelFile {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

/// Linear model: `scores = W x + b`
///
/// One coefficient row per class predicts the argmax. A single row is a
/// binary model that predicts class 1 when its score is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
}

impl LinearClassifier {
    /// Create a classifier from a `(classes, features)` matrix and intercepts
    pub fn new(coefficients: Array2<f64>, intercepts: Array1<f64>) -> Result<Self, InferenceError> {
        if coefficients.nrows() == 0 || coefficients.ncols() == 0 {
            return Err(InferenceError::ModelLoadError(
                "linear model has no coefficients".to_string(),
            ));
        }
        if coefficients.nrows() != intercepts.len() {
            return Err(InferenceError::ModelLoadError(format!(
                "{} coefficient rows but {} intercepts",
                coefficients.nrows(),
                intercepts.len()
            )));
        }
        if coefficients.iter().chain(intercepts.iter()).any(|v| !v.is_finite()) {
            return Err(InferenceError::ModelLoadError(
                "linear model parameters must be finite".to_string(),
            ));
        }
        Ok(Self {
            coefficients,
            intercepts,
        })
    }

    /// Create a classifier from coefficient rows
    pub fn from_rows(rows: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self, InferenceError> {
        let n_rows = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return Err(InferenceError::ModelLoadError(
                "coefficient rows have different lengths".to_string(),
            ));
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let coefficients = Array2::from_shape_vec((n_rows, width), flat)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))?;
        Self::new(coefficients, Array1::from(intercepts))
    }

    /// Load from a JSON artifact: `{"coefficients": [[..]], "intercepts": [..]}`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading linear classifier from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Parse from JSON text
    pub fn from_json(raw: &str) -> Result<Self, InferenceError> {
        let file: LinearModelFile = serde_json::from_str(raw)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))?;
        Self::from_rows(file.coefficients, file.intercepts)
    }

    /// Raw per-row scores
    pub fn decision_function(&self, features: &[f64]) -> Result<Array1<f64>, InferenceError> {
        if features.len() != self.input_width() {
            return Err(InferenceError::InvalidInputShape {
                expected: self.input_width(),
                actual: features.len(),
            });
        }
        Ok(self.coefficients.dot(&ArrayView1::from(features)) + &self.intercepts)
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        let scores = self.decision_function(features)?;

        if scores.len() == 1 {
            let score = scores[0];
            if !score.is_finite() {
                return Err(InferenceError::InferenceFailed(format!(
                    "non-finite score {score}"
                )));
            }
            return Ok(usize::from(score > 0.0));
        }
        argmax(scores.iter().copied())
    }

    fn n_classes(&self) -> usize {
        match self.coefficients.nrows() {
            1 => 2,
            n => n,
        }
    }

    fn input_width(&self) -> usize {
        self.coefficients.ncols()
    }
}
