//! Preprocessing Pipeline
//!
//! Optional standard scaling followed by feature expansion, mirroring the
//! pipeline the classifier was trained behind.

use crate::error::FeatureError;
use crate::expander::{FeatureExpander, EXPANDED_WIDTH, INPUT_WIDTH};
use crate::scaler::StandardScaler;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Scaler + expander pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    /// Standard scaler applied to the raw answers, if the pipeline has one
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    #[serde(skip)]
    expander: FeatureExpander,
}

impl Preprocessor {
    /// Pipeline with the given scaler stage
    pub fn new(scaler: Option<StandardScaler>) -> Result<Self, FeatureError> {
        let preprocessor = Self {
            scaler,
            expander: FeatureExpander::new(),
        };
        preprocessor.check()?;
        Ok(preprocessor)
    }

    /// Expansion only, no scaling
    pub fn expand_only() -> Self {
        Self::default()
    }

    /// Load a pipeline from its JSON artifact
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeatureError> {
        let path = path.as_ref();
        info!("Loading preprocessor from {}", path.display());

        let raw = std::fs::read_to_string(path)
            .map_err(|e| FeatureError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        let preprocessor = Self::from_json(&raw)?;

        debug!("Preprocessor scaler stage: {}", preprocessor.scaler.is_some());
        Ok(preprocessor)
    }

    /// Parse a pipeline from JSON text
    pub fn from_json(raw: &str) -> Result<Self, FeatureError> {
        let preprocessor: Self =
            serde_json::from_str(raw).map_err(|e| FeatureError::LoadFailed(e.to_string()))?;
        preprocessor.check()?;
        Ok(preprocessor)
    }

    fn check(&self) -> Result<(), FeatureError> {
        if let Some(scaler) = &self.scaler {
            scaler.check()?;
            if scaler.width() != INPUT_WIDTH {
                return Err(FeatureError::InvalidScaler(format!(
                    "scaler fitted on {} columns, expected {}",
                    scaler.width(),
                    INPUT_WIDTH
                )));
            }
        }
        Ok(())
    }

    /// Width of the vectors this pipeline produces
    pub fn output_width(&self) -> usize {
        EXPANDED_WIDTH
    }

    /// Run one sample through the pipeline
    pub fn transform(&self, sample: &[f64]) -> Result<Vec<f64>, FeatureError> {
        if sample.len() != INPUT_WIDTH {
            return Err(FeatureError::InvalidShape {
                expected: INPUT_WIDTH,
                actual: sample.len(),
            });
        }

        match &self.scaler {
            Some(scaler) => self.expander.expand(&scaler.transform(sample)?),
            None => self.expander.expand(sample),
        }
    }

    /// Run a batch (one sample per row) through the pipeline
    pub fn transform_batch(&self, samples: ArrayView2<'_, f64>) -> Result<Array2<f64>, FeatureError> {
        let Some(scaler) = &self.scaler else {
            return self.expander.transform(samples);
        };

        if samples.ncols() != INPUT_WIDTH {
            return Err(FeatureError::InvalidShape {
                expected: INPUT_WIDTH,
                actual: samples.ncols(),
            });
        }

        let mut scaled = Array2::zeros(samples.raw_dim());
        for (row, mut dst) in samples.outer_iter().zip(scaled.outer_iter_mut()) {
            let values = scaler.transform(&row.to_vec())?;
            dst.assign(&ndarray::ArrayView1::from(&values[..]));
        }
        self.expander.transform(scaled.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_only_matches_expander() {
        let input: Vec<f64> = (0..INPUT_WIDTH).map(|v| (v % 5) as f64 + 1.0).collect();
        let out = Preprocessor::expand_only().transform(&input).unwrap();
        assert_eq!(out, FeatureExpander::new().expand(&input).unwrap());
    }

    #[test]
    fn test_scaler_runs_before_expansion() {
        let scaler = StandardScaler::new(vec![3.0; INPUT_WIDTH], vec![2.0; INPUT_WIDTH]).unwrap();
        let pipeline = Preprocessor::new(Some(scaler)).unwrap();

        let out = pipeline.transform(&[5.0; INPUT_WIDTH]).unwrap();
        assert_eq!(out.len(), EXPANDED_WIDTH);
        assert!(out.iter().all(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_rejects_wrong_width_before_scaling() {
        let err = Preprocessor::expand_only().transform(&[1.0; 10]).unwrap_err();
        assert_eq!(err, FeatureError::InvalidShape { expected: INPUT_WIDTH, actual: 10 });
    }

    #[test]
    fn test_rejects_scaler_of_wrong_width() {
        let scaler = StandardScaler::identity(12);
        assert!(Preprocessor::new(Some(scaler)).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = format!(
            r#"{{"scaler": {{"mean": {:?}, "scale": {:?}}}}}"#,
            vec![0.0; INPUT_WIDTH],
            vec![1.0; INPUT_WIDTH]
        );
        let pipeline = Preprocessor::from_json(&json).unwrap();
        assert!(pipeline.scaler.is_some());

        let pipeline = Preprocessor::from_json(r#"{"scaler": null}"#).unwrap();
        assert!(pipeline.scaler.is_none());
        assert!(Preprocessor::from_json("not json").is_err());
    }

    #[test]
    fn test_batch_matches_single() {
        let scaler = StandardScaler::new(vec![1.0; INPUT_WIDTH], vec![0.5; INPUT_WIDTH]).unwrap();
        let pipeline = Preprocessor::new(Some(scaler)).unwrap();

        let rows: Vec<f64> = (0..2 * INPUT_WIDTH).map(|v| (v % 7) as f64).collect();
        let batch = Array2::from_shape_vec((2, INPUT_WIDTH), rows.clone()).unwrap();
        let out = pipeline.transform_batch(batch.view()).unwrap();

        assert_eq!(out.row(1).to_vec(), pipeline.transform(&rows[INPUT_WIDTH..]).unwrap());
    }
}
