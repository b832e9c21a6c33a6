//! Standard Scaling

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// Per-column standardization: `(x - mean) / scale`
///
/// A zero `scale` is treated as 1 so constant columns only get centred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Column means fitted at training time
    pub mean: Vec<f64>,
    /// Column standard deviations fitted at training time
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler, checking that both parameter vectors agree
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, FeatureError> {
        let scaler = Self { mean, scale };
        scaler.check()?;
        Ok(scaler)
    }

    /// Identity scaler for `width` columns
    pub fn identity(width: usize) -> Self {
        Self {
            mean: vec![0.0; width],
            scale: vec![1.0; width],
        }
    }

    /// Number of columns this scaler was fitted on
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Validate parameters (used after deserialization)
    pub fn check(&self) -> Result<(), FeatureError> {
        if self.mean.len() != self.scale.len() {
            return Err(FeatureError::InvalidScaler(format!(
                "mean has {} columns but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(FeatureError::InvalidScaler(
                "parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Scale one sample
    pub fn transform(&self, sample: &[f64]) -> Result<Vec<f64>, FeatureError> {
        if sample.len() != self.width() {
            return Err(FeatureError::InvalidShape {
                expected: self.width(),
                actual: sample.len(),
            });
        }

        Ok(sample
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mean, &scale))| {
                let scale = if scale == 0.0 { 1.0 } else { scale };
                (x - mean) / scale
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardizes_columns() {
        let scaler = StandardScaler::new(vec![3.0, 1.0], vec![2.0, 0.5]).unwrap();
        let out = scaler.transform(&[5.0, 0.0]).unwrap();
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_scale_only_centres() {
        let scaler = StandardScaler::new(vec![4.0], vec![0.0]).unwrap();
        assert_eq!(scaler.transform(&[6.0]).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_identity_is_noop() {
        let scaler = StandardScaler::identity(3);
        assert_eq!(scaler.transform(&[1.0, 2.0, 3.0]).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mismatched_parameters() {
        assert!(StandardScaler::new(vec![0.0; 3], vec![1.0; 2]).is_err());
        assert!(StandardScaler::new(vec![f64::NAN], vec![1.0]).is_err());
    }

    #[test]
    fn test_wrong_sample_width() {
        let scaler = StandardScaler::identity(4);
        assert_eq!(
            scaler.transform(&[1.0]).unwrap_err(),
            FeatureError::InvalidShape { expected: 4, actual: 1 }
        );
    }
}
