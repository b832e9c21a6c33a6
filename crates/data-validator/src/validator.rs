//! Answer Validator

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Answers expected per questionnaire
pub const EXPECTED_ANSWERS: usize = 48;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Required number of answers
    pub expected_answers: usize,
    /// Inclusive answer range; `None` accepts any integer
    pub answer_range: Option<(i64, i64)>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            expected_answers: EXPECTED_ANSWERS,
            answer_range: None,
        }
    }
}

impl ValidationConfig {
    /// Restrict answers to a Likert scale of `1..=points`
    pub fn likert(points: i64) -> Self {
        Self {
            answer_range: Some((1, points)),
            ..Default::default()
        }
    }
}

/// Validator for raw questionnaire answers
#[derive(Debug, Clone, Default)]
pub struct AnswerValidator {
    config: ValidationConfig,
}

impl AnswerValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate answers and convert them to model input values
    pub fn validate(&self, answers: &[i64]) -> Result<Vec<f64>, ValidationError> {
        if answers.len() != self.config.expected_answers {
            debug!(
                "Rejecting {} answers (expected {})",
                answers.len(),
                self.config.expected_answers
            );
            return Err(ValidationError::WrongAnswerCount {
                expected: self.config.expected_answers,
                actual: answers.len(),
            });
        }

        if let Some((min, max)) = self.config.answer_range {
            if let Some((index, &value)) = answers
                .iter()
                .enumerate()
                .find(|&(_, &v)| v < min || v > max)
            {
                return Err(ValidationError::OutOfRange {
                    index,
                    value,
                    min,
                    max,
                });
            }
        }

        Ok(answers.iter().map(|&v| v as f64).collect())
    }
}
