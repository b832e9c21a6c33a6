//! Answer Validation
//!
//! Checks raw questionnaire answers before they reach the preprocessing pipeline.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{AnswerValidator, ValidationConfig, EXPECTED_ANSWERS};
