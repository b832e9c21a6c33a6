//! Feature Engineering Engine
//!
//! Turns a 48-answer RIASEC questionnaire into the 398-wide feature vector
//! the trained classifier was fitted on.

mod error;
mod expander;
mod layout;
mod preprocessor;
mod scaler;

pub use error::FeatureError;
pub use expander::{FeatureExpander, EXPANDED_WIDTH, INPUT_WIDTH};
pub use layout::{column_index, column_names, ITEMS_PER_LETTER, TRAIT_LETTERS};
pub use preprocessor::Preprocessor;
pub use scaler::StandardScaler;
