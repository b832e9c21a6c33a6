//! Career Profile Catalog
//!
//! Maps the classifier's RIASEC label to the human-readable profile shown
//! to the user.

mod catalog;
mod trait_code;

pub use catalog::{Profile, ProfileCatalog};
pub use trait_code::{TraitCode, UnknownTraitCode};
