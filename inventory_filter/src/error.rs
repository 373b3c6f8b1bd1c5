use thiserror::Error;

use crate::{Policy, RESULTS_KEY};

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// The inventory itself lacks the `results` sequence.
    #[error("inventory: missing key '{}'", RESULTS_KEY)]
    MissingResults,
    #[error("device record {record}: missing key '{path}'")]
    MissingKey { record: usize, path: String },
    #[error("device record {record}: expected a mapping at '{path}'")]
    NotAMapping { record: usize, path: String },
}

#[derive(Error, Debug, PartialEq)]
#[error(
    "unknown filter policy '{name}' (expected one of: {})",
    Policy::names().join(", ")
)]
pub struct PolicyNotFound {
    pub name: String,
}
