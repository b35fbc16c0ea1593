//! Argument parsing errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// One or more required options were absent and had no default.
    #[error("the following arguments are required: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}
