//! Error types for case construction, scoring, and suite operations.
//!
//! All failures are synchronous and raised at the offending call. An attach
//! failure leaves the suite untouched; nothing is ever partially attached.

use thiserror::Error;

/// Errors raised while building a test case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    /// The builder was finished without a minimum score.
    #[error("a case must declare a minimum score to indicate the lowest reachable score")]
    MissingMinScore,

    /// The builder was finished without a maximum score.
    #[error("a case must declare a maximum score to indicate the highest reachable score")]
    MissingMaxScore,

    /// The builder was finished without a check to run.
    #[error("a case must provide a check to run")]
    MissingCheck,
}

/// Errors raised by score statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// `percentage()` against a zero maximum score would divide by zero.
    #[error("cannot compute a percentage against a zero maximum score")]
    ZeroMaxScore,
}

/// Errors raised by suite operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuiteError {
    /// An attach referred to a case id with no registered factory.
    #[error("no case factory registered under id '{0}'")]
    UnknownCase(String),
}
