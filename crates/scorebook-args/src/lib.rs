//! scorebook-args — Declarative command line option management.
//!
//! Declare named options with short/long prefixes, required flags, and
//! default values; parse an argv token stream; look values up by name.
//! Parsing fails with an error listing every unmet required option.

pub mod argument;
pub mod error;
pub mod manager;

mod parser;
