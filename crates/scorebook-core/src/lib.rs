//! scorebook-core — Scored test cases, suites, and the shared run container.
//!
//! This crate defines the score ledger, the case/check model, the key-value
//! container cases share during a run, and the suite that drives them.

pub mod case;
pub mod container;
pub mod error;
pub mod registry;
pub mod score;
pub mod suite;
