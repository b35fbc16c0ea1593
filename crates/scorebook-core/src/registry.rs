//! Factory registry for attach-by-identifier.
//!
//! Callers register a zero-argument constructor under a case id; a suite can
//! then attach cases by id instead of holding instances. This replaces the
//! original attach-by-class-name with an explicit lookup.

use std::collections::HashMap;
use std::fmt;

use crate::case::TestCase;
use crate::error::SuiteError;

type Factory = Box<dyn Fn() -> TestCase>;

/// Case factories keyed by identifier.
#[derive(Default)]
pub struct CaseRegistry {
    factories: HashMap<String, Factory>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `id`, replacing any previous registration.
    pub fn register(&mut self, id: impl Into<String>, factory: impl Fn() -> TestCase + 'static) {
        self.factories.insert(id.into(), Box::new(factory));
    }

    /// Whether a factory is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Instantiate a fresh case from the factory registered under `id`.
    pub fn create(&self, id: &str) -> Result<TestCase, SuiteError> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| SuiteError::UnknownCase(id.to_string()))
    }

    /// The registered identifiers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl fmt::Debug for CaseRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseRegistry")
            .field("ids", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
