//! The test suite: case membership, execution, and score aggregation.
//!
//! A [`TestSuite`] owns an insertion-ordered, identity-keyed set of cases and
//! one shared [`Container`]. `run` visits every case in order, wrapping each
//! in the optional before/after hooks and adding its score into the
//! aggregate.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::case::{CaseHandle, TestCase};
use crate::container::{Container, MemoryContainer};
use crate::error::SuiteError;
use crate::registry::CaseRegistry;
use crate::score::ScoreEntry;

/// Callback invoked around each case during a run.
pub type Hook = Box<dyn FnMut(&TestCase)>;

/// Anything a suite can attach: an existing handle, an owned case, or the id
/// of a registered factory.
pub enum Attachable {
    Handle(CaseHandle),
    Case(TestCase),
    Registered(String),
}

impl From<CaseHandle> for Attachable {
    fn from(handle: CaseHandle) -> Self {
        Attachable::Handle(handle)
    }
}

impl From<&CaseHandle> for Attachable {
    fn from(handle: &CaseHandle) -> Self {
        Attachable::Handle(handle.clone())
    }
}

impl From<TestCase> for Attachable {
    fn from(case: TestCase) -> Self {
        Attachable::Case(case)
    }
}

impl From<&str> for Attachable {
    fn from(id: &str) -> Self {
        Attachable::Registered(id.to_string())
    }
}

impl From<String> for Attachable {
    fn from(id: String) -> Self {
        Attachable::Registered(id)
    }
}

/// Owner of attached cases; drives execution and aggregates their scores.
pub struct TestSuite {
    tests: Vec<CaseHandle>,
    members: HashSet<Uuid>,
    registry: CaseRegistry,
    container: Box<dyn Container>,
    score: f64,
    before_test: Option<Hook>,
    after_test: Option<Hook>,
}

impl std::fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSuite")
            .field("tests", &self.tests)
            .field("members", &self.members)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSuite {
    /// An empty suite with a default in-memory container.
    pub fn new() -> Self {
        Self {
            tests: Vec::new(),
            members: HashSet::new(),
            registry: CaseRegistry::new(),
            container: Box::new(MemoryContainer::new()),
            score: 0.0,
            before_test: None,
            after_test: None,
        }
    }

    /// Replace the shared container wholesale.
    pub fn set_container(&mut self, container: impl Container + 'static) -> &mut Self {
        self.container = Box::new(container);
        self
    }

    /// The shared container.
    pub fn container(&self) -> &dyn Container {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> &mut dyn Container {
        self.container.as_mut()
    }

    /// Register a zero-argument case factory for attach-by-id.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        factory: impl Fn() -> TestCase + 'static,
    ) -> &mut Self {
        self.registry.register(id, factory);
        self
    }

    /// Attach a single case, owned or by handle or registered id.
    ///
    /// Every attach assigns the case a `<kind>_<n>` name where `n` is the
    /// membership count at attach time. Attaching an already-attached handle
    /// leaves membership unchanged (but still renames; the count-at-attach
    /// numbering is historical behavior and goes stale after a detach).
    pub fn attach(&mut self, case: impl Into<Attachable>) -> Result<&mut Self, SuiteError> {
        let handle = self.resolve(case.into())?;
        self.insert(handle);
        Ok(self)
    }

    /// Attach a mixed sequence of cases, handles, and registered ids.
    ///
    /// All items are resolved before any is attached, so an unknown id leaves
    /// the suite unchanged.
    pub fn attach_all<I>(&mut self, cases: I) -> Result<&mut Self, SuiteError>
    where
        I: IntoIterator,
        I::Item: Into<Attachable>,
    {
        let resolved: Vec<CaseHandle> = cases
            .into_iter()
            .map(|case| self.resolve(case.into()))
            .collect::<Result<_, _>>()?;
        for handle in resolved {
            self.insert(handle);
        }
        Ok(self)
    }

    fn resolve(&self, case: Attachable) -> Result<CaseHandle, SuiteError> {
        match case {
            Attachable::Handle(handle) => Ok(handle),
            Attachable::Case(case) => Ok(case.into_handle()),
            Attachable::Registered(id) => Ok(self.registry.create(&id)?.into_handle()),
        }
    }

    fn insert(&mut self, handle: CaseHandle) {
        let (id, name) = {
            let mut case = handle.borrow_mut();
            let name = format!("{}_{}", case.kind(), self.tests.len());
            case.set_name(name.clone());
            (case.id(), name)
        };
        if self.members.insert(id) {
            debug!(case = %name, "attached case");
            self.tests.push(handle);
        }
    }

    /// Remove a case by identity. A no-op when absent; the case itself is
    /// not mutated.
    pub fn detach(&mut self, case: &CaseHandle) -> &mut Self {
        let id = case.borrow().id();
        if self.members.remove(&id) {
            self.tests.retain(|test| test.borrow().id() != id);
            debug!(case = %case.borrow().name(), "detached case");
        }
        self
    }

    /// Identity membership test.
    pub fn has(&self, case: &CaseHandle) -> bool {
        self.members.contains(&case.borrow().id())
    }

    /// The attached cases, in insertion order.
    pub fn tests(&self) -> &[CaseHandle] {
        &self.tests
    }

    /// Zero the aggregate and reset every attached case's score.
    pub fn reset(&mut self) {
        self.score = 0.0;
        for test in &self.tests {
            test.borrow_mut().score_mut().reset();
        }
    }

    /// Reset, then run every attached case. Returns the number of cases run.
    pub fn run(&mut self) -> usize {
        self.run_with_reset(true)
    }

    /// Run every attached case in insertion order, optionally resetting
    /// first. Each case's final score is added into the aggregate; the count
    /// of cases run is returned.
    pub fn run_with_reset(&mut self, reset: bool) -> usize {
        if reset {
            self.reset();
        }

        let mut tests_run = 0;
        for handle in &self.tests {
            let mut case = handle.borrow_mut();

            if let Some(hook) = self.before_test.as_mut() {
                hook(&case);
            }

            case.run(self.container.as_mut());

            if let Some(hook) = self.after_test.as_mut() {
                hook(&case);
            }

            self.score += case.score().value();
            tests_run += 1;
        }

        debug!(tests_run, score = self.score, "suite run complete");
        tests_run
    }

    /// Every attached case's entry history, keyed by its assigned name.
    /// Reflects current in-memory state.
    pub fn answers(&self) -> HashMap<String, Vec<ScoreEntry>> {
        self.tests
            .iter()
            .map(|test| {
                let case = test.borrow();
                (case.name().to_string(), case.score().entries().to_vec())
            })
            .collect()
    }

    /// The aggregate score accumulated by `run`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Aggregate score per attached case, or `None` when no cases are
    /// attached.
    pub fn average(&self) -> Option<f64> {
        if self.tests.is_empty() {
            None
        } else {
            Some(self.score / self.tests.len() as f64)
        }
    }

    /// Install a callback invoked before each case runs.
    pub fn on_before_test(&mut self, hook: impl FnMut(&TestCase) + 'static) -> &mut Self {
        self.before_test = Some(Box::new(hook));
        self
    }

    /// Install a callback invoked after each case runs.
    pub fn on_after_test(&mut self, hook: impl FnMut(&TestCase) + 'static) -> &mut Self {
        self.after_test = Some(Box::new(hook));
        self
    }
}
