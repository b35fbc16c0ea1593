//! Scored test cases.
//!
//! A [`TestCase`] pairs declared score bounds with a [`Check`] to run and the
//! [`Score`] ledger the check writes into. Cases are built with explicit
//! bounds through [`CaseBuilder`]; finishing the builder without a bound is a
//! construction error.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::container::Container;
use crate::error::CaseError;
use crate::score::Score;

/// The runnable part of a case.
///
/// Implemented by closures taking `(&mut Score, &mut dyn Container)` or by
/// structs that need setup state. `after_creation` runs exactly once, right
/// after the case's score exists and before the case is usable.
pub trait Check {
    /// Execute the check, incrementing `score` zero or more times.
    ///
    /// The returned flag is not consumed by the suite.
    fn run(&mut self, score: &mut Score, cx: &mut dyn Container) -> bool;

    /// Post-construction hook for pre-populating internal state.
    fn after_creation(&mut self, _score: &mut Score) {}
}

impl<F> Check for F
where
    F: FnMut(&mut Score, &mut dyn Container) -> bool,
{
    fn run(&mut self, score: &mut Score, cx: &mut dyn Container) -> bool {
        self(score, cx)
    }
}

/// Shared, identity-carrying handle to a case.
///
/// Suites track membership by the case's id, so cloning a handle and
/// attaching it twice is a membership no-op. Single-threaded by design.
pub type CaseHandle = Rc<RefCell<TestCase>>;

/// A single scored check executed by a suite against a shared container.
pub struct TestCase {
    id: Uuid,
    kind: String,
    name: String,
    min: f64,
    max: f64,
    score: Score,
    check: Box<dyn Check>,
}

impl TestCase {
    /// Start building a case.
    pub fn builder() -> CaseBuilder {
        CaseBuilder::default()
    }

    /// Build a case from explicit bounds and a check.
    pub fn new<C: Check + 'static>(min: f64, max: f64, check: C) -> Self {
        Self::assemble(
            min,
            max,
            std::any::type_name::<C>().to_string(),
            Box::new(check),
        )
    }

    fn assemble(min: f64, max: f64, kind: String, mut check: Box<dyn Check>) -> Self {
        let mut score = Score::new(min, max);
        check.after_creation(&mut score);
        Self {
            id: Uuid::new_v4(),
            kind,
            name: String::new(),
            min,
            max,
            score,
            check,
        }
    }

    /// Wrap the case in a shared handle for suite membership.
    pub fn into_handle(self) -> CaseHandle {
        Rc::new(RefCell::new(self))
    }

    /// Run the check against the owned score and the shared container.
    pub fn run(&mut self, cx: &mut dyn Container) -> bool {
        self.check.run(&mut self.score, cx)
    }

    /// Stable identity used for suite membership.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The qualified kind label the suite derives names from.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The suite-assigned name. Empty until the case is attached.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// The declared minimum score.
    pub fn min_score(&self) -> f64 {
        self.min
    }

    /// The declared maximum score.
    pub fn max_score(&self) -> f64 {
        self.max
    }

    /// The case's score ledger.
    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TestCase`].
///
/// Both bounds and the check are required; `build` reports whichever is
/// missing first.
#[derive(Default)]
pub struct CaseBuilder {
    min: Option<f64>,
    max: Option<f64>,
    kind: Option<String>,
    check: Option<Box<dyn Check>>,
}

impl CaseBuilder {
    /// Declare the lowest reachable score.
    pub fn min_score(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Declare the highest reachable score.
    pub fn max_score(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Override the kind label the suite derives names from. Defaults to the
    /// check's type name.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Supply the check to run.
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        if self.kind.is_none() {
            self.kind = Some(std::any::type_name::<C>().to_string());
        }
        self.check = Some(Box::new(check));
        self
    }

    /// Finish the case, validating that both bounds and a check were given.
    pub fn build(self) -> Result<TestCase, CaseError> {
        let min = self.min.ok_or(CaseError::MissingMinScore)?;
        let max = self.max.ok_or(CaseError::MissingMaxScore)?;
        let check = self.check.ok_or(CaseError::MissingCheck)?;
        let kind = self.kind.unwrap_or_else(|| "case".to_string());
        Ok(TestCase::assemble(min, max, kind, check))
    }
}
