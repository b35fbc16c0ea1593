//! The per-case score ledger.
//!
//! Every [`crate::case::TestCase`] owns exactly one [`Score`]. Checks call
//! [`Score::increment`] (or [`Score::increment_with`] to record a motivation
//! and the given answer) while they run; the suite reads the final value when
//! it aggregates.

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One recorded increment: the delta, its 0-based position, and the optional
/// motivation/answer texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// 0-based index, assigned in increment order.
    pub increment: usize,
    /// The delta applied to the running total.
    pub score: f64,
    /// Why this delta was awarded.
    #[serde(default)]
    pub motivation: String,
    /// The answer that earned this delta.
    #[serde(default)]
    pub answer: String,
}

/// A running score bounded by the owning case's declared minimum and maximum.
///
/// The total starts at the minimum and moves by increments; the entry history
/// preserves insertion order. `set_value` bypasses the bookkeeping entirely
/// (test doubles and restored results use it).
#[derive(Debug, Clone)]
pub struct Score {
    value: f64,
    increments: usize,
    entries: Vec<ScoreEntry>,
    min: f64,
    max: f64,
}

impl Score {
    /// Create a score for the given bounds, starting at `min`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            value: min,
            increments: 0,
            entries: Vec::new(),
            min,
            max,
        }
    }

    /// Add `delta` to the total and record an entry with no motivation.
    pub fn increment(&mut self, delta: f64) {
        self.increment_with(delta, "", "");
    }

    /// Add `delta` to the total and record an entry with a motivation and the
    /// answer that earned it.
    pub fn increment_with(
        &mut self,
        delta: f64,
        motivation: impl Into<String>,
        answer: impl Into<String>,
    ) {
        self.value += delta;
        self.entries.push(ScoreEntry {
            increment: self.increments,
            score: delta,
            motivation: motivation.into(),
            answer: answer.into(),
        });
        self.increments += 1;
        tracing::trace!(delta, total = self.value, "score incremented");
    }

    /// The total as a percentage of the maximum score, rounded to two
    /// decimal places.
    ///
    /// A zero maximum is an explicit error rather than a silent infinity.
    pub fn percentage(&self) -> Result<f64, ScoreError> {
        if self.max == 0.0 {
            return Err(ScoreError::ZeroMaxScore);
        }
        Ok(round2(self.value / self.max * 100.0))
    }

    /// The average delta per increment, or `None` when nothing was
    /// incremented yet.
    pub fn average(&self) -> Option<f64> {
        if self.increments > 0 {
            Some(self.value / self.increments as f64)
        } else {
            None
        }
    }

    /// Restore the total to the minimum, clear the entry history, and zero
    /// the increment counter.
    pub fn reset(&mut self) {
        self.value = self.min;
        self.increments = 0;
        self.entries.clear();
    }

    /// The recorded entries, in insertion order.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// How many increments this score went over.
    pub fn increments(&self) -> usize {
        self.increments
    }

    /// The current total.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Overwrite the total directly, bypassing increment bookkeeping.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// The owning case's declared minimum.
    pub fn min_score(&self) -> f64 {
        self.min
    }

    /// The owning case's declared maximum.
    pub fn max_score(&self) -> f64 {
        self.max
    }
}

/// Round to two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_starts_at_the_minimum() {
        let score = Score::new(2.0, 10.0);
        assert_eq!(score.value(), 2.0);
        assert_eq!(score.increments(), 0);
        assert!(score.entries().is_empty());
        assert_eq!(score.min_score(), 2.0);
        assert_eq!(score.max_score(), 10.0);
    }

    #[test]
    fn increments_accumulate_from_the_minimum() {
        let mut score = Score::new(1.0, 10.0);
        score.increment(2.0);
        score.increment(3.0);
        assert_eq!(score.value(), 6.0);
        assert_eq!(score.increments(), 2);
    }

    #[test]
    fn increment_count_matches_entry_history() {
        let mut score = Score::new(0.0, 10.0);
        for delta in [1.0, 2.5, 0.5] {
            score.increment(delta);
        }
        assert_eq!(score.increments(), score.entries().len());
    }

    #[test]
    fn entries_record_index_motivation_and_answer() {
        let mut score = Score::new(0.0, 10.0);
        score.increment_with(2.0, "correct spelling", "colour");
        score.increment(1.0);

        assert_eq!(
            score.entries(),
            &[
                ScoreEntry {
                    increment: 0,
                    score: 2.0,
                    motivation: "correct spelling".into(),
                    answer: "colour".into(),
                },
                ScoreEntry {
                    increment: 1,
                    score: 1.0,
                    motivation: String::new(),
                    answer: String::new(),
                },
            ]
        );
    }

    #[test]
    fn percentage_of_three_out_of_four() {
        let mut score = Score::new(0.0, 4.0);
        score.increment(1.0);
        score.increment(1.0);
        score.increment(1.0);
        assert_eq!(score.percentage().unwrap(), 75.0);
    }

    #[test]
    fn percentage_of_22_out_of_200_is_11() {
        let mut score = Score::new(0.0, 200.0);
        score.increment(11.0);
        score.increment(11.0);
        assert_eq!(score.percentage().unwrap(), 11.0);
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        let mut score = Score::new(0.0, 3.0);
        score.increment(1.0);
        assert_eq!(score.percentage().unwrap(), 33.33);
    }

    #[test]
    fn percentage_is_zero_without_increments() {
        let score = Score::new(0.0, 4.0);
        assert_eq!(score.percentage().unwrap(), 0.0);
    }

    #[test]
    fn percentage_against_zero_max_is_an_error() {
        let mut score = Score::new(0.0, 0.0);
        score.increment(5.0);
        assert_eq!(score.percentage(), Err(ScoreError::ZeroMaxScore));
    }

    #[test]
    fn average_over_increments() {
        let mut score = Score::new(0.0, 10.0);
        score.increment(2.0);
        score.increment(2.0);
        score.increment(3.0);
        let avg = score.average().unwrap();
        assert!((avg - 2.3333333333333).abs() < 1e-9, "got {avg}");
    }

    #[test]
    fn average_of_equal_increments() {
        let mut score = Score::new(0.0, 10.0);
        for _ in 0..3 {
            score.increment(3.0);
        }
        assert_eq!(score.average(), Some(3.0));
    }

    #[test]
    fn average_without_increments_is_none() {
        let score = Score::new(0.0, 10.0);
        assert_eq!(score.average(), None);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut score = Score::new(1.0, 10.0);
        score.increment_with(4.0, "good answer", "42");
        score.increment(2.0);

        score.reset();

        assert_eq!(score.value(), 1.0);
        assert_eq!(score.increments(), 0);
        assert!(score.entries().is_empty());
    }

    #[test]
    fn set_value_bypasses_bookkeeping() {
        let mut score = Score::new(0.0, 10.0);
        score.set_value(7.5);
        assert_eq!(score.value(), 7.5);
        assert_eq!(score.increments(), 0);
        assert!(score.entries().is_empty());
    }

    #[test]
    fn entry_serde_roundtrip() {
        let entry = ScoreEntry {
            increment: 0,
            score: 2.0,
            motivation: "m".into(),
            answer: "a".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ScoreEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
