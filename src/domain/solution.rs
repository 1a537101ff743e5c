use serde::{Deserialize, Serialize};

use crate::domain::conflict::Conflict;
use crate::domain::period::Period;

/// One candidate weekly timetable: an unordered multiset of periods plus the
/// fitness/conflicts produced by the last evaluation.
///
/// Invariant once evaluated: `conflicts` is exactly what the current
/// evaluator would report for `periods`, and `fitness_score` is the score
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub periods: Vec<Period>,
    #[serde(default)]
    pub fitness_score: f64,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
}

impl Solution {
    pub fn new(periods: Vec<Period>) -> Self {
        Solution {
            periods,
            fitness_score: 0.0,
            conflicts: Vec::new(),
        }
    }

    pub fn critical_conflicts(&self) -> usize {
        self.conflicts.iter().filter(|c| c.is_critical()).count()
    }
}
