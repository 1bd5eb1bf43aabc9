//! Score analysis types for constraint diagnostics.

use hotelforge_core::{ConstraintKind, ConstraintMatch, HardSoftScore};
use serde::Serialize;

use crate::constraint::ActiveConstraint;

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintAnalysis {
    pub constraint_code: String,
    pub kind: ConstraintKind,
    /// Score per unit of magnitude.
    pub weight: HardSoftScore,
    /// Total score from this constraint.
    pub score: HardSoftScore,
    pub matches: Vec<ConstraintMatch>,
}

impl ConstraintAnalysis {
    pub(crate) fn new(constraint: &ActiveConstraint, matches: Vec<ConstraintMatch>) -> Self {
        Self {
            constraint_code: constraint.code().as_str().to_string(),
            kind: constraint.kind,
            weight: constraint.weight_score(),
            score: matches.iter().map(|m| m.score).sum(),
            matches,
        }
    }

    /// Returns the number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_hard(&self) -> bool {
        self.kind == ConstraintKind::Hard
    }
}

/// Complete score explanation with per-constraint breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreExplanation {
    pub score: HardSoftScore,
    pub constraint_analyses: Vec<ConstraintAnalysis>,
}

impl ScoreExplanation {
    pub fn new(score: HardSoftScore, constraint_analyses: Vec<ConstraintAnalysis>) -> Self {
        Self {
            score,
            constraint_analyses,
        }
    }

    /// Returns the total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count()).sum()
    }

    /// Returns constraints with non-zero scores.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != HardSoftScore::ZERO)
            .collect()
    }

    pub fn analysis(&self, code: &str) -> Option<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .find(|a| a.constraint_code == code)
    }
}
