//! Core constraint types.
//!
//! This module provides constraint classification and the explained
//! constraint match produced by every full scoring pass.

use serde::{Deserialize, Serialize};

use crate::score::{HardSoftScore, ScoreLevel};

/// Whether a constraint decides feasibility or expresses a preference.
///
/// # Example
///
/// ```
/// use hotelforge_core::{ConstraintKind, ScoreLevel};
///
/// assert_eq!(ConstraintKind::Hard.level(), ScoreLevel::Hard);
/// assert_eq!(ConstraintKind::Soft.level(), ScoreLevel::Soft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintKind {
    #[serde(alias = "HARD")]
    Hard,
    #[serde(alias = "SOFT")]
    Soft,
}

impl ConstraintKind {
    /// The score level this kind contributes to.
    pub const fn level(self) -> ScoreLevel {
        match self {
            ConstraintKind::Hard => ScoreLevel::Hard,
            ConstraintKind::Soft => ScoreLevel::Soft,
        }
    }
}

/// Type of impact a constraint match has on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactType {
    /// Subtracts from the score.
    Penalty,
    /// Adds to the score.
    Reward,
}

/// The booking and room ids involved in a constraint match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Justification {
    pub booking_ids: Vec<String>,
    pub room_ids: Vec<String>,
    pub description: String,
}

impl Justification {
    pub fn new(
        booking_ids: Vec<String>,
        room_ids: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            booking_ids,
            room_ids,
            description: description.into(),
        }
    }

    /// Returns true if the given booking is part of this justification.
    pub fn involves_booking(&self, booking_id: &str) -> bool {
        self.booking_ids.iter().any(|id| id == booking_id)
    }
}

/// One explained contribution of a constraint instance to the total score.
///
/// Produced fresh by every full scoring pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintMatch {
    pub constraint_code: String,
    pub kind: ConstraintKind,
    pub score: HardSoftScore,
    pub justification: Justification,
}

impl ConstraintMatch {
    pub fn new(
        constraint_code: impl Into<String>,
        kind: ConstraintKind,
        score: HardSoftScore,
        justification: Justification,
    ) -> Self {
        Self {
            constraint_code: constraint_code.into(),
            kind,
            score,
            justification,
        }
    }

    pub fn impact_type(&self) -> ImpactType {
        if self.score.is_negative() {
            ImpactType::Penalty
        } else {
            ImpactType::Reward
        }
    }

    /// Returns true for matches that count as constraint violations.
    pub fn is_violation(&self) -> bool {
        self.impact_type() == ImpactType::Penalty
    }
}
