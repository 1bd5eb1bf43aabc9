//! HardSoftScore - Two-level score with hard and soft constraints

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::{ScoreLevel, ScoreParseError};

/// A score with separate hard and soft constraint levels.
///
/// Hard constraints must be satisfied for an allocation to be feasible.
/// Soft constraints are preferences to optimize.
///
/// When comparing scores:
/// 1. Hard scores are compared first
/// 2. Soft scores are only compared when hard scores are equal
///
/// # Examples
///
/// ```
/// use hotelforge_core::HardSoftScore;
///
/// let score1 = HardSoftScore::of(-1, 300); // 1 hard constraint broken
/// let score2 = HardSoftScore::of(0, -200); // Feasible but poor soft score
///
/// // Feasible allocations are always better than infeasible ones
/// assert!(score2 > score1);
///
/// let score3 = HardSoftScore::of(0, 50);
/// assert!(score3 > score2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardSoftScore {
    #[serde(rename = "hardScore")]
    hard: i64,
    #[serde(rename = "softScore")]
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore { hard: 0, soft: 0 };

    /// One hard constraint unit.
    pub const ONE_HARD: HardSoftScore = HardSoftScore { hard: 1, soft: 0 };

    /// One soft constraint unit.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore { hard: 0, soft: 1 };

    /// Creates a new HardSoftScore.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore { hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore { hard, soft: 0 }
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore { hard: 0, soft }
    }

    /// Creates a score with `value` placed on the given level.
    #[inline]
    pub const fn of_level(level: ScoreLevel, value: i64) -> Self {
        match level {
            ScoreLevel::Hard => HardSoftScore::of_hard(value),
            ScoreLevel::Soft => HardSoftScore::of_soft(value),
        }
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns true when no hard constraint is violated.
    ///
    /// Hard weights are always negative, so feasibility means a hard score
    /// of exactly zero.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard == 0
    }

    /// Returns true if the score carries a negative contribution on any level.
    pub const fn is_negative(&self) -> bool {
        self.hard < 0 || (self.hard == 0 && self.soft < 0)
    }

    /// Returns true if this score is better than the other score.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score is worse than the other score.
    pub fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Multiplies both levels by an integer factor.
    #[inline]
    pub const fn multiply(&self, factor: i64) -> Self {
        HardSoftScore::of(self.hard * factor, self.soft * factor)
    }

    /// Parses the `"-1hard/20soft"` representation.
    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let (hard_part, soft_part) = s.split_once('/').ok_or_else(|| ScoreParseError {
            message: format!(
                "Invalid HardSoftScore format '{}': expected 2 parts separated by '/'",
                s
            ),
        })?;
        let hard = parse_level(hard_part, "hard")?;
        let soft = parse_level(soft_part, "soft")?;
        Ok(HardSoftScore::of(hard, soft))
    }
}

fn parse_level(part: &str, suffix: &str) -> Result<i64, ScoreParseError> {
    let part = part.trim();
    let num_str = part.strip_suffix(suffix).ok_or_else(|| ScoreParseError {
        message: format!("{} part '{}' must end with '{}'", suffix, part, suffix),
    })?;
    num_str.parse::<i64>().map_err(|e| ScoreParseError {
        message: format!("Invalid {} score '{}': {}", suffix, num_str, e),
    })
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for HardSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HardSoftScore::of(self.hard + other.hard, self.soft + other.soft)
    }
}

impl AddAssign for HardSoftScore {
    fn add_assign(&mut self, other: Self) {
        self.hard += other.hard;
        self.soft += other.soft;
    }
}

impl Sub for HardSoftScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        HardSoftScore::of(self.hard - other.hard, self.soft - other.soft)
    }
}

impl SubAssign for HardSoftScore {
    fn sub_assign(&mut self, other: Self) {
        self.hard -= other.hard;
        self.soft -= other.soft;
    }
}

impl Neg for HardSoftScore {
    type Output = Self;

    fn neg(self) -> Self {
        HardSoftScore::of(-self.hard, -self.soft)
    }
}

impl Sum for HardSoftScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(HardSoftScore::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a HardSoftScore> for HardSoftScore {
    fn sum<I: Iterator<Item = &'a HardSoftScore>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}
