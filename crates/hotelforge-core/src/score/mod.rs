//! Score types for representing allocation quality
//!
//! Scores are used to compare allocations and guide the search.
//! Scores are immutable values and implement arithmetic operations.

mod hard_soft;

#[cfg(test)]
mod tests;

pub use hard_soft::HardSoftScore;

/// Score level representing different constraint priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLevel {
    /// Hard constraints - must be satisfied for feasibility
    Hard,
    /// Soft constraints - optimization objectives
    Soft,
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}
