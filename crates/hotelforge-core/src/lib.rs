//! HotelForge Core - Core types for hotel room allocation
//!
//! This crate provides the fundamental abstractions for HotelForge:
//! - The lexicographic hard/soft score type
//! - Domain types for rooms, guests and bookings
//! - Constraint identification and explained constraint matches
//! - The solver error taxonomy

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

pub use constraint::{ConstraintKind, ConstraintMatch, ImpactType, Justification};
pub use domain::{
    DateRange, Guest, GuestBooking, GuestPreferences, Room, RoomType, Solution, View,
};
pub use error::{Result, SolverError};
pub use score::{HardSoftScore, ScoreLevel, ScoreParseError};
