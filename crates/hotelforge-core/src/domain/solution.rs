use std::time::Duration;

use crate::constraint::ConstraintMatch;
use crate::score::HardSoftScore;

use super::{GuestBooking, Room};

/// The outcome of one solve call.
///
/// Produced once per call; ownership passes entirely to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub tenant_id: String,
    pub rooms: Vec<Room>,
    pub bookings: Vec<GuestBooking>,
    pub score: HardSoftScore,
    pub constraint_matches: Vec<ConstraintMatch>,
    pub solve_time: Duration,
}

impl Solution {
    /// An unscored solution wrapping the given planning state.
    pub fn new(tenant_id: impl Into<String>, rooms: Vec<Room>, bookings: Vec<GuestBooking>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            rooms,
            bookings,
            score: HardSoftScore::ZERO,
            constraint_matches: Vec::new(),
            solve_time: Duration::ZERO,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }

    /// The room assigned to the booking at `booking_idx`, if any.
    pub fn assigned_room(&self, booking_idx: usize) -> Option<&Room> {
        self.bookings
            .get(booking_idx)
            .and_then(|b| b.assigned_room)
            .and_then(|room_idx| self.rooms.get(room_idx))
    }

    /// The room assigned to the booking with the given id, if any.
    pub fn assigned_room_of(&self, booking_id: &str) -> Option<&Room> {
        let idx = self.bookings.iter().position(|b| b.id == booking_id)?;
        self.assigned_room(idx)
    }

    pub fn unassigned_bookings(&self) -> impl Iterator<Item = &GuestBooking> {
        self.bookings.iter().filter(|b| !b.is_assigned())
    }

    /// Matches with a negative contribution.
    pub fn constraint_violations(&self) -> impl Iterator<Item = &ConstraintMatch> {
        self.constraint_matches.iter().filter(|m| m.is_violation())
    }

    /// Sum of all constraint match scores. Equals `score` for a consistent solution.
    pub fn matches_total(&self) -> HardSoftScore {
        self.constraint_matches.iter().map(|m| m.score).sum()
    }

    /// Pairs of booking indices sharing a room with overlapping dates.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.bookings.iter().enumerate() {
            let Some(room) = a.assigned_room else {
                continue;
            };
            for (j, b) in self.bookings.iter().enumerate().skip(i + 1) {
                if b.assigned_room == Some(room) && a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Current assignment as room indices, one per booking.
    pub fn assignment(&self) -> Vec<Option<usize>> {
        self.bookings.iter().map(|b| b.assigned_room).collect()
    }

    pub fn solve_time_ms(&self) -> u64 {
        u64::try_from(self.solve_time.as_millis()).unwrap_or(u64::MAX)
    }
}
