//! Allocation moves.

use std::fmt;

use hotelforge_core::HardSoftScore;
use hotelforge_scoring::director::Assignment;
use hotelforge_scoring::AllocationScoreDirector;
use smallvec::{smallvec, SmallVec};

/// A change to the working assignment.
///
/// Moves are plain values; they are checked against a director with
/// [`is_doable`](Self::is_doable) and then applied through it, so every
/// applied move is incrementally scored and undoable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationMove {
    /// Moves a booking into a room.
    Reassign { booking: usize, room: usize },

    /// Exchanges the rooms of two bookings. When only one of them has a
    /// room, the other takes it over and the first is left unassigned.
    Swap { left: usize, right: usize },
}

impl AllocationMove {
    /// True when applying the move keeps every room free of overlaps and
    /// every booking in a room of its requested type.
    pub fn is_doable(&self, director: &AllocationScoreDirector) -> bool {
        match *self {
            AllocationMove::Reassign { booking, room } => {
                director.bookings()[booking].assigned_room != Some(room)
                    && director.fits(booking, room, None)
            }
            AllocationMove::Swap { left, right } => {
                if left == right {
                    return false;
                }
                let bookings = director.bookings();
                match (bookings[left].assigned_room, bookings[right].assigned_room) {
                    (Some(a), Some(b)) => {
                        a != b
                            && director.fits(left, b, Some(right))
                            && director.fits(right, a, Some(left))
                    }
                    (Some(a), None) => director.fits(right, a, Some(left)),
                    (None, Some(b)) => director.fits(left, b, Some(right)),
                    (None, None) => false,
                }
            }
        }
    }

    /// The assignment changes this move makes on the director's current state.
    pub fn changes(&self, director: &AllocationScoreDirector) -> SmallVec<[Assignment; 2]> {
        match *self {
            AllocationMove::Reassign { booking, room } => smallvec![(booking, Some(room))],
            AllocationMove::Swap { left, right } => {
                let bookings = director.bookings();
                smallvec![
                    (left, bookings[right].assigned_room),
                    (right, bookings[left].assigned_room),
                ]
            }
        }
    }

    /// Applies the move through the director and returns the score delta.
    /// The move stays undoable until the director commits.
    pub fn do_move(&self, director: &mut AllocationScoreDirector) -> HardSoftScore {
        let changes = self.changes(director);
        director.do_move(&changes)
    }

    pub fn is_swap(&self) -> bool {
        matches!(self, AllocationMove::Swap { .. })
    }
}

impl fmt::Display for AllocationMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationMove::Reassign { booking, room } => {
                write!(f, "reassign({} -> {})", booking, room)
            }
            AllocationMove::Swap { left, right } => write!(f, "swap({} <-> {})", left, right),
        }
    }
}
