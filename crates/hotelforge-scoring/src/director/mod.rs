//! Incremental score director for room allocation.
//!
//! The director owns the working bookings, a per-room occupancy index and
//! the running score. A move is applied by retracting the contributions of
//! the touched bookings (and of everyone staying in the rooms they leave or
//! enter), changing the assignment, and inserting the contributions again.
//! Each move leaves an undo entry so it can be reverted without rescoring.

mod index;

#[cfg(test)]
mod tests;

use hotelforge_core::{GuestBooking, HardSoftScore, Room};
use smallvec::SmallVec;
use tracing::trace;

use crate::calculator::ScoreCalculator;

pub use index::RoomIndex;

/// One planning variable change: booking index and its new room.
pub type Assignment = (usize, Option<usize>);

#[derive(Debug)]
struct UndoEntry {
    previous: SmallVec<[Assignment; 2]>,
    delta: HardSoftScore,
}

/// Working allocation with incremental scoring.
pub struct AllocationScoreDirector {
    calculator: ScoreCalculator,
    bookings: Vec<GuestBooking>,
    index: RoomIndex,
    score: HardSoftScore,
    undo_stack: Vec<UndoEntry>,
}

impl AllocationScoreDirector {
    /// Creates a director and fully scores the initial assignment.
    pub fn new(calculator: ScoreCalculator, bookings: Vec<GuestBooking>) -> Self {
        let index = RoomIndex::build(calculator.room_count(), &bookings);
        let score = calculator.score_indexed(&bookings, &index);
        Self {
            calculator,
            bookings,
            index,
            score,
            undo_stack: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn score(&self) -> HardSoftScore {
        self.score
    }

    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    pub fn bookings(&self) -> &[GuestBooking] {
        &self.bookings
    }

    pub fn rooms(&self) -> &[Room] {
        self.calculator.rooms()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    pub fn room_count(&self) -> usize {
        self.calculator.room_count()
    }

    pub fn index(&self) -> &RoomIndex {
        &self.index
    }

    /// Current room of every booking.
    pub fn assignment(&self) -> Vec<Option<usize>> {
        self.bookings.iter().map(|b| b.assigned_room).collect()
    }

    pub fn into_bookings(self) -> Vec<GuestBooking> {
        self.bookings
    }

    /// True when `room` has no occupant overlapping `booking`'s stay, other
    /// than the booking itself and `ignore`.
    pub fn is_room_free(&self, room: usize, booking: usize, ignore: Option<usize>) -> bool {
        self.index.is_free_for(room, &self.bookings, booking, ignore)
    }

    /// True when `booking` may stay in `room`: the room has the requested type
    /// (if any) and is free for the booking's dates.
    pub fn fits(&self, booking: usize, room: usize, ignore: Option<usize>) -> bool {
        match self.calculator.rooms().get(room) {
            Some(r) => {
                self.bookings[booking].accepts_room_type(r)
                    && self.is_room_free(room, booking, ignore)
            }
            None => false,
        }
    }

    /// Applies the changes and returns the score delta.
    ///
    /// The move stays revertible through [`undo_move`](Self::undo_move)
    /// until [`commit`](Self::commit) is called.
    pub fn do_move(&mut self, changes: &[Assignment]) -> HardSoftScore {
        let mut changed: SmallVec<[usize; 4]> = changes.iter().map(|&(b, _)| b).collect();
        changed.sort_unstable();
        changed.dedup();

        let room_count = self.room_count();
        let mut rooms: SmallVec<[usize; 4]> = SmallVec::new();
        for &(b, new_room) in changes {
            rooms.extend(self.bookings[b].assigned_room);
            rooms.extend(new_room);
        }
        rooms.retain(|r| *r < room_count);
        rooms.sort_unstable();
        rooms.dedup();

        let before = self
            .calculator
            .partial_score(&self.bookings, &self.index, &changed, &rooms);

        let previous: SmallVec<[Assignment; 2]> = changes
            .iter()
            .map(|&(b, _)| (b, self.bookings[b].assigned_room))
            .collect();
        for &(b, new_room) in changes {
            self.set_room(b, new_room);
        }

        let after = self
            .calculator
            .partial_score(&self.bookings, &self.index, &changed, &rooms);

        let delta = after - before;
        self.score += delta;
        self.undo_stack.push(UndoEntry { previous, delta });
        trace!(
            event = "move_applied",
            changes = changes.len(),
            delta = %delta,
            score = %self.score
        );
        delta
    }

    /// Reverts the most recent uncommitted move. Returns false if there is none.
    pub fn undo_move(&mut self) -> bool {
        let Some(entry) = self.undo_stack.pop() else {
            return false;
        };
        for &(b, old_room) in entry.previous.iter().rev() {
            self.set_room(b, old_room);
        }
        self.score -= entry.delta;
        true
    }

    /// Makes all applied moves permanent.
    pub fn commit(&mut self) {
        self.undo_stack.clear();
    }

    /// Assigns one booking and commits.
    pub fn assign(&mut self, booking: usize, room: Option<usize>) -> HardSoftScore {
        let delta = self.do_move(&[(booking, room)]);
        self.commit();
        delta
    }

    /// Replaces the whole assignment and rescores from scratch.
    pub fn reset_assignment(&mut self, assignment: &[Option<usize>]) {
        for (booking, room) in self.bookings.iter_mut().zip(assignment) {
            booking.assigned_room = *room;
        }
        self.index = RoomIndex::build(self.room_count(), &self.bookings);
        self.score = self.calculator.score_indexed(&self.bookings, &self.index);
        self.undo_stack.clear();
    }

    /// Full rescore of the working bookings, for verification.
    pub fn calculate_full_score(&self) -> HardSoftScore {
        self.calculator.score(&self.bookings)
    }

    fn set_room(&mut self, booking: usize, room: Option<usize>) {
        let old = self.bookings[booking].assigned_room;
        if old == room {
            return;
        }
        if let Some(old) = old {
            self.index.remove(old, booking);
        }
        self.bookings[booking].assigned_room = room;
        if let Some(new) = room {
            self.index.insert(new, booking);
        }
    }
}
