//! Random move sampling.

use hotelforge_scoring::AllocationScoreDirector;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use super::AllocationMove;

/// Sampling attempts per requested move before giving up on a step.
const ATTEMPTS_PER_MOVE: usize = 4;

/// Samples doable moves from a seeded generator.
///
/// Reassign targets are drawn only from rooms of the booking's requested
/// type; the date check happens in [`AllocationMove::is_doable`].
#[derive(Debug, Clone)]
pub struct MoveSelector {
    swap_probability: f64,
    // Rooms whose type each booking accepts, ascending.
    type_candidates: Vec<SmallVec<[usize; 8]>>,
}

impl MoveSelector {
    pub fn new(director: &AllocationScoreDirector, swap_probability: f64) -> Self {
        let rooms = director.rooms();
        let type_candidates = director
            .bookings()
            .iter()
            .map(|booking| {
                rooms
                    .iter()
                    .enumerate()
                    .filter(|(_, room)| booking.accepts_room_type(room))
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect();
        // NaN would make `random_bool` panic.
        let swap_probability = if swap_probability.is_nan() {
            0.0
        } else {
            swap_probability.clamp(0.0, 1.0)
        };
        Self {
            swap_probability,
            type_candidates,
        }
    }

    /// Rooms booking `booking` may be placed in by type.
    pub fn candidates(&self, booking: usize) -> &[usize] {
        self.type_candidates
            .get(booking)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    /// Draws up to `count` doable moves. Fewer are returned when the
    /// neighbourhood is (nearly) empty.
    pub fn sample(
        &self,
        director: &AllocationScoreDirector,
        rng: &mut ChaCha8Rng,
        count: usize,
    ) -> Vec<AllocationMove> {
        let booking_count = director.booking_count();
        let mut moves = Vec::with_capacity(count);
        if booking_count == 0 {
            return moves;
        }

        for _ in 0..count.saturating_mul(ATTEMPTS_PER_MOVE) {
            if moves.len() >= count {
                break;
            }
            let candidate = if booking_count > 1 && rng.random_bool(self.swap_probability) {
                let left = rng.random_range(0..booking_count);
                let mut right = rng.random_range(0..booking_count - 1);
                if right >= left {
                    right += 1;
                }
                AllocationMove::Swap { left, right }
            } else {
                let booking = rng.random_range(0..booking_count);
                let rooms = self.candidates(booking);
                if rooms.is_empty() {
                    continue;
                }
                let room = rooms[rng.random_range(0..rooms.len())];
                AllocationMove::Reassign { booking, room }
            };
            if candidate.is_doable(director) {
                moves.push(candidate);
            }
        }
        moves
    }
}
