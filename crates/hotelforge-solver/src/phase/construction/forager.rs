//! Room choice for one booking.

use std::cmp::Ordering;

use hotelforge_core::HardSoftScore;
use hotelforge_scoring::AllocationScoreDirector;
use tracing::trace;

/// Picks the room giving the best resulting score.
///
/// Only rooms of the requested type that are free for the booking's dates
/// are tried. Equal scores go to the lowest room id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFitForager;

impl BestFitForager {
    pub fn new() -> Self {
        Self
    }

    /// The best room for `booking`, or `None` if no room fits.
    ///
    /// Leaves the director's assignment as it was.
    pub fn pick_room(&self, director: &mut AllocationScoreDirector, booking: usize) -> Option<usize> {
        let mut best: Option<(usize, HardSoftScore)> = None;
        for room in 0..director.room_count() {
            if !director.fits(booking, room, None) {
                continue;
            }
            director.do_move(&[(booking, Some(room))]);
            let score = director.score();
            director.undo_move();
            trace!(event = "placement_evaluated", booking = booking, room = room, score = %score);

            let better = match best {
                None => true,
                Some((best_room, best_score)) => match score.cmp(&best_score) {
                    Ordering::Greater => true,
                    Ordering::Equal => director.rooms()[room].id < director.rooms()[best_room].id,
                    Ordering::Less => false,
                },
            };
            if better {
                best = Some((room, score));
            }
        }
        best.map(|(room, _)| room)
    }
}
