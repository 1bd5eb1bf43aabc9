//! Construction heuristic phase implementation.

use tracing::{debug, info};

use super::{BestFitForager, QueuedBookingPlacer};
use crate::phase::Phase;
use crate::scope::SolverScope;

/// Builds the initial assignment from scratch.
///
/// Every unassigned booking is placed once, in placer order, into the room
/// the forager picks. A booking with no fitting room stays unassigned and
/// is left to the unallocated penalty. The phase always runs to completion.
#[derive(Debug, Clone, Default)]
pub struct ConstructionHeuristicPhase {
    placer: QueuedBookingPlacer,
    forager: BestFitForager,
}

impl ConstructionHeuristicPhase {
    pub fn new(placer: QueuedBookingPlacer, forager: BestFitForager) -> Self {
        Self { placer, forager }
    }
}

impl Phase for ConstructionHeuristicPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope) {
        solver_scope.start_solving();
        let placements = self.placer.placements(solver_scope.director());
        info!(
            event = "phase_start",
            phase = self.phase_type_name(),
            placements = placements.len()
        );

        let mut unplaced = 0usize;
        for booking in placements {
            let director = solver_scope.director_mut();
            match self.forager.pick_room(director, booking) {
                Some(room) => {
                    director.assign(booking, Some(room));
                    debug!(
                        event = "booking_placed",
                        booking_id = %director.bookings()[booking].id,
                        room_id = %director.rooms()[room].id,
                        score = %director.score()
                    );
                }
                None => {
                    unplaced += 1;
                    debug!(
                        event = "booking_unplaced",
                        booking_id = %director.bookings()[booking].id
                    );
                }
            }
            solver_scope.increment_step_count();
        }

        solver_scope.set_best_to_working();
        info!(
            event = "phase_end",
            phase = self.phase_type_name(),
            steps = solver_scope.total_step_count(),
            unplaced = unplaced,
            score = %solver_scope.score()
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstructionHeuristic"
    }
}
