//! Local search phase implementation.

use std::fmt::Debug;

use tracing::{info, trace};

use super::{Acceptor, AcceptedCountForager};
use crate::heuristic::MoveSelector;
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::termination::Termination;

/// Local search phase that improves an existing assignment.
///
/// Each step:
/// 1. Samples up to `move_sample_size` doable moves
/// 2. Scores each one incrementally, then undoes it
/// 3. Lets the acceptor filter them and the forager keep the best
/// 4. Applies the picked move for real
///
/// The best assignment is tracked by the solver scope, so plateau and late
/// acceptance steps never lose it.
pub struct LocalSearchPhase<A, T>
where
    A: Acceptor,
    T: Termination,
{
    move_selector: MoveSelector,
    acceptor: A,
    forager: AcceptedCountForager,
    termination: T,
    move_sample_size: usize,
}

impl<A, T> LocalSearchPhase<A, T>
where
    A: Acceptor,
    T: Termination,
{
    pub fn new(
        move_selector: MoveSelector,
        acceptor: A,
        termination: T,
        move_sample_size: usize,
    ) -> Self {
        let move_sample_size = move_sample_size.max(1);
        Self {
            move_selector,
            acceptor,
            forager: AcceptedCountForager::new(move_sample_size),
            termination,
            move_sample_size,
        }
    }
}

impl<A, T> Debug for LocalSearchPhase<A, T>
where
    A: Acceptor,
    T: Termination,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .field("termination", &self.termination)
            .field("move_sample_size", &self.move_sample_size)
            .finish()
    }
}

impl<A, T> Phase for LocalSearchPhase<A, T>
where
    A: Acceptor,
    T: Termination,
{
    fn solve(&mut self, solver_scope: &mut SolverScope) {
        solver_scope.start_solving();
        let starting_score = solver_scope.score();
        let mut last_step_score = starting_score;
        self.acceptor.phase_started(&last_step_score);
        info!(
            event = "phase_start",
            phase = self.phase_type_name(),
            worker = solver_scope.worker_index(),
            score = %starting_score
        );

        while !self.termination.is_terminated(solver_scope) {
            self.forager.step_started();

            let moves = {
                let (director, rng) = solver_scope.director_and_rng();
                self.move_selector.sample(director, rng, self.move_sample_size)
            };

            for (i, m) in moves.iter().enumerate() {
                let director = solver_scope.director_mut();
                m.do_move(director);
                let move_score = director.score();
                director.undo_move();

                let accepted = self.acceptor.is_accepted(&last_step_score, &move_score);
                solver_scope.stats_mut().record_move(accepted);
                trace!(event = "move_evaluated", candidate = %m, score = %move_score, accepted = accepted);

                if accepted {
                    self.forager.add_move_index(i, move_score);
                    if self.forager.is_quit_early() {
                        break;
                    }
                }
            }

            if let Some((selected, selected_score)) = self.forager.pick_move_index() {
                let director = solver_scope.director_mut();
                moves[selected].do_move(director);
                director.commit();
                last_step_score = selected_score;
                self.acceptor.step_ended(&selected_score);
            }

            solver_scope.increment_step_count();
            solver_scope.update_best_solution();
        }

        self.acceptor.phase_ended();
        let stats = solver_scope.stats();
        info!(
            event = "phase_end",
            phase = self.phase_type_name(),
            worker = solver_scope.worker_index(),
            steps = solver_scope.total_step_count(),
            moves_evaluated = stats.moves_evaluated,
            moves_accepted = stats.moves_accepted,
            moves_per_second = stats.moves_per_second(),
            acceptance_rate = stats.acceptance_rate(),
            best_score = %solver_scope.best_score()
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
