//! Solver-level scope.

use std::time::{Duration, Instant};

use hotelforge_core::HardSoftScore;
use hotelforge_scoring::AllocationScoreDirector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::mpsc;
use tracing::debug;

use crate::stats::SolverStats;

/// A new best assignment found by one worker.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSolutionUpdate {
    pub worker_index: usize,
    pub step: u64,
    pub score: HardSoftScore,
    /// Room index per booking, in request order.
    pub assignment: Vec<Option<usize>>,
}

/// Working state of one search worker.
///
/// Owns the score director with its private assignment, the seeded random
/// generator and the best assignment seen so far.
pub struct SolverScope {
    director: AllocationScoreDirector,
    best_assignment: Vec<Option<usize>>,
    best_score: HardSoftScore,
    rng: ChaCha8Rng,
    start_time: Option<Instant>,
    total_step_count: u64,
    last_improvement_step: u64,
    stats: SolverStats,
    worker_index: usize,
    sender: Option<mpsc::UnboundedSender<BestSolutionUpdate>>,
}

impl SolverScope {
    /// Creates a scope whose best solution is the director's current state.
    pub fn with_seed(director: AllocationScoreDirector, seed: u64) -> Self {
        let best_assignment = director.assignment();
        let best_score = director.score();
        Self {
            director,
            best_assignment,
            best_score,
            rng: ChaCha8Rng::seed_from_u64(seed),
            start_time: None,
            total_step_count: 0,
            last_improvement_step: 0,
            stats: SolverStats::default(),
            worker_index: 0,
            sender: None,
        }
    }

    pub fn with_worker_index(mut self, worker_index: usize) -> Self {
        self.worker_index = worker_index;
        self
    }

    /// Streams every new best assignment through `sender`.
    pub fn with_sender(mut self, sender: mpsc::UnboundedSender<BestSolutionUpdate>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Starts the clock unless it is already running.
    pub fn start_solving(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
            self.stats.start();
        }
    }

    /// Continues the clock of an earlier scope, so deadlines are shared.
    pub fn start_solving_at(&mut self, start: Instant) {
        self.start_time = Some(start);
        self.stats.start_at(start);
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn director(&self) -> &AllocationScoreDirector {
        &self.director
    }

    pub fn director_mut(&mut self) -> &mut AllocationScoreDirector {
        &mut self.director
    }

    /// Director and random generator, borrowed together for move sampling.
    pub fn director_and_rng(&mut self) -> (&AllocationScoreDirector, &mut ChaCha8Rng) {
        (&self.director, &mut self.rng)
    }

    pub fn score(&self) -> HardSoftScore {
        self.director.score()
    }

    pub fn best_score(&self) -> HardSoftScore {
        self.best_score
    }

    pub fn best_assignment(&self) -> &[Option<usize>] {
        &self.best_assignment
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn worker_index(&self) -> usize {
        self.worker_index
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    /// Records the working solution as the best one if it is strictly better.
    pub fn update_best_solution(&mut self) -> bool {
        let current = self.director.score();
        if current <= self.best_score {
            return false;
        }
        self.best_score = current;
        self.best_assignment = self.director.assignment();
        self.last_improvement_step = self.total_step_count;

        debug!(
            event = "best_improved",
            worker = self.worker_index,
            step = self.total_step_count,
            score = %current
        );
        if let Some(sender) = &self.sender {
            // A dropped receiver only means nobody is listening any more.
            let _ = sender.send(BestSolutionUpdate {
                worker_index: self.worker_index,
                step: self.total_step_count,
                score: current,
                assignment: self.best_assignment.clone(),
            });
        }
        true
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.stats.record_step();
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    /// Steps taken since the best score last improved.
    pub fn unimproved_step_count(&self) -> u64 {
        self.total_step_count - self.last_improvement_step
    }

    /// Makes the working solution the best one, even if it scores lower.
    ///
    /// Used after construction, whose output is the starting point whatever
    /// its score.
    pub fn set_best_to_working(&mut self) {
        self.best_score = self.director.score();
        self.best_assignment = self.director.assignment();
        self.last_improvement_step = self.total_step_count;
    }

    /// Consumes the scope, returning its director reset to the best assignment.
    pub fn into_best(self) -> (AllocationScoreDirector, SolverStats) {
        let mut director = self.director;
        if director.assignment() != self.best_assignment {
            director.reset_assignment(&self.best_assignment);
        }
        (director, self.stats)
    }
}

impl std::fmt::Debug for SolverScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverScope")
            .field("worker_index", &self.worker_index)
            .field("score", &self.director.score())
            .field("best_score", &self.best_score)
            .field("total_step_count", &self.total_step_count)
            .finish()
    }
}
