//! Solve orchestration.
//!
//! Logging levels:
//! - **INFO**: solve start/end, state transitions, phase summaries
//! - **DEBUG**: placements, best-score improvements, catalog resolution
//! - **TRACE**: move evaluation details

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hotelforge_config::SolverConfig;
use hotelforge_core::{GuestBooking, HardSoftScore, Room, Solution, SolverError};
use hotelforge_scoring::{
    ActiveConstraint, AllocationScoreDirector, CatalogResolver, ConstraintSource,
    ScoreCalculator,
};
use rayon::prelude::*;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::builder::{AcceptorBuilder, TerminationBuilder};
use crate::heuristic::MoveSelector;
use crate::phase::{ConstructionHeuristicPhase, LocalSearchPhase, Phase};
use crate::scope::{BestSolutionUpdate, SolverScope};
use crate::stats::SolverStats;
use crate::status::{SolverStatus, StatusTracker};
use crate::termination::ExternalTermination;

/// Time limit used when neither the problem nor the config sets one.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;

// Error code reported for an invalid solver configuration.
const SOLVER_CONFIG_CODE: &str = "solver_config";

/// Input of one solve call.
#[derive(Debug, Clone)]
pub struct AllocationProblem {
    pub tenant_id: String,
    pub rooms: Vec<Room>,
    pub bookings: Vec<GuestBooking>,
    /// Overrides the configured time limit when set.
    pub time_limit: Option<Duration>,
    /// Cooperative cancellation: once set, search stops and the best
    /// solution so far is returned.
    pub terminate_flag: Option<Arc<AtomicBool>>,
}

impl AllocationProblem {
    pub fn new(tenant_id: impl Into<String>, rooms: Vec<Room>, bookings: Vec<GuestBooking>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            rooms,
            bookings,
            time_limit: None,
            terminate_flag: None,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_flag = Some(flag);
        self
    }

    /// Checks the request-level requirements before any solving work.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.tenant_id.trim().is_empty() {
            return Err(SolverError::validation("tenantId must not be empty"));
        }
        if self.rooms.is_empty() {
            return Err(SolverError::validation("rooms must not be empty"));
        }
        if self.bookings.is_empty() {
            return Err(SolverError::validation("bookings must not be empty"));
        }
        let mut room_ids = HashSet::with_capacity(self.rooms.len());
        for room in &self.rooms {
            if room.id.is_empty() {
                return Err(SolverError::validation("room id must not be empty"));
            }
            if !room_ids.insert(room.id.as_str()) {
                return Err(SolverError::validation(format!("duplicate room id '{}'", room.id)));
            }
        }
        let mut booking_ids = HashSet::with_capacity(self.bookings.len());
        for booking in &self.bookings {
            if !booking_ids.insert(booking.id.as_str()) {
                return Err(SolverError::validation(format!(
                    "duplicate booking id '{}'",
                    booking.id
                )));
            }
        }
        Ok(())
    }
}

/// Counters and lifecycle of a finished solve call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveStatistics {
    pub status: SolverStatus,
    pub status_history: Vec<SolverStatus>,
    pub constraint_count: usize,
    pub construction_score: HardSoftScore,
    pub best_score: HardSoftScore,
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
    pub worker_count: usize,
    /// Worker whose result was kept; `None` when search was skipped.
    pub best_worker: Option<usize>,
    pub construction_time_ms: u64,
    pub solve_time_ms: u64,
}

/// Result of a solve call.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub solution: Solution,
    pub statistics: SolveStatistics,
}

/// Entry point: resolves constraints, constructs, improves, and packages
/// the explained solution.
///
/// The solver itself holds no per-call state; concurrent calls on the same
/// solver share only the (optional) catalog cache.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use hotelforge_config::SolverConfig;
/// use hotelforge_scoring::InMemoryConstraintSource;
/// use hotelforge_solver::{AllocationProblem, Solver};
/// use hotelforge_test::{booking, standard_room};
///
/// let solver = Solver::new(Arc::new(InMemoryConstraintSource::builtin()))
///     .with_config(SolverConfig::default().with_unimproved_step_count_limit(50));
/// let problem = AllocationProblem::new(
///     "hotel-1",
///     vec![standard_room("room-101", 1)],
///     vec![booking("B1", 1, 3)],
/// )
/// .with_time_limit(Duration::from_secs(5));
///
/// let result = solver.solve(problem).unwrap();
/// assert!(result.solution.is_feasible());
/// ```
pub struct Solver {
    config: SolverConfig,
    resolver: CatalogResolver,
}

impl Solver {
    pub fn new(source: Arc<dyn ConstraintSource>) -> Self {
        Self::with_resolver(CatalogResolver::new(source), SolverConfig::default())
    }

    /// Replaces the configuration, enabling the catalog cache if requested.
    pub fn with_config(self, config: SolverConfig) -> Self {
        let resolver = CatalogResolver::new(Arc::clone(self.resolver.source()));
        Self::with_resolver(resolver, config)
    }

    fn with_resolver(resolver: CatalogResolver, config: SolverConfig) -> Self {
        let resolver = if config.catalog.cache_enabled {
            resolver.with_cache()
        } else {
            resolver
        };
        Self { config, resolver }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn resolver(&self) -> &CatalogResolver {
        &self.resolver
    }

    /// Solves one problem.
    ///
    /// # Errors
    ///
    /// - [`SolverError::Validation`] for empty tenant/rooms/bookings or
    ///   duplicate ids
    /// - [`SolverError::Configuration`] when the tenant's constraint catalog
    ///   does not resolve or the solver config is invalid
    /// - [`SolverError::Internal`] when search panics or the result fails its
    ///   consistency checks
    pub fn solve(&self, problem: AllocationProblem) -> Result<SolveResult, SolverError> {
        self.solve_inner(problem, None)
    }

    /// Solves one problem, streaming every new best assignment through
    /// `sender` as it is found.
    pub fn solve_with_channel(
        &self,
        problem: AllocationProblem,
        sender: mpsc::UnboundedSender<BestSolutionUpdate>,
    ) -> Result<SolveResult, SolverError> {
        self.solve_inner(problem, Some(sender))
    }

    fn solve_inner(
        &self,
        problem: AllocationProblem,
        sender: Option<mpsc::UnboundedSender<BestSolutionUpdate>>,
    ) -> Result<SolveResult, SolverError> {
        let start = Instant::now();
        let mut tracker = StatusTracker::new(&problem.tenant_id);
        let time_limit = problem
            .time_limit
            .or_else(|| self.config.time_limit())
            .unwrap_or(Duration::from_secs(DEFAULT_TIME_LIMIT_SECS));

        info!(
            event = "solve_start",
            tenant_id = %problem.tenant_id,
            room_count = problem.rooms.len(),
            booking_count = problem.bookings.len(),
            time_limit_ms = u64::try_from(time_limit.as_millis()).unwrap_or(u64::MAX),
            seed = self.config.seed()
        );

        let constraints = self.load_constraints(&problem, &mut tracker)?;
        let constraint_count = constraints.len();

        let AllocationProblem {
            tenant_id,
            rooms,
            mut bookings,
            terminate_flag,
            ..
        } = problem;
        for booking in &mut bookings {
            booking.assigned_room = None;
        }

        tracker.transition(SolverStatus::Constructing);
        let calculator = ScoreCalculator::new(constraints, rooms.clone());
        let run = SearchRun {
            config: &self.config,
            calculator: &calculator,
            start,
            time_limit,
            terminate_flag,
            sender,
        };
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| run.execute(bookings, &mut tracker)))
            .map_err(|payload| {
                SolverError::internal(format!("search panicked: {}", panic_message(&*payload)))
            })
            .and_then(|outcome| outcome);
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => return Err(fail(&mut tracker, err)),
        };

        let solution = match package(&tenant_id, rooms, &calculator, outcome.director, start) {
            Ok(solution) => solution,
            Err(err) => return Err(fail(&mut tracker, err)),
        };
        if solution.score.hard() < outcome.construction_score.hard() {
            let err = SolverError::internal(format!(
                "search regressed hard score from {} to {}",
                outcome.construction_score, solution.score
            ));
            return Err(fail(&mut tracker, err));
        }
        tracker.transition(SolverStatus::Done);

        let statistics = SolveStatistics {
            status: tracker.status(),
            status_history: tracker.history().to_vec(),
            constraint_count,
            construction_score: outcome.construction_score,
            best_score: solution.score,
            step_count: outcome.stats.step_count,
            moves_evaluated: outcome.stats.moves_evaluated,
            moves_accepted: outcome.stats.moves_accepted,
            worker_count: outcome.worker_count,
            best_worker: outcome.best_worker,
            construction_time_ms: millis(outcome.construction_time),
            solve_time_ms: solution.solve_time_ms(),
        };
        info!(
            event = "solve_end",
            tenant_id = %tenant_id,
            score = %solution.score,
            feasible = solution.is_feasible(),
            unassigned = solution.unassigned_bookings().count(),
            steps = statistics.step_count,
            moves_evaluated = statistics.moves_evaluated,
            solve_time_ms = statistics.solve_time_ms
        );
        Ok(SolveResult {
            solution,
            statistics,
        })
    }
}

impl Solver {
    // INIT and LOADING_CONSTRAINTS: everything that can reject a call before
    // construction starts.
    fn load_constraints(
        &self,
        problem: &AllocationProblem,
        tracker: &mut StatusTracker,
    ) -> Result<Arc<[ActiveConstraint]>, SolverError> {
        if let Err(err) = problem.validate() {
            return Err(fail(tracker, err));
        }

        tracker.transition(SolverStatus::LoadingConstraints);
        if let Err(err) = self.config.validate() {
            let err = SolverError::configuration(SOLVER_CONFIG_CODE, err.to_string());
            return Err(fail(tracker, err));
        }
        self.resolver
            .resolve(&problem.tenant_id)
            .map_err(|err| fail(tracker, err))
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .finish()
    }
}

struct SearchOutcome {
    director: AllocationScoreDirector,
    construction_score: HardSoftScore,
    construction_time: Duration,
    stats: SolverStats,
    worker_count: usize,
    best_worker: Option<usize>,
}

// Everything the phases of one call share. Read-only across workers.
struct SearchRun<'a> {
    config: &'a SolverConfig,
    calculator: &'a ScoreCalculator,
    start: Instant,
    time_limit: Duration,
    terminate_flag: Option<Arc<AtomicBool>>,
    sender: Option<mpsc::UnboundedSender<BestSolutionUpdate>>,
}

impl SearchRun<'_> {
    fn execute(
        &self,
        bookings: Vec<GuestBooking>,
        tracker: &mut StatusTracker,
    ) -> Result<SearchOutcome, SolverError> {
        let director = AllocationScoreDirector::new(self.calculator.clone(), bookings);
        let mut scope = SolverScope::with_seed(director, self.config.seed());
        scope.start_solving_at(self.start);
        ConstructionHeuristicPhase::default().solve(&mut scope);
        let construction_score = scope.score();
        let construction_time = self.start.elapsed();
        let (constructed, mut stats) = scope.into_best();

        tracker.transition(SolverStatus::Improving);
        if self.time_limit.is_zero() {
            info!(event = "search_skipped", reason = "zero time limit");
            return Ok(SearchOutcome {
                director: constructed,
                construction_score,
                construction_time,
                stats,
                worker_count: 0,
                best_worker: None,
            });
        }

        let worker_count = self.config.worker_count.resolve();
        let constructed_bookings = constructed.bookings().to_vec();
        let results: Vec<Result<(AllocationScoreDirector, SolverStats), SolverError>> =
            if worker_count == 1 {
                vec![self.run_worker(0, constructed_bookings)]
            } else {
                (0..worker_count)
                    .into_par_iter()
                    .map(|i| self.run_worker(i, constructed_bookings.clone()))
                    .collect()
            };

        // Best score wins; ties go to the lowest worker index.
        let mut best: Option<(usize, AllocationScoreDirector)> = None;
        for (i, result) in results.into_iter().enumerate() {
            let (director, worker_stats) = result?;
            stats.merge(&worker_stats);
            let replace = best
                .as_ref()
                .map_or(true, |(_, b)| director.score() > b.score());
            if replace {
                best = Some((i, director));
            }
        }
        let (best_worker, director) = match best {
            Some((i, director)) => (Some(i), director),
            None => (None, constructed),
        };

        Ok(SearchOutcome {
            director,
            construction_score,
            construction_time,
            stats,
            worker_count,
            best_worker,
        })
    }

    fn run_worker(
        &self,
        worker_index: usize,
        bookings: Vec<GuestBooking>,
    ) -> Result<(AllocationScoreDirector, SolverStats), SolverError> {
        let director = AllocationScoreDirector::new(self.calculator.clone(), bookings);
        let seed = self.config.seed().wrapping_add(worker_index as u64);
        let mut scope = SolverScope::with_seed(director, seed).with_worker_index(worker_index);
        if let Some(sender) = &self.sender {
            scope = scope.with_sender(sender.clone());
        }
        scope.start_solving_at(self.start);

        let local_search = &self.config.local_search;
        let termination = TerminationBuilder::build(
            self.config,
            self.time_limit,
            self.terminate_flag.clone().map(ExternalTermination::new),
        )?;
        let selector = MoveSelector::new(scope.director(), local_search.swap_probability);
        let mut phase = LocalSearchPhase::new(
            selector,
            AcceptorBuilder::build(&local_search.acceptor),
            termination,
            local_search.move_sample_size,
        );
        phase.solve(&mut scope);
        Ok(scope.into_best())
    }
}

// Full rescore of the final assignment plus the consistency checks every
// returned solution must pass.
fn package(
    tenant_id: &str,
    rooms: Vec<Room>,
    calculator: &ScoreCalculator,
    director: AllocationScoreDirector,
    start: Instant,
) -> Result<Solution, SolverError> {
    let incremental = director.score();
    let bookings = director.into_bookings();
    let (score, matches) = calculator.score_full(&bookings);
    if score != incremental {
        return Err(SolverError::internal(format!(
            "incremental score {} diverged from full score {}",
            incremental, score
        )));
    }

    let mut solution = Solution::new(tenant_id, rooms, bookings);
    solution.score = score;
    solution.constraint_matches = matches;
    if solution.matches_total() != score {
        return Err(SolverError::internal(format!(
            "constraint matches sum to {} but the score is {}",
            solution.matches_total(),
            score
        )));
    }
    if let Some(&(a, b)) = solution.overlapping_pairs().first() {
        return Err(SolverError::internal(format!(
            "bookings {} and {} overlap in the same room",
            solution.bookings[a].id, solution.bookings[b].id
        )));
    }
    solution.solve_time = start.elapsed();
    Ok(solution)
}

fn fail(tracker: &mut StatusTracker, err: SolverError) -> SolverError {
    tracker.transition(SolverStatus::Failed);
    error!(event = "solve_failed", status = err.http_status(), error = %err);
    err
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
