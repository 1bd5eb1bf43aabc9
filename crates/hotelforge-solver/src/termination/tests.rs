use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use hotelforge_core::HardSoftScore;
use hotelforge_scoring::{
    resolve_constraints, AllocationScoreDirector, InMemoryConstraintSource, ScoreCalculator,
};
use hotelforge_test::overbooked;

use super::*;

fn scope() -> SolverScope {
    let (rooms, bookings) = overbooked(2, 1);
    let source = InMemoryConstraintSource::builtin();
    let calculator = ScoreCalculator::new(resolve_constraints(&source, "t").unwrap(), rooms);
    SolverScope::with_seed(AllocationScoreDirector::new(calculator, bookings), 0)
}

#[test]
fn test_time_termination() {
    let mut scope = scope();
    let term = TimeTermination::millis(50);
    // Not started yet.
    assert!(!term.is_terminated(&scope));

    scope.start_solving_at(Instant::now());
    assert!(!term.is_terminated(&scope));

    scope.start_solving_at(Instant::now() - Duration::from_secs(1));
    assert!(term.is_terminated(&scope));
    assert_eq!(TimeTermination::seconds(2).limit(), Duration::from_secs(2));
}

#[test]
fn test_step_count_termination() {
    let mut scope = scope();
    let term = StepCountTermination::new(3);
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_unimproved_step_count_resets_on_improvement() {
    let mut scope = scope();
    let term = UnimprovedStepCountTermination::new(2);
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));

    scope.director_mut().assign(0, Some(0));
    scope.increment_step_count();
    scope.update_best_solution();
    assert!(!term.is_terminated(&scope));

    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_best_score_termination() {
    let mut scope = scope();
    let term = BestScoreTermination::new(HardSoftScore::of_hard(-1));
    assert!(!term.is_terminated(&scope));

    scope.director_mut().assign(1, Some(0));
    scope.update_best_solution();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let scope = scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(flag.clone());
    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_fires_on_any() {
    let mut scope = scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = OrTermination::new((
        TimeTermination::seconds(60),
        StepCountTermination::new(5),
        Some(ExternalTermination::new(flag.clone())),
    ));
    scope.start_solving();
    assert!(!term.is_terminated(&scope));

    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));

    flag.store(false, Ordering::SeqCst);
    for _ in 0..5 {
        scope.increment_step_count();
    }
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_absent_termination_never_fires() {
    let mut scope = scope();
    let term: Option<StepCountTermination> = None;
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));

    let boxed: Box<dyn Termination> = Box::new(StepCountTermination::new(1));
    assert!(boxed.is_terminated(&scope));
}
