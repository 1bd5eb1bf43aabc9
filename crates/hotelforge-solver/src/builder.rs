//! Wiring between configuration types and solver components.

use hotelforge_config::{AcceptorConfig, SolverConfig};
use hotelforge_core::SolverError;

use crate::phase::localsearch::{Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor};
use crate::termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination,
    TimeTermination, UnimprovedStepCountTermination,
};

/// Builder for acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    pub fn build(config: &AcceptorConfig) -> Box<dyn Acceptor> {
        match config {
            AcceptorConfig::HillClimbing => Box::new(HillClimbingAcceptor::new()),
            AcceptorConfig::LateAcceptance(la) => Box::new(LateAcceptanceAcceptor::new(la.size())),
        }
    }
}

/// The termination used by every local search worker.
pub type SearchTermination = OrTermination<(
    TimeTermination,
    UnimprovedStepCountTermination,
    Option<StepCountTermination>,
    Option<BestScoreTermination>,
    Option<ExternalTermination>,
)>;

/// Builder for the local search termination.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Combines the time limit, the configured stagnation/step/score bounds
    /// and an optional cancellation flag.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `best_score_limit` does not parse.
    pub fn build(
        config: &SolverConfig,
        time_limit: std::time::Duration,
        external: Option<ExternalTermination>,
    ) -> Result<SearchTermination, SolverError> {
        let termination = &config.termination;
        let best_score = termination
            .best_score()
            .map_err(|e| SolverError::configuration("best_score_limit", e.to_string()))?;
        Ok(OrTermination::new((
            TimeTermination::new(time_limit),
            UnimprovedStepCountTermination::new(termination.unimproved_step_count_limit()),
            termination.step_count_limit.map(StepCountTermination::new),
            best_score.map(BestScoreTermination::new),
            external,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelforge_config::LateAcceptanceConfig;
    use hotelforge_core::HardSoftScore;

    #[test]
    fn test_acceptor_builder_hill_climbing() {
        let acceptor = AcceptorBuilder::build(&AcceptorConfig::HillClimbing);
        let score = HardSoftScore::of(-1, 10);
        assert!(acceptor.is_accepted(&score, &score));
        assert!(!acceptor.is_accepted(&score, &HardSoftScore::of(-1, 9)));
    }

    #[test]
    fn test_acceptor_builder_late_acceptance() {
        let config = AcceptorConfig::LateAcceptance(LateAcceptanceConfig {
            late_acceptance_size: Some(3),
        });
        let mut acceptor = AcceptorBuilder::build(&config);
        acceptor.phase_started(&HardSoftScore::of_soft(5));
        // Worse than the last step but not than the late score.
        assert!(acceptor.is_accepted(&HardSoftScore::of_soft(8), &HardSoftScore::of_soft(5)));
        assert!(!acceptor.is_accepted(&HardSoftScore::of_soft(8), &HardSoftScore::of_soft(4)));
    }

    #[test]
    fn test_termination_builder_rejects_bad_score_limit() {
        let mut config = SolverConfig::default();
        config.termination.best_score_limit = Some("lots".to_string());
        let err = TerminationBuilder::build(&config, std::time::Duration::from_secs(1), None)
            .unwrap_err();
        assert_eq!(err.http_status(), 400);
    }
}
