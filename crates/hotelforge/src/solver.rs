//! Solver construction from the working directory.

use std::sync::Arc;

use hotelforge_config::SolverConfig;
use hotelforge_scoring::ConstraintSource;
use hotelforge_solver::Solver;
use tracing::debug;

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "solver.toml";

/// Builds a solver over `source`, configured from `solver.toml` when it
/// exists and parses, with defaults otherwise.
pub fn load_solver(source: Arc<dyn ConstraintSource>) -> Solver {
    let config = match SolverConfig::load(DEFAULT_CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            debug!(event = "config_defaulted", path = DEFAULT_CONFIG_FILE, reason = %err);
            SolverConfig::default()
        }
    };
    Solver::new(source).with_config(config)
}
