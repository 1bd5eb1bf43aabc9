//! Configuration system for HotelForge.
//!
//! Load solver configuration from TOML or YAML files to control termination,
//! the local search acceptor, parallel workers and catalog caching without
//! code changes. Catalog files describe constraint templates and per-tenant
//! overrides for the in-memory constraint source.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hotelforge_config::{AcceptorConfig, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     unimproved_step_count_limit = 500
//!
//!     [local_search]
//!     move_sample_size = 32
//!     [local_search.acceptor]
//!     type = "late_acceptance"
//!     late_acceptance_size = 400
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.termination.unimproved_step_count_limit(), 500);
//! assert!(matches!(config.local_search.acceptor, AcceptorConfig::LateAcceptance(_)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hotelforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! assert_eq!(config.seed(), 0);
//! ```

mod catalog;


use std::path::Path;
use std::time::Duration;

use hotelforge_core::HardSoftScore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{CatalogFile, TemplateEntry, TenantConstraintEntry, TenantEntry};

/// Default stagnation bound for local search.
pub const DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT: u64 = 1000;

/// Default number of candidate moves evaluated per local search step.
pub const DEFAULT_MOVE_SAMPLE_SIZE: usize = 64;

/// Default history length for late acceptance.
pub const DEFAULT_LATE_ACCEPTANCE_SIZE: usize = 400;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results. Absent means seed 0.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Number of independent local search workers.
    #[serde(default)]
    pub worker_count: WorkerCount,

    #[serde(default)]
    pub termination: TerminationConfig,

    #[serde(default)]
    pub local_search: LocalSearchConfig,

    #[serde(default)]
    pub catalog: CatalogCacheConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = read_by_extension(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination.seconds_spent_limit = Some(seconds);
        self
    }

    /// Sets the stagnation bound.
    pub fn with_unimproved_step_count_limit(mut self, limit: u64) -> Self {
        self.termination.unimproved_step_count_limit = Some(limit);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_worker_count(mut self, worker_count: WorkerCount) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_acceptor(mut self, acceptor: AcceptorConfig) -> Self {
        self.local_search.acceptor = acceptor;
        self
    }

    pub fn with_catalog_cache(mut self, enabled: bool) -> Self {
        self.catalog.cache_enabled = enabled;
        self
    }

    /// The effective random seed.
    pub fn seed(&self) -> u64 {
        self.random_seed.unwrap_or(0)
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.time_limit()
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.local_search.move_sample_size == 0 {
            return Err(ConfigError::Invalid(
                "local_search.move_sample_size must be at least 1".to_string(),
            ));
        }
        let p = self.local_search.swap_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "local_search.swap_probability must be within [0, 1], got {}",
                p
            )));
        }
        if let AcceptorConfig::LateAcceptance(la) = &self.local_search.acceptor {
            if la.late_acceptance_size == Some(0) {
                return Err(ConfigError::Invalid(
                    "late_acceptance_size must be at least 1".to_string(),
                ));
            }
        }
        if let WorkerCount::Count(0) = self.worker_count {
            return Err(ConfigError::Invalid(
                "worker_count must be at least 1".to_string(),
            ));
        }
        self.termination.best_score()?;
        Ok(())
    }
}

/// Number of parallel local search workers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerCount {
    /// One worker per available CPU.
    Auto,

    /// A single worker on the calling thread.
    #[default]
    None,

    /// Specific number of workers.
    Count(usize),
}

impl WorkerCount {
    /// Resolves to a concrete worker count, always at least 1.
    pub fn resolve(&self) -> usize {
        match self {
            WorkerCount::Auto => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            WorkerCount::None => 1,
            WorkerCount::Count(n) => (*n).max(1),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Target best score to achieve (as string, e.g., "0hard/0soft").
    pub best_score_limit: Option<String>,

    /// Maximum number of local search steps.
    pub step_count_limit: Option<u64>,

    /// Maximum consecutive unimproved steps before terminating.
    pub unimproved_step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit.map(Duration::from_secs)
    }

    /// The stagnation bound, falling back to the default.
    pub fn unimproved_step_count_limit(&self) -> u64 {
        self.unimproved_step_count_limit
            .unwrap_or(DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT)
    }

    /// Parses `best_score_limit`.
    pub fn best_score(&self) -> Result<Option<HardSoftScore>, ConfigError> {
        self.best_score_limit
            .as_deref()
            .map(|s| {
                HardSoftScore::parse(s)
                    .map_err(|e| ConfigError::Invalid(format!("best_score_limit: {}", e)))
            })
            .transpose()
    }
}

/// Local search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    #[serde(default)]
    pub acceptor: AcceptorConfig,

    /// Candidate moves evaluated per step.
    #[serde(default = "default_move_sample_size")]
    pub move_sample_size: usize,

    /// Probability of sampling a swap rather than a reassign move.
    #[serde(default = "default_swap_probability")]
    pub swap_probability: f64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            acceptor: AcceptorConfig::default(),
            move_sample_size: DEFAULT_MOVE_SAMPLE_SIZE,
            swap_probability: default_swap_probability(),
        }
    }
}

fn default_move_sample_size() -> usize {
    DEFAULT_MOVE_SAMPLE_SIZE
}

fn default_swap_probability() -> f64 {
    0.5
}

/// Acceptor configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Accepts moves that do not worsen the current score.
    #[default]
    HillClimbing,

    /// Late acceptance acceptor.
    LateAcceptance(LateAcceptanceConfig),
}

/// Late acceptance configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LateAcceptanceConfig {
    /// Size of late acceptance list.
    pub late_acceptance_size: Option<usize>,
}

impl LateAcceptanceConfig {
    pub fn size(&self) -> usize {
        self.late_acceptance_size
            .unwrap_or(DEFAULT_LATE_ACCEPTANCE_SIZE)
    }
}

/// Constraint catalog caching.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogCacheConfig {
    /// Reuse resolved constraint lists keyed by tenant and config version.
    #[serde(default)]
    pub cache_enabled: bool,
}

/// Reads and deserializes a TOML or YAML file based on its extension.
pub(crate) fn read_by_extension<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&contents)?),
        _ => Ok(toml::from_str(&contents)?),
    }
}
