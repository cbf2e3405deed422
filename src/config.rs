use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{KMeansError, Result};

/// Iteration cap used when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Chunk count used by the chunked strategies when none is configured
pub const DEFAULT_MAPPERS: usize = 4;

/// How one iteration's assignment work is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Whole point set in one unit on the calling thread
    #[default]
    Sequential,
    /// Parallel map over point chunks on a rayon pool
    Parallel,
    /// Point chunks submitted as tasks to a tokio scheduler
    Scheduled,
}

/// Solver settings supplied from outside the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Non-converged evaluations allowed before giving up
    pub max_iterations: usize,
    pub strategy: StrategyKind,
    /// Number of point chunks for the chunked strategies
    pub mappers: usize,
    /// Worker threads; `None` lets the pool decide
    pub threads: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            strategy: StrategyKind::default(),
            mappers: DEFAULT_MAPPERS,
            threads: None,
        }
    }
}

impl SolverConfig {
    pub fn new(strategy: StrategyKind, mappers: usize) -> Self {
        Self {
            strategy,
            mappers,
            ..Self::default()
        }
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mappers == 0 {
            return Err(KMeansError::InvalidMapperCount);
        }
        if self.threads == Some(0) {
            return Err(KMeansError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
