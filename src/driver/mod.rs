mod state;


pub use state::{DriverState, Outcome, Termination};

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::error::{KMeansError, Result};
use crate::geometry::{ClusterAggregate, Point};
use crate::reduce::reduce_partials;
use crate::strategy::{self, ExecutionStrategy};

/// Convergence driver, written once against [`ExecutionStrategy`]
pub struct Solver {
    config: SolverConfig,
    strategy: Box<dyn ExecutionStrategy>,
}

impl Solver {
    /// Create a solver using the strategy named in `config`
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let strategy = strategy::from_config(&config)?;
        Ok(Self { config, strategy })
    }

    /// Create a solver around an explicit strategy; `config.strategy` is ignored
    pub fn with_strategy(
        config: SolverConfig,
        strategy: impl ExecutionStrategy + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            strategy: Box::new(strategy),
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// One assignment + reduction pass over all points
    pub fn step(
        &self,
        clusters: &Arc<[ClusterAggregate]>,
        points: &Arc<[Point]>,
    ) -> Result<Vec<ClusterAggregate>> {
        reduce_partials(self.strategy.partials(clusters, points)?)
    }

    /// Apply one transition; terminal states are returned unchanged
    pub fn advance(&self, state: DriverState, points: &Arc<[Point]>) -> Result<DriverState> {
        let (iteration, clusters) = match state {
            DriverState::Running {
                iteration,
                clusters,
            } => (iteration, clusters),
            terminal => return Ok(terminal),
        };

        let next = self.step(&clusters, points)?;
        debug!(iteration, clusters = next.len(), "iteration complete");

        if next.as_slice() == &clusters[..] {
            info!(iterations = iteration, "converged");
            return Ok(DriverState::Converged {
                iteration,
                clusters,
            });
        }
        if iteration >= self.config.max_iterations {
            warn!(
                max_iterations = self.config.max_iterations,
                "giving up without convergence"
            );
            return Ok(DriverState::GaveUp {
                iteration,
                clusters,
            });
        }

        Ok(DriverState::Running {
            iteration: iteration + 1,
            clusters: Arc::from(next),
        })
    }

    /// Iterate from `seeds` until the cluster set stops changing or the cap is hit.
    ///
    /// Seeds are ordered by id before the first iteration.
    pub fn run(
        &self,
        seeds: Vec<ClusterAggregate>,
        points: impl Into<Arc<[Point]>>,
    ) -> Result<Outcome> {
        let points: Arc<[Point]> = points.into();
        let seeds = validate_inputs(seeds, &points)?;

        let mut state = DriverState::initial(seeds);
        loop {
            state = self.advance(state, &points)?;
            if let Some(outcome) = state.outcome() {
                return Ok(outcome);
            }
        }
    }
}

fn validate_inputs(
    mut seeds: Vec<ClusterAggregate>,
    points: &[Point],
) -> Result<Vec<ClusterAggregate>> {
    if points.is_empty() {
        return Err(KMeansError::EmptyPoints);
    }
    if seeds.is_empty() {
        return Err(KMeansError::NoClusters);
    }

    seeds.sort_by_key(|c| c.id);
    let mut ids = BTreeSet::new();
    let dims = seeds[0].centroid.dims();
    for seed in &seeds {
        if !ids.insert(seed.id) {
            return Err(KMeansError::DuplicateClusterId(seed.id));
        }
        if seed.centroid.dims() != dims {
            return Err(KMeansError::DimensionMismatch {
                expected: dims,
                found: seed.centroid.dims(),
            });
        }
    }
    if let Some(point) = points.iter().find(|p| p.dims() != dims) {
        return Err(KMeansError::DimensionMismatch {
            expected: dims,
            found: point.dims(),
        });
    }

    Ok(seeds)
}
