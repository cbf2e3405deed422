mod chunks;
mod parallel;
mod scheduled;
mod sequential;


pub use chunks::split_chunks;
pub use parallel::ParallelMap;
pub use scheduled::Scheduled;
pub use sequential::Sequential;

use std::sync::Arc;

use crate::config::{SolverConfig, StrategyKind};
use crate::error::Result;
use crate::geometry::{ClusterAggregate, Point};

/// Runs one iteration's assignment work and hands back partial aggregates
pub trait ExecutionStrategy: Send + Sync {
    /// Short label for reporting
    fn name(&self) -> &'static str;

    /// Assign `points` against `clusters` and aggregate per chunk.
    ///
    /// # Returns
    /// One partial aggregate list per chunk, in chunk order. Any chunk
    /// failure fails the whole call.
    fn partials(
        &self,
        clusters: &Arc<[ClusterAggregate]>,
        points: &Arc<[Point]>,
    ) -> Result<Vec<Vec<ClusterAggregate>>>;
}

/// Build the strategy selected by `config`
pub fn from_config(config: &SolverConfig) -> Result<Box<dyn ExecutionStrategy>> {
    let strategy: Box<dyn ExecutionStrategy> = match config.strategy {
        StrategyKind::Sequential => Box::new(Sequential),
        StrategyKind::Parallel => Box::new(ParallelMap::new(config.mappers, config.threads)?),
        StrategyKind::Scheduled => Box::new(Scheduled::new(config.mappers, config.threads)?),
    };
    Ok(strategy)
}
