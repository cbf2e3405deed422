use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use super::{ExecutionStrategy, split_chunks};
use crate::assign::assign_and_aggregate;
use crate::error::{KMeansError, Result};
use crate::geometry::{ClusterAggregate, Point};

/// Parallel map over contiguous point chunks on a dedicated rayon pool
pub struct ParallelMap {
    mappers: usize,
    pool: ThreadPool,
}

impl ParallelMap {
    /// `threads` of `None` lets rayon pick one thread per core
    pub fn new(mappers: usize, threads: Option<usize>) -> Result<Self> {
        if mappers == 0 {
            return Err(KMeansError::InvalidMapperCount);
        }
        if threads == Some(0) {
            return Err(KMeansError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or(0))
            .thread_name(|i| format!("kcluster-map-{i}"))
            .build()?;
        Ok(Self { mappers, pool })
    }
}

impl ExecutionStrategy for ParallelMap {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn partials(
        &self,
        clusters: &Arc<[ClusterAggregate]>,
        points: &Arc<[Point]>,
    ) -> Result<Vec<Vec<ClusterAggregate>>> {
        let chunks = split_chunks(points.len(), self.mappers)?;
        debug!(chunks = chunks.len(), "dispatching parallel map");

        self.pool.install(|| {
            chunks
                .into_par_iter()
                .map(|range| assign_and_aggregate(clusters, &points[range]))
                .collect()
        })
    }
}
