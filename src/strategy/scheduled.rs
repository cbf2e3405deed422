use std::ops::Range;
use std::sync::Arc;
use std::thread;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinSet;
use tracing::debug;

use super::{ExecutionStrategy, split_chunks};
use crate::assign::assign_and_aggregate;
use crate::error::{KMeansError, Result};
use crate::geometry::{ClusterAggregate, Point};

/// Work run by one chunk task
pub(super) type ChunkWork = fn(&[ClusterAggregate], &[Point]) -> Result<Vec<ClusterAggregate>>;

/// Chunks submitted as tasks to a multi-threaded tokio scheduler.
///
/// Tasks may complete in any order; results are put back into chunk order
/// before they are returned so the reduction sums in a fixed order.
pub struct Scheduled {
    mappers: usize,
    // Only taken on drop
    runtime: Option<Runtime>,
}

impl Scheduled {
    pub fn new(mappers: usize, threads: Option<usize>) -> Result<Self> {
        if mappers == 0 {
            return Err(KMeansError::InvalidMapperCount);
        }
        if threads == Some(0) {
            return Err(KMeansError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        let mut builder = Builder::new_multi_thread();
        builder.thread_name("kcluster-task");
        if let Some(threads) = threads {
            builder.worker_threads(threads);
        }
        let runtime = builder.build()?;
        Ok(Self {
            mappers,
            runtime: Some(runtime),
        })
    }

    /// Split `points`, run `work` on every chunk as a task and wait for all of them
    pub(super) fn run_chunks(
        &self,
        clusters: &Arc<[ClusterAggregate]>,
        points: &Arc<[Point]>,
        work: ChunkWork,
    ) -> Result<Vec<Vec<ClusterAggregate>>> {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| KMeansError::Worker("task runtime has shut down".to_string()))?;
        let chunks = split_chunks(points.len(), self.mappers)?;
        debug!(chunks = chunks.len(), "submitting chunk tasks");

        let collect = move || runtime.block_on(collect_chunks(chunks, clusters, points, work));

        if Handle::try_current().is_err() {
            return collect();
        }
        // block_on cannot nest inside a runtime; drive it from a plain thread
        thread::scope(|scope| scope.spawn(collect).join())
            .map_err(|_| KMeansError::Worker("chunk dispatcher panicked".to_string()))?
    }
}

async fn collect_chunks(
    chunks: Vec<Range<usize>>,
    clusters: &Arc<[ClusterAggregate]>,
    points: &Arc<[Point]>,
    work: ChunkWork,
) -> Result<Vec<Vec<ClusterAggregate>>> {
    let mut tasks = JoinSet::new();
    for (index, range) in chunks.into_iter().enumerate() {
        let clusters = Arc::clone(clusters);
        let points = Arc::clone(points);
        tasks.spawn(async move { (index, work(&clusters, &points[range])) });
    }

    // Dropping the set on an early return aborts the remaining tasks
    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, partial) = joined.map_err(|e| KMeansError::Worker(e.to_string()))?;
        results.push((index, partial?));
    }

    results.sort_by_key(|(index, _)| *index);
    Ok(results.into_iter().map(|(_, partial)| partial).collect())
}

impl Drop for Scheduled {
    fn drop(&mut self) {
        // A blocking shutdown panics when the owner is dropped inside async code
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl ExecutionStrategy for Scheduled {
    fn name(&self) -> &'static str {
        "scheduled"
    }

    fn partials(
        &self,
        clusters: &Arc<[ClusterAggregate]>,
        points: &Arc<[Point]>,
    ) -> Result<Vec<Vec<ClusterAggregate>>> {
        self.run_chunks(clusters, points, assign_and_aggregate)
    }
}
