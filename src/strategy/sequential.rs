use std::sync::Arc;

use super::ExecutionStrategy;
use crate::assign::assign_and_aggregate;
use crate::error::Result;
use crate::geometry::{ClusterAggregate, Point};

/// Whole point set as one unit on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl ExecutionStrategy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn partials(
        &self,
        clusters: &Arc<[ClusterAggregate]>,
        points: &Arc<[Point]>,
    ) -> Result<Vec<Vec<ClusterAggregate>>> {
        Ok(vec![assign_and_aggregate(clusters, points)?])
    }
}
