use serde::Serialize;

use super::{ClusterId, Point};
use crate::error::{KMeansError, Result};

/// Snapshot of one cluster: identity, member count and mean position.
///
/// The coordinate sum is kept alongside the centroid so partial aggregates
/// from disjoint chunks can be merged exactly, dividing only once.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterAggregate {
    pub id: ClusterId,
    pub count: usize,
    pub centroid: Point,
    #[serde(skip)]
    sum: Vec<f64>,
}

impl ClusterAggregate {
    /// Zero-count aggregate carrying an externally supplied centroid
    pub fn seed(id: ClusterId, centroid: Point) -> Self {
        Self {
            id,
            count: 0,
            sum: vec![0.0; centroid.dims()],
            centroid,
        }
    }

    fn empty(id: ClusterId) -> Self {
        Self {
            id,
            count: 0,
            centroid: Point::new(Vec::new()),
            sum: Vec::new(),
        }
    }

    fn from_sum(id: ClusterId, count: usize, sum: Vec<f64>) -> Self {
        // count > 0 is guaranteed by every caller
        let n = count as f64;
        let centroid = Point::new(sum.iter().map(|s| s / n).collect::<Vec<_>>());
        Self {
            id,
            count,
            centroid,
            sum,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn sum(&self) -> &[f64] {
        &self.sum
    }
}

impl PartialEq for ClusterAggregate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.count == other.count && self.centroid == other.centroid
    }
}

/// Aggregate the given members of cluster `id`.
///
/// An empty member list yields a zero-count aggregate; callers drop those
/// before they reach a result list.
pub fn build_aggregate(id: ClusterId, points: &[&Point]) -> ClusterAggregate {
    let Some(first) = points.first() else {
        return ClusterAggregate::empty(id);
    };

    let mut sum = vec![0.0; first.dims()];
    for p in points {
        for (s, c) in sum.iter_mut().zip(p.coords()) {
            *s += c;
        }
    }

    ClusterAggregate::from_sum(id, points.len(), sum)
}

/// Merge two partial aggregates of the same cluster.
///
/// Counts and coordinate sums are added, then the centroid is recomputed
/// from the merged sum. Zero-count aggregates act as the identity.
pub fn merge_aggregates(a: &ClusterAggregate, b: &ClusterAggregate) -> Result<ClusterAggregate> {
    if a.id != b.id {
        return Err(KMeansError::MismatchedClusterIds {
            left: a.id,
            right: b.id,
        });
    }
    if b.is_empty() {
        return Ok(a.clone());
    }
    if a.is_empty() {
        return Ok(b.clone());
    }
    if a.sum.len() != b.sum.len() {
        return Err(KMeansError::DimensionMismatch {
            expected: a.sum.len(),
            found: b.sum.len(),
        });
    }

    let sum = a.sum.iter().zip(b.sum.iter()).map(|(x, y)| x + y).collect();
    Ok(ClusterAggregate::from_sum(a.id, a.count + b.count, sum))
}
