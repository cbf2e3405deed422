#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::error::{KMeansError, Result};
use crate::geometry::{ClusterAggregate, ClusterId, Point, build_aggregate, squared_distance};

/// Points grouped under the id of their nearest centroid
#[derive(Debug, Default)]
pub struct Assignment<'a> {
    members: BTreeMap<ClusterId, Vec<&'a Point>>,
}

impl<'a> Assignment<'a> {
    /// Members of cluster `id`, in point order
    pub fn members(&self, id: ClusterId) -> &[&'a Point] {
        self.members.get(&id).map(|m| m.as_slice()).unwrap_or(&[])
    }

    /// Ids that received at least one point
    pub fn cluster_ids(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.members.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// One partial aggregate per non-empty cluster, ordered by id
    pub fn aggregate(&self) -> Vec<ClusterAggregate> {
        self.members
            .iter()
            .map(|(&id, members)| build_aggregate(id, members))
            .filter(|agg| !agg.is_empty())
            .collect()
    }
}

/// Index of the centroid nearest to `point`.
///
/// Ties go to the first cluster in supplied order.
pub fn nearest_cluster(clusters: &[ClusterAggregate], point: &Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, cluster) in clusters.iter().enumerate() {
        let dist = squared_distance(point, &cluster.centroid);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// Assign every point to its nearest cluster.
pub fn assign_points<'a>(
    clusters: &[ClusterAggregate],
    points: &'a [Point],
) -> Result<Assignment<'a>> {
    let Some(first) = clusters.first() else {
        return Err(KMeansError::NoClusters);
    };
    let dims = first.centroid.dims();

    let mut members: BTreeMap<ClusterId, Vec<&'a Point>> = BTreeMap::new();
    for point in points {
        if point.dims() != dims {
            return Err(KMeansError::DimensionMismatch {
                expected: dims,
                found: point.dims(),
            });
        }
        let idx = nearest_cluster(clusters, point).ok_or(KMeansError::NoClusters)?;
        members.entry(clusters[idx].id).or_default().push(point);
    }

    Ok(Assignment { members })
}

/// Per-chunk unit of work: assignment followed by aggregation
pub fn assign_and_aggregate(
    clusters: &[ClusterAggregate],
    points: &[Point],
) -> Result<Vec<ClusterAggregate>> {
    Ok(assign_points(clusters, points)?.aggregate())
}
