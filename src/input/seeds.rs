use std::collections::BTreeMap;

use crate::error::{KMeansError, Result};
use crate::geometry::{ClusterAggregate, ClusterId, Point};

/// Parse a seed document mapping cluster id to initial centroid.
///
/// Expected shape: `{"0": [0.0, 0.0], "1": [10.0, 10.0]}`. Seeds come back
/// ordered by id.
pub fn parse_seeds(json: &str) -> Result<Vec<ClusterAggregate>> {
    let map: BTreeMap<ClusterId, Point> = serde_json::from_str(json)?;

    let Some(first) = map.values().next() else {
        return Err(KMeansError::NoClusters);
    };
    let dims = first.dims();
    if dims == 0 {
        return Err(KMeansError::InvalidConfig(
            "seed centroids need at least one coordinate".to_string(),
        ));
    }

    map.into_iter()
        .map(|(id, centroid)| {
            if centroid.dims() != dims {
                return Err(KMeansError::DimensionMismatch {
                    expected: dims,
                    found: centroid.dims(),
                });
            }
            Ok(ClusterAggregate::seed(id, centroid))
        })
        .collect()
}
