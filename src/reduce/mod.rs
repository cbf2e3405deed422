#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::geometry::{ClusterAggregate, ClusterId, merge_aggregates};

/// Merge per-chunk partial aggregates into one aggregate per cluster id.
///
/// Groups are folded with [`merge_aggregates`], empty groups are dropped,
/// and the result is ordered by ascending id regardless of the order the
/// partials arrive in.
pub fn reduce_partials<I>(partials: I) -> Result<Vec<ClusterAggregate>>
where
    I: IntoIterator<Item = Vec<ClusterAggregate>>,
{
    let mut groups: BTreeMap<ClusterId, ClusterAggregate> = BTreeMap::new();

    for partial in partials.into_iter().flatten() {
        if partial.is_empty() {
            continue;
        }
        let merged = match groups.get(&partial.id) {
            Some(acc) => merge_aggregates(acc, &partial)?,
            None => partial,
        };
        groups.insert(merged.id, merged);
    }

    Ok(groups.into_values().filter(|agg| !agg.is_empty()).collect())
}
