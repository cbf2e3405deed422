mod aggregate;
mod point;

#[cfg(test)]
mod tests;

pub use aggregate::{ClusterAggregate, build_aggregate, merge_aggregates};
pub use point::{Point, squared_distance};

/// Stable identity of a cluster across iterations
pub type ClusterId = u32;
