use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(vec![x, y])
}

fn seeds(centroids: &[(f64, f64)]) -> Vec<ClusterAggregate> {
    centroids
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| ClusterAggregate::seed(i as ClusterId, p(x, y)))
        .collect()
}

#[test]
fn test_assigns_to_nearest_centroid() {
    let clusters = seeds(&[(0.0, 0.0), (10.0, 10.0)]);
    let points = vec![p(0.1, 0.1), p(-0.1, -0.1), p(9.9, 10.1), p(10.2, 9.8)];

    let assignment = assign_points(&clusters, &points).unwrap();
    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment.members(0), &[&points[0], &points[1]]);
    assert_eq!(assignment.members(1), &[&points[2], &points[3]]);
}

#[test]
fn test_tie_goes_to_first_supplied_cluster() {
    // (5, 0) is equidistant from both centroids
    let clusters = seeds(&[(0.0, 0.0), (10.0, 0.0)]);
    let points = vec![p(5.0, 0.0)];

    let assignment = assign_points(&clusters, &points).unwrap();
    assert_eq!(assignment.members(0).len(), 1);
    assert!(assignment.members(1).is_empty());

    // Reversing the supplied order flips the winner
    let reversed: Vec<ClusterAggregate> = clusters.into_iter().rev().collect();
    let assignment = assign_points(&reversed, &points).unwrap();
    assert_eq!(assignment.members(1).len(), 1);
    assert!(assignment.members(0).is_empty());
}

#[test]
fn test_unreached_cluster_is_absent() {
    let clusters = seeds(&[(0.0, 0.0), (1000.0, 1000.0)]);
    let points = vec![p(1.0, 1.0), p(-1.0, 2.0)];

    let assignment = assign_points(&clusters, &points).unwrap();
    assert_eq!(assignment.cluster_ids().collect::<Vec<_>>(), vec![0]);

    let aggregates = assignment.aggregate();
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].count, 2);
}

#[test]
fn test_sparse_ids_survive() {
    let clusters = vec![
        ClusterAggregate::seed(7, p(0.0, 0.0)),
        ClusterAggregate::seed(42, p(5.0, 5.0)),
    ];
    let points = vec![p(4.0, 4.0)];

    let aggregates = assign_and_aggregate(&clusters, &points).unwrap();
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].id, 42);
}

#[test]
fn test_no_clusters_is_an_error() {
    let points = vec![p(0.0, 0.0)];
    assert!(matches!(
        assign_points(&[], &points),
        Err(KMeansError::NoClusters)
    ));
}

#[test]
fn test_dimension_mismatch_is_an_error() {
    let clusters = seeds(&[(0.0, 0.0)]);
    let points = vec![Point::new(vec![1.0, 2.0, 3.0])];

    assert!(matches!(
        assign_points(&clusters, &points),
        Err(KMeansError::DimensionMismatch { expected: 2, found: 3 })
    ));
}

#[test]
fn test_empty_chunk_yields_no_aggregates() {
    let clusters = seeds(&[(0.0, 0.0)]);
    let aggregates = assign_and_aggregate(&clusters, &[]).unwrap();
    assert!(aggregates.is_empty());
}
