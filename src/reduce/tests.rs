use super::*;
use crate::geometry::{Point, build_aggregate};

fn p(x: f64, y: f64) -> Point {
    Point::new(vec![x, y])
}

fn agg(id: ClusterId, points: &[Point]) -> ClusterAggregate {
    build_aggregate(id, &points.iter().collect::<Vec<_>>())
}

#[test]
fn test_merges_by_cluster_id() {
    let chunk_a = vec![agg(0, &[p(0.0, 0.0)]), agg(1, &[p(10.0, 10.0)])];
    let chunk_b = vec![agg(1, &[p(12.0, 10.0)]), agg(0, &[p(2.0, 0.0)])];

    let reduced = reduce_partials(vec![chunk_a, chunk_b]).unwrap();
    assert_eq!(reduced.len(), 2);
    assert_eq!(reduced[0].id, 0);
    assert_eq!(reduced[0].count, 2);
    assert_eq!(reduced[0].centroid, p(1.0, 0.0));
    assert_eq!(reduced[1].id, 1);
    assert_eq!(reduced[1].centroid, p(11.0, 10.0));
}

#[test]
fn test_output_is_ordered_by_id() {
    let reduced = reduce_partials(vec![
        vec![agg(9, &[p(1.0, 1.0)])],
        vec![agg(3, &[p(2.0, 2.0)])],
        vec![agg(5, &[p(3.0, 3.0)])],
    ])
    .unwrap();

    let ids: Vec<ClusterId> = reduced.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 5, 9]);
}

#[test]
fn test_drops_empty_aggregates() {
    let reduced = reduce_partials(vec![
        vec![build_aggregate(0, &[]), agg(1, &[p(1.0, 1.0)])],
        vec![build_aggregate(0, &[])],
    ])
    .unwrap();

    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].id, 1);
    assert!(reduced.iter().all(|c| c.count > 0));
}

#[test]
fn test_chunk_order_does_not_change_result() {
    let chunks = vec![
        vec![agg(0, &[p(0.0, 0.0), p(1.0, 0.0)])],
        vec![agg(0, &[p(2.0, 0.0)]), agg(1, &[p(9.0, 9.0)])],
        vec![agg(1, &[p(11.0, 11.0), p(10.0, 10.0)])],
    ];
    let forward = reduce_partials(chunks.clone()).unwrap();
    let backward = reduce_partials(chunks.into_iter().rev()).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward[0].count, 3);
    assert_eq!(forward[1].count, 3);
}

#[test]
fn test_no_partials_reduces_to_nothing() {
    let reduced = reduce_partials(Vec::<Vec<ClusterAggregate>>::new()).unwrap();
    assert!(reduced.is_empty());
}
