use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(vec![x, y])
}

fn approx_eq(a: &Point, b: &Point) -> bool {
    a.dims() == b.dims()
        && a.coords()
            .iter()
            .zip(b.coords())
            .all(|(x, y)| (x - y).abs() < 1e-9)
}

#[test]
fn test_squared_distance() {
    assert_eq!(squared_distance(&p(0.0, 0.0), &p(3.0, 4.0)), 25.0);
    assert_eq!(squared_distance(&p(1.5, -2.0), &p(1.5, -2.0)), 0.0);
}

#[test]
fn test_squared_distance_is_symmetric() {
    let a = Point::new(vec![1.0, 2.0, 3.0]);
    let b = Point::new(vec![-4.0, 0.5, 9.0]);
    assert_eq!(squared_distance(&a, &b), squared_distance(&b, &a));
}

#[test]
fn test_build_aggregate_mean() {
    let points = [p(0.1, 0.1), p(-0.1, -0.1)];
    let refs: Vec<&Point> = points.iter().collect();

    let agg = build_aggregate(0, &refs);
    assert_eq!(agg.id, 0);
    assert_eq!(agg.count, 2);
    assert!(approx_eq(&agg.centroid, &p(0.0, 0.0)));
}

#[test]
fn test_build_aggregate_empty() {
    let agg = build_aggregate(3, &[]);
    assert_eq!(agg.id, 3);
    assert_eq!(agg.count, 0);
    assert!(agg.is_empty());
}

#[test]
fn test_seed_has_zero_count() {
    let seed = ClusterAggregate::seed(1, p(10.0, 10.0));
    assert_eq!(seed.count, 0);
    assert_eq!(seed.centroid, p(10.0, 10.0));
    assert_eq!(seed.sum(), &[0.0, 0.0]);
}

#[test]
fn test_merge_weights_by_count() {
    // Averaging the two centroids would give (2.5, 0); the weighted mean is (1, 0).
    let left = [p(0.0, 0.0), p(0.0, 0.0), p(0.0, 0.0)];
    let right = [p(4.0, 0.0)];
    let a = build_aggregate(0, &left.iter().collect::<Vec<_>>());
    let b = build_aggregate(0, &right.iter().collect::<Vec<_>>());

    let merged = merge_aggregates(&a, &b).unwrap();
    assert_eq!(merged.count, 4);
    assert!(approx_eq(&merged.centroid, &p(1.0, 0.0)));
}

#[test]
fn test_merge_empty_is_identity() {
    let points = [p(2.0, 3.0)];
    let a = build_aggregate(5, &points.iter().collect::<Vec<_>>());
    let empty = build_aggregate(5, &[]);

    assert_eq!(merge_aggregates(&a, &empty).unwrap(), a);
    assert_eq!(merge_aggregates(&empty, &a).unwrap(), a);
}

#[test]
fn test_merge_rejects_different_ids() {
    let points = [p(1.0, 1.0)];
    let refs: Vec<&Point> = points.iter().collect();
    let a = build_aggregate(0, &refs);
    let b = build_aggregate(1, &refs);

    let result = merge_aggregates(&a, &b);
    assert!(matches!(
        result,
        Err(crate::KMeansError::MismatchedClusterIds { left: 0, right: 1 })
    ));
}

#[test]
fn test_merge_matches_single_aggregate_in_any_grouping() {
    let points: Vec<Point> = (0..9)
        .map(|i| p(i as f64 * 0.37, (i * i) as f64 * -0.11))
        .collect();
    let all: Vec<&Point> = points.iter().collect();
    let whole = build_aggregate(2, &all);

    let parts: Vec<ClusterAggregate> = all.chunks(2).map(|c| build_aggregate(2, c)).collect();

    // Left fold
    let mut left = parts[0].clone();
    for part in &parts[1..] {
        left = merge_aggregates(&left, part).unwrap();
    }

    // Right fold over the reversed order
    let mut right = parts[parts.len() - 1].clone();
    for part in parts[..parts.len() - 1].iter().rev() {
        right = merge_aggregates(part, &right).unwrap();
    }

    for merged in [&left, &right] {
        assert_eq!(merged.count, whole.count);
        assert!(approx_eq(&merged.centroid, &whole.centroid));
    }
}

#[test]
fn test_point_serializes_as_array() {
    let json = serde_json::to_string(&p(1.0, -2.5)).unwrap();
    assert_eq!(json, "[1.0,-2.5]");

    let back: Point = serde_json::from_str("[3.0, 4.0]").unwrap();
    assert_eq!(back, p(3.0, 4.0));
}
