use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{KMeansError, Result};
use crate::geometry::Point;

/// Parse a JSON array of coordinate arrays
pub fn parse_points(json: &str) -> Result<Vec<Point>> {
    Ok(serde_json::from_str(json)?)
}

/// `count` points drawn uniformly from `[low, high)` on every axis.
///
/// The same `seed` always yields the same points.
pub fn uniform_points(
    seed: u64,
    count: usize,
    dims: usize,
    low: f64,
    high: f64,
) -> Result<Vec<Point>> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(KMeansError::InvalidConfig(format!(
            "invalid sampling range [{low}, {high})"
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| {
            let coords: Vec<f64> = (0..dims).map(|_| rng.random_range(low..high)).collect();
            Point::from(coords)
        })
        .collect())
}

/// `per_center` points scattered within `radius` of each center on every axis
pub fn blob_points(
    seed: u64,
    centers: &[Point],
    per_center: usize,
    radius: f64,
) -> Result<Vec<Point>> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(KMeansError::InvalidConfig(format!(
            "blob radius must be finite and non-negative, got {radius}"
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(centers.len() * per_center);
    for center in centers {
        for _ in 0..per_center {
            let coords: Vec<f64> = center
                .coords()
                .iter()
                .map(|c| c + rng.random_range(-radius..=radius))
                .collect();
            points.push(Point::from(coords));
        }
    }
    Ok(points)
}
