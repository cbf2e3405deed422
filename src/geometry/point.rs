use serde::{Deserialize, Serialize};

/// Immutable coordinate value in n dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Self {
            coords: coords.into(),
        }
    }

    /// Number of coordinates
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

/// Sum of squared coordinate differences.
///
/// Nearest-centroid selection only needs the ordering, so the square root
/// is never taken.
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    a.coords
        .iter()
        .zip(b.coords.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
