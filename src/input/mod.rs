mod points;
mod seeds;


pub use points::{blob_points, parse_points, uniform_points};
pub use seeds::parse_seeds;
