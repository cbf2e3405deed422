use thiserror::Error;

use crate::geometry::ClusterId;

#[derive(Error, Debug)]
pub enum KMeansError {
    #[error("Point set is empty")]
    EmptyPoints,

    #[error("Cluster set is empty")]
    NoClusters,

    #[error("Duplicate cluster id: {0}")]
    DuplicateClusterId(ClusterId),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Mapper count must be at least 1")]
    InvalidMapperCount,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot merge aggregates of clusters {left} and {right}")]
    MismatchedClusterIds { left: ClusterId, right: ClusterId },

    #[error("Chunk worker failed: {0}")]
    Worker(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to start task runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KMeansError>;
