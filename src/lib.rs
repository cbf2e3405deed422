// Public API exports
pub mod assign;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod input;
pub mod reduce;
pub mod strategy;

// Re-export main types for convenience
pub use error::{KMeansError, Result};

pub use geometry::{
    ClusterAggregate, ClusterId, Point, build_aggregate, merge_aggregates, squared_distance,
};

pub use assign::{Assignment, assign_and_aggregate, assign_points};
pub use reduce::reduce_partials;

pub use config::{DEFAULT_MAPPERS, DEFAULT_MAX_ITERATIONS, SolverConfig, StrategyKind};
pub use driver::{DriverState, Outcome, Solver, Termination};
pub use strategy::{ExecutionStrategy, ParallelMap, Scheduled, Sequential, split_chunks};

pub use input::{blob_points, parse_points, parse_seeds, uniform_points};
