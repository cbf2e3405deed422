use std::sync::Arc;

use serde::Serialize;

use crate::geometry::ClusterAggregate;

/// Convergence state machine
#[derive(Debug, Clone)]
pub enum DriverState {
    Running {
        iteration: usize,
        clusters: Arc<[ClusterAggregate]>,
    },
    /// Recomputing produced the same cluster set
    Converged {
        iteration: usize,
        clusters: Arc<[ClusterAggregate]>,
    },
    /// Iteration cap reached; holds the input of the last evaluation
    GaveUp {
        iteration: usize,
        clusters: Arc<[ClusterAggregate]>,
    },
}

impl DriverState {
    pub fn initial(seeds: Vec<ClusterAggregate>) -> Self {
        DriverState::Running {
            iteration: 0,
            clusters: Arc::from(seeds),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DriverState::Running { .. })
    }

    pub fn clusters(&self) -> &[ClusterAggregate] {
        match self {
            DriverState::Running { clusters, .. }
            | DriverState::Converged { clusters, .. }
            | DriverState::GaveUp { clusters, .. } => &clusters[..],
        }
    }

    /// Final result, or `None` while still running
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            DriverState::Running { .. } => None,
            DriverState::Converged {
                iteration,
                clusters,
            } => Some(Outcome {
                termination: Termination::Converged,
                iterations: *iteration,
                clusters: clusters.to_vec(),
            }),
            DriverState::GaveUp {
                iteration,
                clusters,
            } => Some(Outcome {
                termination: Termination::GaveUp,
                iterations: *iteration,
                clusters: clusters.to_vec(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    Converged,
    GaveUp,
}

/// Terminal value of a run
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub termination: Termination,
    /// Completed update steps; one less than the number of evaluations
    pub iterations: usize,
    pub clusters: Vec<ClusterAggregate>,
}

impl Outcome {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
