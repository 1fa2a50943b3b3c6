//! Training-subsystem error type.

use thiserror::Error;

use rq_core::NodeId;
use rq_cost::CostError;
use rq_graph::GraphError;

/// Errors produced by `rq-learn`.
#[derive(Debug, Error)]
pub enum TrainError {
    #[error("training failed to converge within {max_episodes} episodes")]
    NonConvergence { max_episodes: usize },

    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("learning rate must be positive and finite, got {0}")]
    BadLearningRate(f64),

    #[error("discount factor must be within [0, 1], got {0}")]
    BadDiscountFactor(f64),

    #[error("exploration rate must be within [0, 1], got {0}")]
    BadExplorationRate(f64),

    #[error("episode budget must be at least 1")]
    BadEpisodeBudget,

    #[error("convergence threshold must be at least 1")]
    BadConvergenceThreshold,

    #[error("graph query failed: {0}")]
    Graph(#[from] GraphError),

    #[error("route cost failed: {0}")]
    Cost(#[from] CostError),
}

pub type TrainResult<T> = Result<T, TrainError>;
