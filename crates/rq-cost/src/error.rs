//! Cost-subsystem error type.

use thiserror::Error;

use rq_core::{EdgeId, NodeId};

/// Errors produced by `rq-cost`.
#[derive(Debug, Error)]
pub enum CostError {
    #[error("edge {0} not found in graph")]
    UnknownEdge(EdgeId),

    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("invalid evaluation mode {0:?}: expected \"distance\" or \"time\"")]
    InvalidMode(String),

    #[error("travel speed must be a positive finite km/h value, got {0}")]
    BadSpeed(f64),

    #[error("penalty delays must be non-negative finite minutes, got {0}")]
    BadDelay(f64),
}

pub type CostResult<T> = Result<T, CostError>;
