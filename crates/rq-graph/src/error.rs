//! Graph-subsystem error type.

use thiserror::Error;

use rq_core::{EdgeId, NodeId};

/// Errors produced by `rq-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("edge {0} not found in graph")]
    UnknownEdge(EdgeId),

    #[error("invalid direction {0:?}: expected \"incoming\", \"outgoing\" or \"either\"")]
    InvalidDirection(String),

    #[error("node {node} has {count} outgoing edges; the action set addresses at most 4")]
    TooManyExits { node: NodeId, count: usize },

    #[error("edge {edge} has non-finite or negative length {length}")]
    BadEdgeLength { edge: EdgeId, length: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
