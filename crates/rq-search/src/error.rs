//! Search-subsystem error type.

use thiserror::Error;

use rq_core::NodeId;
use rq_cost::CostError;

/// Errors produced by `rq-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("edge weight failed: {0}")]
    Cost(#[from] CostError),
}

pub type SearchResult<T> = Result<T, SearchError>;
