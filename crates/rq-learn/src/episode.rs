//! Per-episode route trace.

use rq_core::{EdgeId, NodeId};

/// The ordered nodes visited and edges traversed in one episode.
///
/// `edges` is always one shorter than `nodes`.  Created once when the
/// episode ends and never mutated; the trainer retains every episode's log
/// for the life of the run so convergence can look back over recent routes
/// and callers can chart per-episode cost series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeLog {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}
