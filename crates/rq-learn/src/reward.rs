//! Reward-shaping constants.
//!
//! Values are on a common scale so a single bad move (invalid pick,
//! dead-end) outweighs the completion reward of a sloppy route, while the
//! loop penalty is softer: a revisited transition can still be part of the
//! only way home on some graphs.

/// Picking an action slot with no edge at the current node.
pub const INVALID_ACTION: f64 = -50.0;

/// Stepping into a node with no outgoing edges.  Also applied retroactively
/// to every transition of the unbranched tail that led there.
pub const DEAD_END: f64 = -50.0;

/// Repeating an edge-to-edge transition already made this episode.
pub const LOOP: f64 = -30.0;

/// Reaching the configured end node.
pub const COMPLETION: f64 = 50.0;

/// Retroactive bonus for every transition of a route that beats the best
/// completed cost seen so far in the run.
pub const BEST_ROUTE_BONUS: f64 = 50.0;

/// An ordinary forward move.
pub const CONTINUE: f64 = 0.0;
