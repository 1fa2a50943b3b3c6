//! `rq-graph` — road graph, incidence queries, and action labeling.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`graph`]     | `RoadGraph`, `RoadGraphBuilder` — CSR adjacency + labels |
//! | [`action`]    | `Action` — the fixed 4-slot directional action set       |
//! | [`direction`] | `Direction`, `Side` — incidence/endpoint query selectors |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                           |
//!
//! # Action labeling
//!
//! Every edge gets a **label** in {0, 1, 2, 3}: the rank of its exit angle
//! among its source node's outgoing edges, computed once at build time.
//! Non-negative angles sort first (east through north to west), then
//! negative angles (south back toward east), so label 0 is roughly "the
//! rightmost exit".  The ordering is local to each node — the same label at
//! two different nodes has no shared compass meaning.  Policies act on
//! labels, never on edge IDs, which is what keeps the action space fixed at
//! four slots regardless of graph shape.

pub mod action;
pub mod direction;
pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use direction::{Direction, Side};
pub use error::{GraphError, GraphResult};
pub use graph::{RoadGraph, RoadGraphBuilder};
