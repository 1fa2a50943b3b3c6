//! `rq-cost` — the shared route-cost oracle.
//!
//! # Crate layout
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`mode`]  | `CostMode` — distance vs. time evaluation           |
//! | [`model`] | `CostModel` — congestion + traffic-light penalties  |
//! | [`error`] | `CostError`, `CostResult<T>`                        |
//!
//! # One oracle, two consumers
//!
//! Both the Dijkstra baseline and the RL trainer judge routes through the
//! same [`CostModel`], so their results stay comparable by construction.
//! The model is read-only after [`CostModel::new`] validates the
//! configuration against the graph; share it freely across sequential runs.

pub mod error;
pub mod mode;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CostError, CostResult};
pub use mode::CostMode;
pub use model::CostModel;
