//! `rq-core` — foundational types for the `routeq` route-learning engine.
//!
//! This crate is a dependency of every other `rq-*` crate.  It intentionally
//! has no `rq-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`                           |
//! | [`point`]   | `Point`, planar distance and bearing         |
//! | [`rng`]     | `TrainRng` (deterministic, per-run)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EdgeId, NodeId};
pub use point::Point;
pub use rng::TrainRng;
