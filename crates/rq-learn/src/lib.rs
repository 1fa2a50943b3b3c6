//! `rq-learn` — tabular route learning over a road graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`qtable`]  | `QTable` — (node × action) value table                    |
//! | [`policy`]  | `ActionPolicy` trait, `Greedy`, `EpsilonGreedy`           |
//! | [`reward`]  | Reward-shaping constants                                  |
//! | [`episode`] | `EpisodeLog` — per-episode node/edge trace                |
//! | [`trainer`] | `Trainer<P>` — step / learn / train loop                  |
//! | [`error`]   | `TrainError`, `TrainResult<T>`                            |
//!
//! # Ownership model
//!
//! One [`Trainer`] exclusively owns one [`QTable`] for the lifetime of a
//! run; episodes execute strictly sequentially because each episode's TD
//! updates read the table state left by the previous one.  The graph and
//! cost model are borrowed read-only, so independent trainers (say, greedy
//! and epsilon-greedy back to back) can share them across sequential runs.

pub mod episode;
pub mod error;
pub mod policy;
pub mod qtable;
pub mod reward;
pub mod trainer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use episode::EpisodeLog;
pub use error::{TrainError, TrainResult};
pub use policy::{ActionPolicy, EpsilonGreedy, Greedy};
pub use qtable::QTable;
pub use trainer::{StepOutcome, TrainConfig, TrainReport, Trainer};
