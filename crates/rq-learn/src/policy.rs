//! Action-selection policies.
//!
//! The trainer is fixed; what varies between the classic tabular algorithms
//! here is only how the next action is chosen.  That choice is injected as
//! an [`ActionPolicy`] — swap it at compile time for a different learner
//! with no other change (the same shape as a pluggable routing algorithm).

use rq_core::{NodeId, TrainRng};
use rq_graph::Action;

use crate::{QTable, TrainError, TrainResult};

/// Pluggable action selection.
///
/// One operation: given the current node and the value table, pick an
/// action from the fixed slot set.  Validity is *not* this trait's concern —
/// an unavailable pick is punished by the trainer's step function, which is
/// itself a learning signal.
pub trait ActionPolicy {
    fn select(&self, state: NodeId, table: &QTable, rng: &mut TrainRng) -> Action;
}

// ── Greedy ────────────────────────────────────────────────────────────────────

/// Pure exploitation: always the stable argmax of the state's row.
///
/// With a zero-initialised table this still wanders early on — penalties
/// push bad slots below zero, which is the only exploration this policy
/// ever gets.
pub struct Greedy;

impl ActionPolicy for Greedy {
    fn select(&self, state: NodeId, table: &QTable, _rng: &mut TrainRng) -> Action {
        table.greedy_action(state)
    }
}

// ── EpsilonGreedy ─────────────────────────────────────────────────────────────

/// Epsilon-greedy: with probability ε a uniform pick from the whole action
/// set (ignoring validity), otherwise the greedy choice.
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Fails unless `epsilon` is within [0, 1].
    pub fn new(epsilon: f64) -> TrainResult<Self> {
        if !epsilon.is_finite() || !(0.0..=1.0).contains(&epsilon) {
            return Err(TrainError::BadExplorationRate(epsilon));
        }
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl ActionPolicy for EpsilonGreedy {
    fn select(&self, state: NodeId, table: &QTable, rng: &mut TrainRng) -> Action {
        if rng.gen_bool(self.epsilon) {
            Action(rng.gen_range(0..Action::COUNT as u8))
        } else {
            table.greedy_action(state)
        }
    }
}
