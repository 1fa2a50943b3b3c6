//! The training loop: step, TD update, convergence detection.

use std::time::Instant;

use log::{debug, info};

use rq_core::{EdgeId, NodeId, TrainRng};
use rq_cost::CostModel;
use rq_graph::{Action, Direction, RoadGraph, Side};

use crate::{reward, ActionPolicy, EpisodeLog, QTable, TrainError, TrainResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Learning-rate and discount parameters.
#[derive(Copy, Clone, Debug)]
pub struct TrainConfig {
    /// TD step size α.  Must be positive and finite.
    pub learning_rate: f64,
    /// Future-value discount γ.  Must be within [0, 1].
    pub discount_factor: f64,
}

impl Default for TrainConfig {
    /// The engine's stock parameters: aggressive updates, short horizon.
    fn default() -> Self {
        Self { learning_rate: 0.9, discount_factor: 0.1 }
    }
}

impl TrainConfig {
    fn validate(&self) -> TrainResult<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TrainError::BadLearningRate(self.learning_rate));
        }
        if !self.discount_factor.is_finite() || !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(TrainError::BadDiscountFactor(self.discount_factor));
        }
        Ok(())
    }
}

// ── Step outcome ──────────────────────────────────────────────────────────────

/// What one environment step produced.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Edge traversed, or the unchanged previous edge on an invalid pick
    /// (`None` only when an invalid pick happens on the very first move).
    pub next_edge: Option<EdgeId>,
    /// Node after the step; equals the current node on an invalid pick.
    pub next_node: NodeId,
    pub reward: f64,
    pub terminal: bool,
}

// ── Training result ───────────────────────────────────────────────────────────

/// A converged training run.
#[derive(Clone, Debug)]
pub struct TrainReport {
    /// The route the run settled on.
    pub node_path: Vec<NodeId>,
    pub edge_path: Vec<EdgeId>,
    /// Episode index at which convergence fired.
    pub converged_episode: usize,
    /// Every episode's trace, in order, for cost-series reporting.
    pub episodes: Vec<EpisodeLog>,
}

// ── Trainer ───────────────────────────────────────────────────────────────────

/// Tabular trainer over a borrowed graph and cost oracle.
///
/// The trainer owns its [`QTable`], episode history, RNG stream, and
/// best-completed-cost marker; the policy `P` only chooses actions.
/// Construct one trainer per run — the table is never shared.
pub struct Trainer<'a, P: ActionPolicy> {
    graph: &'a RoadGraph,
    cost: &'a CostModel,
    policy: P,
    config: TrainConfig,
    start: NodeId,
    end: NodeId,
    table: QTable,
    episodes: Vec<EpisodeLog>,
    /// Lowest completed-route cost seen this run.  `None` until the first
    /// completion — an explicit unset marker, so a genuine zero-cost route
    /// is still a valid best.
    best_cost: Option<f64>,
    rng: TrainRng,
}

impl<'a, P: ActionPolicy> Trainer<'a, P> {
    /// Validate the configuration and endpoints and build a trainer.
    pub fn new(
        graph: &'a RoadGraph,
        cost: &'a CostModel,
        policy: P,
        config: TrainConfig,
        start: NodeId,
        end: NodeId,
        rng: TrainRng,
    ) -> TrainResult<Self> {
        config.validate()?;
        if !graph.contains_node(start) {
            return Err(TrainError::UnknownNode(start));
        }
        if !graph.contains_node(end) {
            return Err(TrainError::UnknownNode(end));
        }
        Ok(Self {
            graph,
            cost,
            policy,
            config,
            start,
            end,
            table: QTable::new(graph.node_count()),
            episodes: Vec::new(),
            best_cost: None,
            rng,
        })
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    /// Lowest completed-route cost observed so far, if any route completed.
    pub fn best_cost(&self) -> Option<f64> {
        self.best_cost
    }

    /// Episode traces recorded so far this run.
    pub fn episodes(&self) -> &[EpisodeLog] {
        &self.episodes
    }

    // ── Environment step ──────────────────────────────────────────────────

    /// Apply `action` from the tip of `node_path` / `edge_path`.
    ///
    /// The paths are the episode so far: `node_path` is never empty and
    /// `edge_path` is one shorter.  Mutates the Q-table directly in two
    /// cases that bypass the TD update: the retroactive best-route bonus
    /// and the dead-end tail penalty.
    pub fn step(
        &mut self,
        action: Action,
        node_path: &[NodeId],
        edge_path: &[EdgeId],
    ) -> TrainResult<StepOutcome> {
        let current = node_path[node_path.len() - 1];
        let current_edge = edge_path.last().copied();
        let outgoing = self.graph.incident_edges(current, Direction::Outgoing)?;

        let mut reward = reward::CONTINUE;

        // Invalid pick: penalise and stay put.  The episode continues — the
        // self-loop TD update is what teaches the policy not to repeat it.
        let Some(next_edge) = self.graph.edge_for_action(&outgoing, action)? else {
            reward += reward::INVALID_ACTION;
            return Ok(StepOutcome {
                next_edge: current_edge,
                next_node: current,
                reward,
                terminal: false,
            });
        };
        let next_node = self.graph.endpoint(next_edge, Side::End)?;

        // Completion: judge the whole route through the shared cost oracle
        // and propagate the bonus if it beats the best run so far.
        if next_node == self.end {
            reward += reward::COMPLETION;

            let mut route = edge_path.to_vec();
            route.push(next_edge);
            let route_cost = self.cost.route_cost(self.graph, &route)?;

            match self.best_cost {
                None => self.best_cost = Some(route_cost),
                Some(best) if route_cost < best => {
                    for &edge in edge_path {
                        let state = self.graph.endpoint(edge, Side::Start)?;
                        let label = self.graph.action_label(edge)?;
                        self.table.add(state, label, reward::BEST_ROUTE_BONUS);
                    }
                    debug!("new best route: {route_cost:.3} (was {best:.3})");
                    self.best_cost = Some(route_cost);
                }
                Some(_) => {}
            }

            return Ok(StepOutcome {
                next_edge: Some(next_edge),
                next_node,
                reward,
                terminal: true,
            });
        }

        // Dead end: penalise the unbranched tail that funnelled us here.
        // Walking backward, the first edge ending at a node with another
        // exit is where an alternative existed — everything at or before
        // that point keeps its value.
        if self.graph.out_degree(next_node) == 0 {
            reward += reward::DEAD_END;

            for &edge in edge_path.iter().rev() {
                if self.graph.out_degree(self.graph.endpoint(edge, Side::End)?) > 1 {
                    break;
                }
                let state = self.graph.endpoint(edge, Side::Start)?;
                let label = self.graph.action_label(edge)?;
                self.table.add(state, label, reward::DEAD_END);
            }

            return Ok(StepOutcome {
                next_edge: Some(next_edge),
                next_node,
                reward,
                terminal: true,
            });
        }

        // Ordinary move; penalise a repeated edge-to-edge transition.
        if let Some(current_edge) = current_edge {
            let repeated = edge_path
                .windows(2)
                .any(|pair| pair[0] == current_edge && pair[1] == next_edge);
            if repeated {
                reward += reward::LOOP;
            }
        }

        Ok(StepOutcome {
            next_edge: Some(next_edge),
            next_node,
            reward,
            terminal: false,
        })
    }

    // ── TD update ─────────────────────────────────────────────────────────

    /// One-step temporal-difference update:
    /// `Q[s,a] += α · (r + γ · max_a' Q[s',a'] − Q[s,a])`.
    pub fn learn(&mut self, state: NodeId, action: Action, next_state: NodeId, reward: f64) {
        let predict = self.table.get(state, action);
        let target = reward + self.config.discount_factor * self.table.max_value(next_state);
        self.table
            .add(state, action, self.config.learning_rate * (target - predict));
    }

    // ── Training loop ─────────────────────────────────────────────────────

    /// Run episodes until the route stabilises.
    ///
    /// Converges when the episode index exceeds `convergence_threshold`,
    /// the latest episode ended at the end node, and the last
    /// `convergence_threshold` episodes produced identical node paths.
    /// Exhausting `max_episodes` without converging is fatal
    /// ([`TrainError::NonConvergence`]) — there is no partial result.
    pub fn train(
        &mut self,
        max_episodes: usize,
        convergence_threshold: usize,
    ) -> TrainResult<TrainReport> {
        if max_episodes == 0 {
            return Err(TrainError::BadEpisodeBudget);
        }
        if convergence_threshold == 0 {
            return Err(TrainError::BadConvergenceThreshold);
        }

        let started = Instant::now();
        self.table.reset();
        self.episodes.clear();
        self.best_cost = None;
        info!(
            "training {} -> {}: budget {max_episodes} episodes, window {convergence_threshold}",
            self.start, self.end
        );

        for episode in 0..max_episodes {
            let mut node_path = vec![self.start];
            let mut edge_path: Vec<EdgeId> = Vec::new();
            let mut terminal = false;

            loop {
                let state = node_path[node_path.len() - 1];
                if terminal || state == self.end {
                    break;
                }

                let action = self.policy.select(state, &self.table, &mut self.rng);
                let outcome = self.step(action, &node_path, &edge_path)?;
                self.learn(state, action, outcome.next_node, outcome.reward);

                // Only a real move extends the paths; an invalid pick
                // leaves the episode where it stood.
                if outcome.next_node != state {
                    if let Some(edge) = outcome.next_edge {
                        edge_path.push(edge);
                    }
                    node_path.push(outcome.next_node);
                }
                terminal = outcome.terminal;
            }

            debug!(
                "episode {episode}: {} nodes, ended at {}",
                node_path.len(),
                node_path[node_path.len() - 1]
            );
            self.episodes.push(EpisodeLog { nodes: node_path, edges: edge_path });

            let finished_at_end =
                self.episodes[episode].nodes.last() == Some(&self.end);
            if episode > convergence_threshold
                && finished_at_end
                && recent_paths_identical(&self.episodes, convergence_threshold)
            {
                let last = &self.episodes[episode];
                info!(
                    "converged at episode {episode} in {:.3} s: {} nodes",
                    started.elapsed().as_secs_f64(),
                    last.nodes.len()
                );
                return Ok(TrainReport {
                    node_path: last.nodes.clone(),
                    edge_path: last.edges.clone(),
                    converged_episode: episode,
                    episodes: self.episodes.clone(),
                });
            }
        }

        Err(TrainError::NonConvergence { max_episodes })
    }
}

// ── Convergence window ────────────────────────────────────────────────────────

/// `true` when the last `window` episodes produced identical node paths.
///
/// One differing episode anywhere in the window blocks convergence.
pub(crate) fn recent_paths_identical(episodes: &[EpisodeLog], window: usize) -> bool {
    if episodes.len() < window {
        return false;
    }
    let recent = &episodes[episodes.len() - window..];
    recent.iter().all(|log| log.nodes == recent[0].nodes)
}
