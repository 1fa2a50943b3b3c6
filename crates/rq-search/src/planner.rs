//! Planner trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers reach the baseline through the [`RoutePlanner`] trait, so a
//! different reference algorithm (A*, contraction hierarchies) can be
//! swapped in without touching the comparison harness.  The default
//! [`DijkstraPlanner`] is all the engine needs.
//!
//! # Edge weights
//!
//! Each edge's weight is the shared cost oracle applied to that edge as a
//! one-element sequence.  Every edge is judged in isolation: a signal at an
//! edge's end node is always part of that edge's weight, never suppressed
//! by what the search relaxed before it.  Weights are non-negative by the
//! cost model's construction-time validation, which is what makes Dijkstra
//! applicable at all.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rq_core::{EdgeId, NodeId};
use rq_cost::CostModel;
use rq_graph::RoadGraph;

use crate::{SearchError, SearchResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a planning query: the node path, the edge path (one
/// shorter), and the accumulated cost in the oracle's active unit.
#[derive(Debug, Clone)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
    pub total_cost: f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable reference-route search.
pub trait RoutePlanner {
    /// Compute an optimal route from `from` to `to` under the oracle's
    /// active cost mode.
    fn plan(
        &self,
        graph: &RoadGraph,
        cost: &CostModel,
        from: NodeId,
        to: NodeId,
    ) -> SearchResult<Route>;
}

// ── DijkstraPlanner ───────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph.
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn plan(
        &self,
        graph: &RoadGraph,
        cost: &CostModel,
        from: NodeId,
        to: NodeId,
    ) -> SearchResult<Route> {
        dijkstra(graph, cost, from, to)
    }
}

// ── Frontier ordering ─────────────────────────────────────────────────────────

/// Heap entry ordered by accumulated cost, then by node ID so equal-cost
/// pops are deterministic.
#[derive(PartialEq)]
struct FrontierEntry {
    cost: f64,
    node: NodeId,
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(
    graph: &RoadGraph,
    cost: &CostModel,
    from: NodeId,
    to: NodeId,
) -> SearchResult<Route> {
    if !graph.contains_node(from) {
        return Err(SearchError::UnknownNode(from));
    }
    if !graph.contains_node(to) {
        return Err(SearchError::UnknownNode(to));
    }
    if from == to {
        return Ok(Route { nodes: vec![from], edges: vec![], total_cost: 0.0 });
    }

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    // Reverse makes BinaryHeap (max) behave as a min-heap.
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry { cost: 0.0, node: from }));

    while let Some(Reverse(FrontierEntry { cost: node_cost, node })) = frontier.pop() {
        if node == to {
            return Ok(reconstruct(graph, &prev_edge, from, to, node_cost));
        }

        // Skip stale frontier entries.
        if node_cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = node_cost + cost.edge_cost(graph, edge)?;

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                frontier.push(Reverse(FrontierEntry { cost: new_cost, node: neighbor }));
            }
        }
    }

    Err(SearchError::NoRoute { from, to })
}

fn reconstruct(
    graph: &RoadGraph,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
    total_cost: f64,
) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(from);
    for &e in &edges {
        nodes.push(graph.edge_to[e.index()]);
    }

    Route { nodes, edges, total_cost }
}
