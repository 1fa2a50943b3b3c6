//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its outgoing edges occupy the contiguous `EdgeId` range:
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`, `edge_label`)
//! are sorted by source node and indexed by `EdgeId`.  A second CSR index
//! (`node_in_start` / `in_edges`) answers incoming-incidence queries, which
//! the engine needs for `Direction::Incoming` and `Direction::Either`.
//!
//! # Labels
//!
//! `build()` assigns every edge its directional label (see the crate docs)
//! and rejects any node with more than [`Action::COUNT`] outgoing edges:
//! a fifth exit could never be selected by any policy, so such graphs fail
//! fast instead of carrying unreachable roads.

use rq_core::{EdgeId, NodeId, Point};

use crate::{Action, Direction, GraphError, GraphResult, Side};

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Directed road graph in CSR format with precomputed action labels.
///
/// Immutable after construction; build via [`RoadGraphBuilder`].  Fields are
/// `pub` for direct indexed access on hot paths.
#[derive(Debug)]
pub struct RoadGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Planar position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Point>,

    // ── CSR outgoing adjacency ────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in metres.
    pub edge_length_m: Vec<f64>,

    /// Directional label of each edge among its source node's exits.
    pub edge_label: Vec<Action>,

    // ── CSR incoming index ────────────────────────────────────────────────
    /// CSR row pointer into `in_edges`.  Length = `node_count + 1`.
    node_in_start: Vec<u32>,

    /// Edge IDs grouped by destination node, ascending within each group.
    in_edges: Vec<EdgeId>,
}

impl RoadGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    #[inline]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edge_count()
    }

    // ── Unchecked traversal (hot paths) ───────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.  `node` must
    /// be in the graph; use [`incident_edges`](Self::incident_edges) for the
    /// checked query.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Incidence queries ─────────────────────────────────────────────────

    /// All edges touching `node` in the given direction.
    ///
    /// `Either` returns incoming edges followed by outgoing edges.
    pub fn incident_edges(&self, node: NodeId, direction: Direction) -> GraphResult<Vec<EdgeId>> {
        if !self.contains_node(node) {
            return Err(GraphError::UnknownNode(node));
        }
        let incoming = || {
            let start = self.node_in_start[node.index()] as usize;
            let end = self.node_in_start[node.index() + 1] as usize;
            self.in_edges[start..end].iter().copied()
        };
        Ok(match direction {
            Direction::Incoming => incoming().collect(),
            Direction::Outgoing => self.out_edges(node).collect(),
            Direction::Either => incoming().chain(self.out_edges(node)).collect(),
        })
    }

    /// The start or end node of `edge`.
    pub fn endpoint(&self, edge: EdgeId, side: Side) -> GraphResult<NodeId> {
        if !self.contains_edge(edge) {
            return Err(GraphError::UnknownEdge(edge));
        }
        Ok(match side {
            Side::Start => self.edge_from[edge.index()],
            Side::End => self.edge_to[edge.index()],
        })
    }

    /// First edge from `from` to `to`, if any.  Intended for configuration
    /// code that needs to name an edge (e.g. a congestion table entry).
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        if !self.contains_node(from) || !self.contains_node(to) {
            return None;
        }
        self.out_edges(from).find(|&e| self.edge_to[e.index()] == to)
    }

    // ── Action labeling ───────────────────────────────────────────────────

    /// The directional label of `edge`, precomputed at build time.
    pub fn action_label(&self, edge: EdgeId) -> GraphResult<Action> {
        if !self.contains_edge(edge) {
            return Err(GraphError::UnknownEdge(edge));
        }
        Ok(self.edge_label[edge.index()])
    }

    /// The subset of the fixed action set present among `edges`' labels,
    /// in ascending slot order.
    pub fn available_actions(&self, edges: &[EdgeId]) -> GraphResult<Vec<Action>> {
        let mut present = [false; Action::COUNT];
        for &edge in edges {
            present[self.action_label(edge)?.index()] = true;
        }
        Ok(Action::ALL
            .into_iter()
            .filter(|a| present[a.index()])
            .collect())
    }

    /// The edge among `edges` whose label equals `action`, or `None`.
    ///
    /// Caller contract: `edges` is the outgoing set of a single node.
    /// Labels are only unique within one node's exits, so mixing edges from
    /// several nodes makes the answer arbitrary (first match wins).
    pub fn edge_for_action(&self, edges: &[EdgeId], action: Action) -> GraphResult<Option<EdgeId>> {
        for &edge in edges {
            if self.action_label(edge)? == action {
                return Ok(Some(edge));
            }
        }
        Ok(None)
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// This is the boundary to the network provider: whatever parsed the map
/// format feeds nodes and directed edges in here, in any order.  `build()`
/// sorts edges by source node, constructs both CSR indices, and assigns the
/// directional labels.
///
/// # Example
///
/// ```
/// use rq_core::Point;
/// use rq_graph::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// let a = b.add_node(Point::new(0.0, 0.0));
/// let c = b.add_node(Point::new(100.0, 0.0));
/// b.add_road(a, c, 100.0); // both directions
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct RoadGraphBuilder {
    nodes: Vec<Point>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    length_m: f64,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading a parsed network.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Point) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to` with length in metres.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length_m: f64) {
        self.raw_edges.push(RawEdge { from, to, length_m });
    }

    /// Convenience: add edges in **both directions** for a two-way road.
    /// The two directions are distinct edges with distinct IDs and labels.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f64) {
        self.add_edge(a, b, length_m);
        self.add_edge(b, a, length_m);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Fails if any edge references a node that was never added, has a
    /// non-finite or negative length, or if a node ends up with more
    /// outgoing edges than the action set can address.
    pub fn build(self) -> GraphResult<RoadGraph> {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.  The sort is
        // stable so parallel edges keep their insertion order, which keeps
        // EdgeId assignment deterministic.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        for (i, e) in raw.iter().enumerate() {
            let edge = EdgeId(i as u32);
            if e.from.index() >= node_count {
                return Err(GraphError::UnknownNode(e.from));
            }
            if e.to.index() >= node_count {
                return Err(GraphError::UnknownNode(e.to));
            }
            if !e.length_m.is_finite() || e.length_m < 0.0 {
                return Err(GraphError::BadEdgeLength { edge, length: e.length_m });
            }
        }

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f64> = raw.iter().map(|e| e.length_m).collect();

        // Build the outgoing CSR row pointer.
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Build the incoming CSR index: edge IDs grouped by destination.
        let mut node_in_start = vec![0u32; node_count + 1];
        for to in &edge_to {
            node_in_start[to.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_in_start[i] += node_in_start[i - 1];
        }
        let mut in_edges = vec![EdgeId::INVALID; edge_count];
        let mut cursor: Vec<u32> = node_in_start[..node_count].to_vec();
        for (i, to) in edge_to.iter().enumerate() {
            let slot = cursor[to.index()] as usize;
            in_edges[slot] = EdgeId(i as u32);
            cursor[to.index()] += 1;
        }

        let edge_label = assign_labels(
            &self.nodes,
            &node_out_start,
            &edge_to,
        )?;

        Ok(RoadGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            edge_label,
            node_in_start,
            in_edges,
        })
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Label assignment ──────────────────────────────────────────────────────────

/// Rank every node's outgoing edges by exit angle and assign labels.
///
/// Sort key: non-negative angles first (ascending: east → north → west),
/// then negative angles (ascending: south back toward east).  The 0-based
/// rank in this order is the edge's label.
fn assign_labels(
    node_pos: &[Point],
    node_out_start: &[u32],
    edge_to: &[NodeId],
) -> GraphResult<Vec<Action>> {
    let mut labels = vec![Action(0); edge_to.len()];

    for (n, pos) in node_pos.iter().enumerate() {
        let start = node_out_start[n] as usize;
        let end = node_out_start[n + 1] as usize;
        if start == end {
            continue;
        }
        if end - start > Action::COUNT {
            return Err(GraphError::TooManyExits {
                node: NodeId(n as u32),
                count: end - start,
            });
        }

        let mut ranked: Vec<(usize, f64)> = (start..end)
            .map(|e| (e, pos.bearing_deg(node_pos[edge_to[e].index()])))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| {
            (a < &0.0)
                .cmp(&(b < &0.0))
                .then_with(|| a.total_cmp(b))
        });

        for (rank, (e, _)) in ranked.into_iter().enumerate() {
            labels[e] = Action(rank as u8);
        }
    }

    Ok(labels)
}
