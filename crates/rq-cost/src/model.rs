//! The cost model: distance and time over edge sequences.

use rustc_hash::{FxHashMap, FxHashSet};

use rq_core::{EdgeId, NodeId};
use rq_graph::RoadGraph;

use crate::{CostError, CostMode, CostResult};

/// One signal shared by a set of junction nodes.
///
/// A route is charged the group's delay when it *enters* the group: whenever
/// an edge ends inside the group and the previous edge did not.  Consecutive
/// in-group nodes are one stop; leaving and coming back is a new stop.
struct LightGroup {
    nodes: FxHashSet<NodeId>,
    delay_min: f64,
}

/// Route cost oracle: validated congestion and traffic-light configuration
/// plus the evaluation mode.  Read-only after construction.
pub struct CostModel {
    mode: CostMode,
    travel_speed_kmh: f64,
    congestion_min: FxHashMap<EdgeId, f64>,
    light_groups: Vec<LightGroup>,
}

impl CostModel {
    /// Validate the configuration against `graph` and build the model.
    ///
    /// Fails if any congestion entry names an edge outside the graph, any
    /// light group names a node outside the graph, the travel speed is not
    /// positive, or any delay is negative.
    pub fn new(
        graph: &RoadGraph,
        mode: CostMode,
        travel_speed_kmh: f64,
        congestion: &[(EdgeId, f64)],
        lights: &[(Vec<NodeId>, f64)],
    ) -> CostResult<Self> {
        if !travel_speed_kmh.is_finite() || travel_speed_kmh <= 0.0 {
            return Err(CostError::BadSpeed(travel_speed_kmh));
        }

        let mut congestion_min =
            FxHashMap::with_capacity_and_hasher(congestion.len(), Default::default());
        for &(edge, delay) in congestion {
            if !graph.contains_edge(edge) {
                return Err(CostError::UnknownEdge(edge));
            }
            if !delay.is_finite() || delay < 0.0 {
                return Err(CostError::BadDelay(delay));
            }
            congestion_min.insert(edge, delay);
        }

        let mut light_groups = Vec::with_capacity(lights.len());
        for (members, delay) in lights {
            for &node in members {
                if !graph.contains_node(node) {
                    return Err(CostError::UnknownNode(node));
                }
            }
            if !delay.is_finite() || *delay < 0.0 {
                return Err(CostError::BadDelay(*delay));
            }
            light_groups.push(LightGroup {
                nodes: members.iter().copied().collect(),
                delay_min: *delay,
            });
        }

        Ok(Self { mode, travel_speed_kmh, congestion_min, light_groups })
    }

    pub fn mode(&self) -> CostMode {
        self.mode
    }

    /// Total length of the edge sequence in metres.
    ///
    /// Purely additive over sequence order; a single edge is the one-element
    /// sequence.
    pub fn distance(&self, graph: &RoadGraph, edges: &[EdgeId]) -> CostResult<f64> {
        let mut total = 0.0;
        for &edge in edges {
            if !graph.contains_edge(edge) {
                return Err(CostError::UnknownEdge(edge));
            }
            total += graph.edge_length_m[edge.index()];
        }
        Ok(total)
    }

    /// Travel time of the edge sequence in minutes.
    ///
    /// Base time is `distance / 1000 / speed * 60` (km over km/h, in
    /// minutes).  On top of that, in sequence order:
    ///
    /// - every array position whose edge is congested adds that edge's
    ///   delay — a looping route pays for the same jam each pass;
    /// - every light group adds its delay when the route enters it, i.e.
    ///   the edge ends on a group node and the previous edge did not.
    ///
    /// Entry charging makes `time` order-sensitive: it is generally not
    /// invariant under reversing the sequence, unlike `distance`.
    pub fn time(&self, graph: &RoadGraph, edges: &[EdgeId]) -> CostResult<f64> {
        let mut total = (self.distance(graph, edges)? / 1000.0) / self.travel_speed_kmh * 60.0;

        let mut prev_end: Option<NodeId> = None;
        for &edge in edges {
            if let Some(delay) = self.congestion_min.get(&edge) {
                total += delay;
            }

            let current_end = graph.edge_to[edge.index()];
            for group in &self.light_groups {
                let entered = group.nodes.contains(&current_end)
                    && prev_end.is_none_or(|p| !group.nodes.contains(&p));
                if entered {
                    total += group.delay_min;
                }
            }
            prev_end = Some(current_end);
        }

        Ok(total)
    }

    /// The active cost of the sequence: metres or minutes depending on mode.
    pub fn route_cost(&self, graph: &RoadGraph, edges: &[EdgeId]) -> CostResult<f64> {
        match self.mode {
            CostMode::Distance => self.distance(graph, edges),
            CostMode::Time => self.time(graph, edges),
        }
    }

    /// Cost of a single edge as a one-element sequence.  This is the edge
    /// weight the baseline search relaxes with.
    #[inline]
    pub fn edge_cost(&self, graph: &RoadGraph, edge: EdgeId) -> CostResult<f64> {
        self.route_cost(graph, std::slice::from_ref(&edge))
    }
}
