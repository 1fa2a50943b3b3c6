//! Unit tests for rq-graph.
//!
//! All tests use hand-crafted planar networks so label expectations can be
//! worked out by eye.

#[cfg(test)]
mod helpers {
    use rq_core::{NodeId, Point};

    use crate::{RoadGraph, RoadGraphBuilder};

    /// A cross junction: center node 0 with arms east/north/west/south.
    ///
    /// ```text
    ///        2 (0,100)
    ///        |
    /// 3 ---- 0 ---- 1 (100,0)
    /// (-100,0)
    ///        |
    ///        4 (0,-100)
    /// ```
    ///
    /// All roads are two-way, 100 m.  From the center the exit angles are
    /// 0° (→1), 90° (→2), 180° (→3), −90° (→4), so the labels at node 0
    /// are east=0, north=1, west=2, south=3.
    pub fn cross() -> (RoadGraph, [NodeId; 5]) {
        let mut b = RoadGraphBuilder::new();
        let center = b.add_node(Point::new(0.0, 0.0));
        let east = b.add_node(Point::new(100.0, 0.0));
        let north = b.add_node(Point::new(0.0, 100.0));
        let west = b.add_node(Point::new(-100.0, 0.0));
        let south = b.add_node(Point::new(0.0, -100.0));
        b.add_road(center, east, 100.0);
        b.add_road(center, north, 100.0);
        b.add_road(center, west, 100.0);
        b.add_road(center, south, 100.0);
        (b.build().unwrap(), [center, east, north, west, south])
    }

    /// A one-way corridor S → B → E used by the trainer scenarios.
    pub fn corridor() -> (RoadGraph, [NodeId; 3]) {
        let mut b = RoadGraphBuilder::new();
        let s = b.add_node(Point::new(0.0, 0.0));
        let m = b.add_node(Point::new(100.0, 0.0));
        let e = b.add_node(Point::new(200.0, 0.0));
        b.add_edge(s, m, 100.0);
        b.add_edge(m, e, 100.0);
        (b.build().unwrap(), [s, m, e])
    }
}

// ── Builder & structure ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rq_core::{NodeId, Point};

    use crate::{GraphError, RoadGraphBuilder};

    #[test]
    fn empty_build() {
        let graph = RoadGraphBuilder::new().build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn two_way_road_is_two_edges() {
        let (graph, _) = super::helpers::cross();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn csr_out_edges_have_correct_source() {
        let (graph, [center, ..]) = super::helpers::cross();
        assert_eq!(graph.out_degree(center), 4);
        for e in graph.out_edges(center) {
            assert_eq!(graph.edge_from[e.index()], center);
        }
    }

    #[test]
    fn edge_to_missing_node_is_rejected() {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0));
        b.add_edge(a, NodeId(9), 10.0);
        assert!(matches!(b.build(), Err(GraphError::UnknownNode(NodeId(9)))));
    }

    #[test]
    fn negative_length_is_rejected() {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0));
        let c = b.add_node(Point::new(1.0, 0.0));
        b.add_edge(a, c, -5.0);
        assert!(matches!(b.build(), Err(GraphError::BadEdgeLength { .. })));
    }

    #[test]
    fn five_exits_are_rejected() {
        let mut b = RoadGraphBuilder::new();
        let hub = b.add_node(Point::new(0.0, 0.0));
        for i in 0..5 {
            let angle = (i as f64) * 72.0_f64.to_radians();
            let spoke = b.add_node(Point::new(angle.cos() * 100.0, angle.sin() * 100.0));
            b.add_edge(hub, spoke, 100.0);
        }
        match b.build() {
            Err(GraphError::TooManyExits { node, count }) => {
                assert_eq!(node, hub);
                assert_eq!(count, 5);
            }
            other => panic!("expected TooManyExits, got {other:?}"),
        }
    }

    #[test]
    fn edge_between_finds_the_directed_edge() {
        let (graph, [center, east, ..]) = super::helpers::cross();
        let out = graph.edge_between(center, east).unwrap();
        assert_eq!(graph.edge_from[out.index()], center);
        assert_eq!(graph.edge_to[out.index()], east);
        assert!(graph.edge_between(east, NodeId(99)).is_none());
    }
}

// ── Action labeling ───────────────────────────────────────────────────────────

#[cfg(test)]
mod labels {
    use rq_core::Point;

    use crate::{Action, RoadGraphBuilder};

    #[test]
    fn cross_labels_follow_angular_sort() {
        let (graph, [center, east, north, west, south]) = super::helpers::cross();
        let label_to = |to| {
            let e = graph.edge_between(center, to).unwrap();
            graph.action_label(e).unwrap()
        };
        assert_eq!(label_to(east), Action(0)); // 0°
        assert_eq!(label_to(north), Action(1)); // 90°
        assert_eq!(label_to(west), Action(2)); // 180°
        assert_eq!(label_to(south), Action(3)); // −90° sorts last
    }

    #[test]
    fn diagonal_exits_wrap_south_to_last() {
        // Exits at 45°, 135°, −135°, −45°: non-negative angles rank first.
        let mut b = RoadGraphBuilder::new();
        let hub = b.add_node(Point::new(0.0, 0.0));
        let ne = b.add_node(Point::new(100.0, 100.0));
        let nw = b.add_node(Point::new(-100.0, 100.0));
        let sw = b.add_node(Point::new(-100.0, -100.0));
        let se = b.add_node(Point::new(100.0, -100.0));
        // Insertion order deliberately scrambled.
        b.add_edge(hub, sw, 141.4);
        b.add_edge(hub, ne, 141.4);
        b.add_edge(hub, se, 141.4);
        b.add_edge(hub, nw, 141.4);
        let graph = b.build().unwrap();

        let label_to = |to| {
            let e = graph.edge_between(hub, to).unwrap();
            graph.action_label(e).unwrap()
        };
        assert_eq!(label_to(ne), Action(0)); // 45°
        assert_eq!(label_to(nw), Action(1)); // 135°
        assert_eq!(label_to(sw), Action(2)); // −135°
        assert_eq!(label_to(se), Action(3)); // −45°
    }

    #[test]
    fn labels_are_a_bijection_onto_a_prefix() {
        let (graph, nodes) = super::helpers::cross();
        for node in nodes {
            let degree = graph.out_degree(node);
            let mut seen = vec![false; degree];
            for e in graph.out_edges(node) {
                let label = graph.action_label(e).unwrap();
                assert!(label.index() < degree, "label {label} out of prefix");
                assert!(!seen[label.index()], "duplicate label {label} at {node}");
                seen[label.index()] = true;
            }
        }
    }

    #[test]
    fn labels_are_local_to_each_node() {
        // Both edges below point due west (180°), but the label depends on
        // the source node: the east arm has a single exit (rank 0) while at
        // the center the west exit ranks behind east and north.
        let (graph, [center, east, _, west, _]) = super::helpers::cross();
        let east_back = graph.edge_between(east, center).unwrap();
        let center_west = graph.edge_between(center, west).unwrap();
        assert_eq!(graph.action_label(east_back).unwrap(), Action(0));
        assert_eq!(graph.action_label(center_west).unwrap(), Action(2));
    }
}

// ── Incidence and endpoints ───────────────────────────────────────────────────

#[cfg(test)]
mod incidence {
    use std::str::FromStr;

    use rq_core::{EdgeId, NodeId};

    use crate::{Direction, GraphError, Side};

    #[test]
    fn outgoing_and_incoming_split() {
        let (graph, [center, ..]) = super::helpers::cross();
        let outgoing = graph.incident_edges(center, Direction::Outgoing).unwrap();
        let incoming = graph.incident_edges(center, Direction::Incoming).unwrap();
        assert_eq!(outgoing.len(), 4);
        assert_eq!(incoming.len(), 4);
        for e in outgoing {
            assert_eq!(graph.edge_from[e.index()], center);
        }
        for e in incoming {
            assert_eq!(graph.edge_to[e.index()], center);
        }
    }

    #[test]
    fn either_is_incoming_then_outgoing() {
        let (graph, [_, east, ..]) = super::helpers::cross();
        let either = graph.incident_edges(east, Direction::Either).unwrap();
        assert_eq!(either.len(), 2);
        assert_eq!(graph.edge_to[either[0].index()], east); // incoming first
        assert_eq!(graph.edge_from[either[1].index()], east); // then outgoing
    }

    #[test]
    fn unknown_node_is_an_error() {
        let (graph, _) = super::helpers::cross();
        let result = graph.incident_edges(NodeId(99), Direction::Outgoing);
        assert!(matches!(result, Err(GraphError::UnknownNode(NodeId(99)))));
    }

    #[test]
    fn endpoint_sides() {
        let (graph, [s, m, _]) = super::helpers::corridor();
        let e = graph.edge_between(s, m).unwrap();
        assert_eq!(graph.endpoint(e, Side::Start).unwrap(), s);
        assert_eq!(graph.endpoint(e, Side::End).unwrap(), m);
    }

    #[test]
    fn endpoint_of_unknown_edge_is_an_error() {
        let (graph, _) = super::helpers::corridor();
        let result = graph.endpoint(EdgeId(99), Side::End);
        assert!(matches!(result, Err(GraphError::UnknownEdge(EdgeId(99)))));
    }

    #[test]
    fn direction_parses_config_strings() {
        assert_eq!(Direction::from_str("incoming").unwrap(), Direction::Incoming);
        assert_eq!(Direction::from_str("outgoing").unwrap(), Direction::Outgoing);
        assert_eq!(Direction::from_str("either").unwrap(), Direction::Either);
        assert!(matches!(
            Direction::from_str("sideways"),
            Err(GraphError::InvalidDirection(_))
        ));
    }
}

// ── Action resolution ─────────────────────────────────────────────────────────

#[cfg(test)]
mod actions {
    use crate::{Action, Direction};

    #[test]
    fn available_actions_ascending_prefix() {
        let (graph, [center, ..]) = super::helpers::cross();
        let outgoing = graph.incident_edges(center, Direction::Outgoing).unwrap();
        let actions = graph.available_actions(&outgoing).unwrap();
        assert_eq!(actions, Action::ALL.to_vec());
    }

    #[test]
    fn available_actions_partial_set() {
        let (graph, [s, m, _]) = super::helpers::corridor();
        let outgoing = graph.incident_edges(s, Direction::Outgoing).unwrap();
        assert_eq!(graph.available_actions(&outgoing).unwrap(), vec![Action(0)]);
        let outgoing = graph.incident_edges(m, Direction::Outgoing).unwrap();
        assert_eq!(graph.available_actions(&outgoing).unwrap(), vec![Action(0)]);
    }

    #[test]
    fn edge_for_action_resolves_or_none() {
        let (graph, [center, east, ..]) = super::helpers::cross();
        let outgoing = graph.incident_edges(center, Direction::Outgoing).unwrap();
        let resolved = graph.edge_for_action(&outgoing, Action(0)).unwrap().unwrap();
        assert_eq!(graph.edge_to[resolved.index()], east);

        let (corridor, [s, ..]) = super::helpers::corridor();
        let outgoing = corridor.incident_edges(s, Direction::Outgoing).unwrap();
        assert_eq!(corridor.edge_for_action(&outgoing, Action(3)).unwrap(), None);
    }
}
