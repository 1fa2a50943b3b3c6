//! The synthetic grid-town network.
//!
//! A 2 × 3 block of two-way streets, 300 m per segment:
//!
//! ```text
//! D ──── E ──── F
//! │      │      │
//! A ──── B ──── C
//! ```
//!
//! Commutes run from A (south-west) to F (north-east).

use rq_core::Point;
use rq_graph::{GraphResult, RoadGraph, RoadGraphBuilder};

pub const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

pub const BLOCK_M: f64 = 300.0;

pub fn build_network() -> GraphResult<(RoadGraph, [rq_core::NodeId; 6])> {
    let mut b = RoadGraphBuilder::with_capacity(6, 14);

    let a = b.add_node(Point::new(0.0, 0.0));
    let bb = b.add_node(Point::new(BLOCK_M, 0.0));
    let c = b.add_node(Point::new(2.0 * BLOCK_M, 0.0));
    let d = b.add_node(Point::new(0.0, BLOCK_M));
    let e = b.add_node(Point::new(BLOCK_M, BLOCK_M));
    let f = b.add_node(Point::new(2.0 * BLOCK_M, BLOCK_M));

    // South row, north row, then the three cross streets.
    b.add_road(a, bb, BLOCK_M);
    b.add_road(bb, c, BLOCK_M);
    b.add_road(d, e, BLOCK_M);
    b.add_road(e, f, BLOCK_M);
    b.add_road(a, d, BLOCK_M);
    b.add_road(bb, e, BLOCK_M);
    b.add_road(c, f, BLOCK_M);

    Ok((b.build()?, [a, bb, c, d, e, f]))
}
