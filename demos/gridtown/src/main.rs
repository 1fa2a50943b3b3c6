//! gridtown — end-to-end routeq demo.
//!
//! Builds a 2 × 3 grid town with one congested street and two signal
//! groups, then finds the A → F route three ways against the same cost
//! oracle: the Dijkstra baseline, a greedy learner, and an epsilon-greedy
//! learner.  Prints a comparison table and each learner's episode costs.

mod network;

use std::time::Instant;

use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rq_core::{NodeId, TrainRng};
use rq_cost::{CostMode, CostModel};
use rq_graph::RoadGraph;
use rq_learn::{ActionPolicy, EpisodeLog, EpsilonGreedy, Greedy, TrainConfig, Trainer};
use rq_search::{DijkstraPlanner, RoutePlanner};

use network::{build_network, NAMES};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const SPEED_KMH: f64 = 40.0;
const MAX_EPISODES: usize = 5_000;
const CONVERGE_WINDOW: usize = 5;
const EXPLORATION_RATE: f64 = 0.1;

// ── Formatting helpers ────────────────────────────────────────────────────────

fn route_names(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| NAMES[n.index()])
        .collect::<Vec<_>>()
        .join(" → ")
}

fn episode_costs(
    graph: &RoadGraph,
    cost: &CostModel,
    episodes: &[EpisodeLog],
) -> Result<Vec<f64>> {
    episodes
        .iter()
        .map(|log| Ok(cost.route_cost(graph, &log.edges)?))
        .collect()
}

fn print_cost_series(label: &str, costs: &[f64]) {
    let tail = costs.len().saturating_sub(10);
    let series = costs[tail..]
        .iter()
        .map(|c| format!("{c:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {label} episode costs (last {}): {series}", costs.len() - tail);
}

fn run_learner<P: ActionPolicy>(
    label: &str,
    graph: &RoadGraph,
    cost: &CostModel,
    policy: P,
    stream: u64,
    start: NodeId,
    end: NodeId,
) -> Result<()> {
    let t0 = Instant::now();
    let mut trainer = Trainer::new(
        graph,
        cost,
        policy,
        TrainConfig::default(),
        start,
        end,
        TrainRng::new(SEED, stream),
    )?;
    let report = trainer.train(MAX_EPISODES, CONVERGE_WINDOW)?;
    let route_cost = cost.route_cost(graph, &report.edge_path)?;

    println!(
        "{label:<16} {:<28} {route_cost:>8.2}  {:>7}  {:.3} s",
        route_names(&report.node_path),
        report.converged_episode,
        t0.elapsed().as_secs_f64()
    );
    let costs = episode_costs(graph, cost, &report.episodes)?;
    print_cost_series(label, &costs);
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    println!("=== gridtown — routeq route comparison ===");
    println!();

    // 1. Network and cost oracle.
    let (graph, [a, b, c, _d, e, f]) = build_network()?;
    println!("Network: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    // The main-street shortcut B → C is jammed, and the B/E pair plus C
    // each carry a signal.
    let congestion = vec![
        (graph.edge_between(b, c).unwrap(), 10.0),
        (graph.edge_between(c, b).unwrap(), 10.0),
        (graph.edge_between(b, e).unwrap(), 20.0),
    ];
    let lights = vec![(vec![b, e], 5.0), (vec![c], 5.0)];
    let cost = CostModel::new(&graph, CostMode::Time, SPEED_KMH, &congestion, &lights)?;
    println!(
        "Cost mode: time at {SPEED_KMH} km/h, {} jammed edges, {} signal groups",
        congestion.len(),
        lights.len()
    );
    println!();

    println!(
        "{:<16} {:<28} {:>8}  {:>7}  {}",
        "Planner", "Route", "Cost", "Episode", "Wall"
    );
    println!("{}", "-".repeat(72));

    // 2. Dijkstra reference.
    let t0 = Instant::now();
    let reference = DijkstraPlanner.plan(&graph, &cost, a, f)?;
    println!(
        "{:<16} {:<28} {:>8.2}  {:>7}  {:.3} s",
        "dijkstra",
        route_names(&reference.nodes),
        reference.total_cost,
        "-",
        t0.elapsed().as_secs_f64()
    );

    // 3. The two learners, independent RNG streams, same graph and oracle.
    run_learner("greedy", &graph, &cost, Greedy, 0, a, f)?;
    run_learner(
        "epsilon-greedy",
        &graph,
        &cost,
        EpsilonGreedy::new(EXPLORATION_RATE)?,
        1,
        a,
        f,
    )?;

    Ok(())
}
