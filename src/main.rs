use anyhow::Result;
use csr_bfs::algo::bfs::ParHybrid;
use csr_bfs::graph::{self, stats, CsrGraph};
use csr_bfs::threads;
use csr_bfs::utils::{Distances, UNREACHED};
use dsi_progress_logger::prelude::*;

const DEFAULT_NUM_NODES: usize = 1000;
const DEFAULT_DENSITY: f64 = 0.01;
const DEFAULT_SEED: u64 = 42;
const GRANULARITY: usize = 4;

fn print_usage() {
    eprintln!(
        "Usage: csr-bfs [NUM_NODES={}] [DENSITY={}] [SEED={}]\n       csr-bfs EDGES.txt",
        DEFAULT_NUM_NODES, DEFAULT_DENSITY, DEFAULT_SEED
    );
}

fn build_graph(args: &[String]) -> Result<CsrGraph> {
    if let [first, ..] = args {
        if first.ends_with(".txt") {
            return Ok(graph::from_file(first)?);
        }
    }
    let num_nodes = match args.first() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_NUM_NODES,
    };
    let density = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_DENSITY,
    };
    let seed = match args.get(2) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };
    Ok(graph::random(num_nodes, density, seed)?)
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }

    let graph = match build_graph(&args) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    let mut pl = progress_logger![item_name = "node"];
    let degrees = stats::degree_stats(&graph);
    pl.info(format_args!(
        "{} nodes, {} arcs, outdegree min {} / max {} / avg {:.3}, {} sinks",
        graph.num_nodes(),
        graph.num_arcs(),
        degrees.min,
        degrees.max,
        degrees.avg,
        degrees.sinks,
    ));

    let dist = Distances::new(graph.num_nodes());
    let visit = ParHybrid::with_threads(&graph, GRANULARITY, threads![]);

    let start = std::time::Instant::now();
    visit.visit_all(&dist, &mut pl)?;
    let elapsed = start.elapsed().as_secs_f64();

    let reachable = dist
        .snapshot()
        .iter()
        .filter(|&&d| d != UNREACHED)
        .count();
    pl.info(format_args!(
        "Time: {:.6} s, throughput: {:.3} M arcs/s, reachable: {}/{} nodes",
        elapsed,
        graph.num_arcs() as f64 / elapsed / 1e6,
        reachable,
        graph.num_nodes(),
    ));

    Ok(())
}
