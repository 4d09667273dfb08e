use crate::algo::bfs::Seq;
use crate::graph::CsrGraph;
use crate::utils::Distances;
use crate::Error;
use dsi_progress_logger::ProgressLog;
use std::sync::atomic::Ordering;

/// Checks a candidate distance vector against the sequential oracle.
///
/// Runs [`Seq`] from `source` into a scratch vector and compares elementwise.
/// Returns `false` on the first mismatch.
///
/// # Arguments
/// * `graph`: the graph the candidate was computed on.
/// * `source`: the source node of the candidate visit.
/// * `candidate`: the distance vector to check.
/// * `pl`: a progress logger, passed to the oracle visit.
pub fn validate(
    graph: &CsrGraph,
    source: usize,
    candidate: &Distances,
    pl: &mut impl ProgressLog,
) -> Result<bool, Error> {
    if candidate.len() != graph.num_nodes() {
        return Err(Error::InvalidArgument(format!(
            "distance vector has {} elements but the graph has {} nodes",
            candidate.len(),
            graph.num_nodes()
        )));
    }

    let oracle = Distances::new(graph.num_nodes());
    Seq::new(graph).visit(source, &oracle, pl)?;

    Ok((0..graph.num_nodes()).all(|node| {
        candidate.load(node, Ordering::Relaxed) == oracle.load(node, Ordering::Relaxed)
    }))
}
