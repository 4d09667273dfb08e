//! Degree statistics, reported alongside validation results.

use crate::graph::CsrGraph;

/// Outdegree summary of a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub avg: f64,
    /// Nodes with no outgoing arcs.
    pub sinks: usize,
}

/// Computes the outdegree summary in one pass over the offsets.
pub fn degree_stats(graph: &CsrGraph) -> DegreeStats {
    let num_nodes = graph.num_nodes();
    let mut min = usize::MAX;
    let mut max = 0;
    let mut sinks = 0;

    for node in 0..num_nodes {
        let degree = graph.succ(node).len();
        min = min.min(degree);
        max = max.max(degree);
        if degree == 0 {
            sinks += 1;
        }
    }

    DegreeStats {
        min,
        max,
        avg: graph.avg_degree(),
        sinks,
    }
}
