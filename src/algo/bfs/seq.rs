use crate::graph::CsrGraph;
use crate::utils::{Distances, UNREACHED};
use crate::Error;
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;
use std::sync::atomic::Ordering;

/// A sequential breadth-first visit.
///
/// The textbook queue algorithm, kept deliberately simple: it is the oracle
/// the parallel visits are validated against, so its distances are canonical
/// by construction. Levels need no separate bookkeeping because the distance
/// vector itself carries them.
pub struct Seq<'a> {
    graph: &'a CsrGraph,
}

impl<'a> Seq<'a> {
    /// Creates a sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: &'a CsrGraph) -> Self {
        Self { graph }
    }

    /// Visits the graph from `source`, writing the distance of every
    /// reachable node into `dist` and [`UNREACHED`] everywhere else.
    ///
    /// # Arguments
    /// * `source`: the node to start the visit from.
    /// * `dist`: the distance vector, sized to the graph.
    /// * `pl`: a progress logger.
    pub fn visit(
        &self,
        source: usize,
        dist: &Distances,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Error> {
        let num_nodes = self.graph.num_nodes();
        if source >= num_nodes {
            return Err(Error::InvalidArgument(format!(
                "source node {} out of range for {} nodes",
                source, num_nodes
            )));
        }
        if dist.len() != num_nodes {
            return Err(Error::InvalidArgument(format!(
                "distance vector has {} elements but the graph has {} nodes",
                dist.len(),
                num_nodes
            )));
        }

        dist.fill(UNREACHED);
        dist.store(source, 0, Ordering::Relaxed);

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            let next_dist = dist.load(node, Ordering::Relaxed) + 1;
            for &succ in self.graph.succ(node) {
                if dist.load(succ, Ordering::Relaxed) == UNREACHED {
                    dist.store(succ, next_dist, Ordering::Relaxed);
                    queue.push_back(succ);
                }
            }
            pl.light_update();
        }

        Ok(())
    }
}
