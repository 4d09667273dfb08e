use crate::graph::CsrGraph;
use crate::utils::{Distances, UNREACHED};
use crate::Error;
use dsi_progress_logger::ProgressLog;
use parallel_frontier::Frontier;
use rayon::prelude::*;
use std::borrow::Borrow;
use std::sync::atomic::Ordering;

/// Number of remainder nodes per work unit in bottom-up levels. Kept small:
/// remainder outdegrees are skewed, so chunks must stay cheap to steal.
const BOTTOM_UP_GRANULARITY: usize = 32;
/// Level past which a small frontier switches the visit to bottom-up.
const STALL_ITERATIONS: usize = 10;
/// Frontier size under which a late traversal counts as stalled.
const STALL_FRONTIER: usize = 100;
/// A top-down level whose work estimate exceeds `num_nodes / REMAINDER_DIV`
/// materializes the remainder, so later levels can switch modes cheaply.
const REMAINDER_DIV: usize = 4;

/// A level-synchronous parallel breadth-first visit that switches between
/// top-down and bottom-up expansion.
///
/// Every level, the visit estimates the arc scans a top-down step would
/// perform (`frontier length x average outdegree`) and compares it against
/// the number of still-unreached nodes; whichever direction examines less is
/// chosen. Nodes are claimed by a compare-and-set on their distance slot, so
/// each node is claimed by exactly one thread and the next frontier needs no
/// deduplication. Newly claimed nodes go to per-thread frontier shards that
/// are concatenated implicitly when the next level iterates them.
///
/// The bottom-up step scans the *outgoing* arcs of unreached nodes and adopts
/// `distance + 1` from a neighbor finalized before the current level. On
/// undirected (symmetric) graphs this is equivalent to the classical
/// incoming-arc scan and the distances equal those of [`Seq`](super::Seq).
/// On strictly directed graphs a node may instead adopt a distance along a
/// reversed arc, which diverges from a classical directed BFS; callers that
/// need exact directed distances should present a symmetric adjacency.
///
/// # Examples
///
/// Distances on a path:
///
/// ```
/// use csr_bfs::prelude::*;
/// use csr_bfs::threads;
/// use dsi_progress_logger::no_logging;
///
/// let graph = CsrGraph::new(vec![0, 1, 2, 3, 3], vec![1, 2, 3])?;
/// let dist = Distances::new(graph.num_nodes());
/// ParHybrid::with_threads(&graph, 4, threads![2]).visit(0, &dist, no_logging![])?;
/// assert_eq!(dist.snapshot(), vec![0, 1, 2, 3]);
/// # Ok::<(), Error>(())
/// ```
pub struct ParHybrid<'a, T: Borrow<rayon::ThreadPool> = rayon::ThreadPool> {
    graph: &'a CsrGraph,
    granularity: usize,
    threads: T,
}

impl<'a> ParHybrid<'a, rayon::ThreadPool> {
    /// Creates a hybrid parallel visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `granularity`: the number of frontier nodes per top-down work unit.
    ///   High granularity reduces overhead, but may lead to decreased
    ///   performance on graphs with a skewed outdegree distribution.
    pub fn new(graph: &'a CsrGraph, granularity: usize) -> Self {
        Self::with_num_threads(graph, granularity, 0)
    }

    /// Creates a hybrid parallel visit that uses the specified number of
    /// threads.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `granularity`: the number of frontier nodes per top-down work unit.
    /// * `num_threads`: the number of threads to use; 0 for the default.
    pub fn with_num_threads(graph: &'a CsrGraph, granularity: usize, num_threads: usize) -> Self {
        let threads = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .unwrap_or_else(|_| panic!("Could not build threadpool with {} threads", num_threads));
        Self::with_threads(graph, granularity, threads)
    }
}

impl<'a, T: Borrow<rayon::ThreadPool> + Sync> ParHybrid<'a, T> {
    /// Creates a hybrid parallel visit that uses the specified thread pool.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `granularity`: the number of frontier nodes per top-down work unit.
    /// * `threads`: a thread pool, owned or borrowed.
    pub fn with_threads(graph: &'a CsrGraph, granularity: usize, threads: T) -> Self {
        Self {
            graph,
            granularity,
            threads,
        }
    }

    /// Visits the graph from a single source, writing the distance of every
    /// reached node into `dist` and [`UNREACHED`] everywhere else.
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
        self.check_dist(dist)?;

        let pool = self.threads.borrow();
        let frontier = Frontier::with_threads(pool, None);
        pool.install(|| {
            dist.as_slice()
                .par_iter()
                .for_each(|d| d.store(UNREACHED, Ordering::Relaxed));
        });
        dist.store(source, 0, Ordering::Relaxed);
        pool.install(|| frontier.push(source));

        pl.expected_updates(Some(num_nodes));
        pl.start("Visiting graph from a single source...");
        self.run_levels(frontier, dist, pl);
        pl.done();

        Ok(())
    }

    /// Visits the graph from every node with at least one outgoing arc,
    /// all roots at distance 0.
    ///
    /// Finite multi-source distances are therefore always 0 or 1: a node is
    /// either a root itself or one arc away from one. Nodes that are
    /// isolated, or reachable only from isolated nodes, stay [`UNREACHED`].
    ///
    /// # Arguments
    /// * `dist`: the distance vector, sized to the graph.
    /// * `pl`: a progress logger.
    pub fn visit_all(&self, dist: &Distances, pl: &mut impl ProgressLog) -> Result<(), Error> {
        self.check_dist(dist)?;
        let num_nodes = self.graph.num_nodes();

        let pool = self.threads.borrow();
        let frontier = Frontier::with_threads(pool, None);
        pool.install(|| {
            dist.as_slice()
                .par_iter()
                .for_each(|d| d.store(UNREACHED, Ordering::Relaxed));
            (0..num_nodes).into_par_iter().for_each(|node| {
                if !self.graph.succ(node).is_empty() {
                    dist.store(node, 0, Ordering::Relaxed);
                    frontier.push(node);
                }
            });
        });

        pl.expected_updates(Some(num_nodes));
        pl.start("Visiting graph from all non-isolated roots...");
        self.run_levels(frontier, dist, pl);
        pl.done();

        Ok(())
    }

    fn check_dist(&self, dist: &Distances) -> Result<(), Error> {
        if dist.len() != self.graph.num_nodes() {
            return Err(Error::InvalidArgument(format!(
                "distance vector has {} elements but the graph has {} nodes",
                dist.len(),
                self.graph.num_nodes()
            )));
        }
        Ok(())
    }

    /// The level loop. `curr` holds the nodes at distance `level`; the level
    /// barrier is the end of each parallel region, so every distance read
    /// during a level was published by an earlier one.
    fn run_levels<'b>(
        &'b self,
        mut curr: Frontier<'b, usize>,
        dist: &Distances,
        pl: &mut impl ProgressLog,
    ) {
        let pool = self.threads.borrow();
        let num_nodes = self.graph.num_nodes();
        let avg_degree = self.graph.avg_degree();

        let mut next = Frontier::with_threads(pool, None);
        let mut remainder: Vec<usize> = Vec::new();
        let mut remainder_ready = false;
        let mut level = 0;
        let mut visited = curr.len();

        while !curr.is_empty() {
            // Arc scans a top-down level would perform.
            let work_est = (curr.len() as f64 * avg_degree) as usize;
            // The remainder length bounds the scans of a bottom-up level.
            // A tiny frontier late in the traversal also goes bottom-up.
            let bottom_up = remainder_ready
                && (work_est > remainder.len()
                    || (level > STALL_ITERATIONS && curr.len() < STALL_FRONTIER));

            if bottom_up {
                pool.install(|| {
                    remainder
                        .par_chunks(BOTTOM_UP_GRANULARITY)
                        .for_each(|chunk| {
                            for &node in chunk {
                                for &succ in self.graph.succ(node) {
                                    // Adopt only distances published before
                                    // this level; writes from this region are
                                    // larger than `level`.
                                    let d = dist.load(succ, Ordering::Relaxed);
                                    if d <= level
                                        && dist.cas(node, UNREACHED, d + 1, Ordering::Relaxed)
                                    {
                                        next.push(node);
                                        break;
                                    }
                                }
                            }
                        });
                });
                remainder.retain(|&node| dist.load(node, Ordering::Relaxed) == UNREACHED);
            } else {
                if !remainder_ready && work_est > num_nodes / REMAINDER_DIV {
                    remainder = (0..num_nodes)
                        .filter(|&node| dist.load(node, Ordering::Relaxed) == UNREACHED)
                        .collect();
                    remainder_ready = true;
                }
                pool.install(|| {
                    curr.par_iter()
                        .chunks(self.granularity)
                        .for_each(|chunk| {
                            chunk.into_iter().for_each(|&node| {
                                let next_dist = dist.load(node, Ordering::Relaxed) + 1;
                                for &succ in self.graph.succ(node) {
                                    if dist.cas(succ, UNREACHED, next_dist, Ordering::Relaxed) {
                                        next.push(succ);
                                    }
                                }
                            })
                        });
                });
            }

            pl.update_with_count(curr.len());
            visited += next.len();
            level += 1;
            // Swap the frontiers and clear the one to fill next level.
            std::mem::swap(&mut curr, &mut next);
            next.clear();
        }

        pl.info(format_args!(
            "Completed in {} levels, visited {}/{} nodes",
            level, visited, num_nodes
        ));
    }
}
