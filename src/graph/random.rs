use crate::graph::CsrGraph;
use crate::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_params(num_nodes: usize, density: f64) -> Result<(), Error> {
    if num_nodes == 0 {
        return Err(Error::InvalidArgument(
            "graph must have at least one node".into(),
        ));
    }
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidArgument(format!(
            "density must be in [0, 1], got {}",
            density
        )));
    }
    Ok(())
}

/// Builds a uniform random directed graph.
///
/// Every ordered pair `(u, v)` with `u != v` carries an arc with probability
/// `density`. Pairs are drawn in lexicographic order, so each successor list
/// comes out sorted and the offsets are built in a single pass.
///
/// # Arguments
/// * `num_nodes`: the number of nodes; must be positive.
/// * `density`: the arc probability, in `[0, 1]`.
/// * `seed`: the generator seed; equal seeds reproduce the same graph.
pub fn random(num_nodes: usize, density: f64, seed: u64) -> Result<CsrGraph, Error> {
    check_params(num_nodes, density)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut offsets = Vec::with_capacity(num_nodes + 1);
    let mut arcs =
        Vec::with_capacity((num_nodes as f64 * num_nodes as f64 * density) as usize);

    offsets.push(0);
    for node in 0..num_nodes {
        for succ in 0..num_nodes {
            if node != succ && rng.gen::<f64>() < density {
                arcs.push(succ);
            }
        }
        offsets.push(arcs.len());
    }

    CsrGraph::new(offsets, arcs)
}

/// Builds a uniform random undirected graph.
///
/// Unordered pairs `{u, v}` are drawn once with probability `density`; each
/// accepted pair contributes the arcs `(u, v)` and `(v, u)`, so the adjacency
/// is symmetric and the arc count is even.
///
/// # Arguments
/// * `num_nodes`: the number of nodes; must be positive.
/// * `density`: the pair probability, in `[0, 1]`.
/// * `seed`: the generator seed; equal seeds reproduce the same graph.
pub fn random_undirected(num_nodes: usize, density: f64, seed: u64) -> Result<CsrGraph, Error> {
    check_params(num_nodes, density)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut pairs = Vec::new();
    for node in 0..num_nodes {
        for succ in node + 1..num_nodes {
            if rng.gen::<f64>() < density {
                pairs.push((node, succ));
            }
        }
    }

    let mut degrees = vec![0usize; num_nodes];
    for &(node, succ) in &pairs {
        degrees[node] += 1;
        degrees[succ] += 1;
    }

    let mut offsets = vec![0usize; num_nodes + 1];
    for node in 0..num_nodes {
        offsets[node + 1] = offsets[node] + degrees[node];
    }

    let mut arcs = vec![0usize; pairs.len() * 2];
    let mut cursor = offsets[..num_nodes].to_vec();
    for &(node, succ) in &pairs {
        arcs[cursor[node]] = succ;
        cursor[node] += 1;
        arcs[cursor[succ]] = node;
        cursor[succ] += 1;
    }

    CsrGraph::new(offsets, arcs)
}
