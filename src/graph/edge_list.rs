use crate::graph::CsrGraph;
use crate::Error;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads a graph from a textual edge list.
///
/// The file is a whitespace-separated stream of non-negative integer pairs
/// `u v`, one directed arc per pair; line structure carries no meaning beyond
/// the whitespace, and blank lines are accepted. Parsing stops at the first
/// token that is not an integer, or at a dangling final token.
///
/// Node ids need not be contiguous or zero-based: endpoints are remapped to
/// dense internal ids in the order they are first encountered. The CSR is
/// then built in three passes over the collected arcs: a degree histogram on
/// the source ids, a prefix sum into the offsets, and a placement pass using
/// a per-source cursor.
pub fn from_file(path: impl AsRef<Path>) -> Result<CsrGraph, Error> {
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;

    let mut ids: HashMap<u64, usize> = HashMap::new();
    let mut arc_list: Vec<(usize, usize)> = Vec::new();
    let mut tokens = contents.split_ascii_whitespace();

    while let (Some(first), Some(second)) = (tokens.next(), tokens.next()) {
        let (Ok(src), Ok(dst)) = (first.parse::<u64>(), second.parse::<u64>()) else {
            break;
        };
        let next_id = ids.len();
        let src = *ids.entry(src).or_insert(next_id);
        let next_id = ids.len();
        let dst = *ids.entry(dst).or_insert(next_id);
        arc_list.push((src, dst));
    }

    let num_nodes = ids.len();
    let mut degrees = vec![0usize; num_nodes];
    for &(src, _) in &arc_list {
        degrees[src] += 1;
    }

    let mut offsets = vec![0usize; num_nodes + 1];
    for node in 0..num_nodes {
        offsets[node + 1] = offsets[node] + degrees[node];
    }

    let mut arcs = vec![0usize; arc_list.len()];
    let mut cursor = offsets[..num_nodes].to_vec();
    for &(src, dst) in &arc_list {
        arcs[cursor[src]] = dst;
        cursor[src] += 1;
    }

    CsrGraph::new(offsets, arcs)
}
