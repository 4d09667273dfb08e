use anyhow::Result;
use csr_bfs::graph::stats::{degree_stats, DegreeStats};
use csr_bfs::graph::CsrGraph;
use csr_bfs::Error;

#[test]
fn test_accessors() -> Result<()> {
    // 0 -> {1, 2}, 1 -> {}, 2 -> {0}
    let graph = CsrGraph::new(vec![0, 2, 2, 3], vec![1, 2, 0])?;

    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_arcs(), 3);
    assert!((graph.avg_degree() - 1.0).abs() < 1e-9);
    assert_eq!(graph.successors(0)?, &[1, 2]);
    assert!(graph.successors(1)?.is_empty());
    assert_eq!(graph.successors(2)?, &[0]);
    assert_eq!(graph.outdegree(0)?, 2);
    assert!(graph.validate());

    Ok(())
}

#[test]
fn test_out_of_range_successors() -> Result<()> {
    let graph = CsrGraph::new(vec![0, 0], vec![])?;

    assert!(matches!(
        graph.successors(1),
        Err(Error::OutOfRange {
            node: 1,
            num_nodes: 1
        })
    ));
    assert!(matches!(graph.successors(usize::MAX), Err(Error::OutOfRange { .. })));

    Ok(())
}

#[test]
fn test_construction_rejects_invalid_shapes() {
    // Fewer than two offsets.
    assert!(matches!(
        CsrGraph::new(vec![], vec![]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        CsrGraph::new(vec![0], vec![]),
        Err(Error::InvalidArgument(_))
    ));
    // First offset not zero.
    assert!(matches!(
        CsrGraph::new(vec![1, 2], vec![0, 0]),
        Err(Error::InvalidArgument(_))
    ));
    // Decreasing offsets.
    assert!(matches!(
        CsrGraph::new(vec![0, 2, 1], vec![0, 0]),
        Err(Error::InvalidArgument(_))
    ));
    // Last offset disagrees with the arc count.
    assert!(matches!(
        CsrGraph::new(vec![0, 1], vec![0, 0]),
        Err(Error::InvalidArgument(_))
    ));
    // Arc target out of range.
    assert!(matches!(
        CsrGraph::new(vec![0, 1], vec![3]),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_single_node_no_arcs() -> Result<()> {
    let graph = CsrGraph::new(vec![0, 0], vec![])?;
    assert_eq!(graph.num_nodes(), 1);
    assert_eq!(graph.num_arcs(), 0);
    assert_eq!(graph.avg_degree(), 0.0);
    Ok(())
}

#[test]
fn test_degree_stats() -> Result<()> {
    // 0 -> {1, 2, 3}, 1 -> {0}, 2 -> {}, 3 -> {}
    let graph = CsrGraph::new(vec![0, 3, 4, 4, 4], vec![1, 2, 3, 0])?;

    assert_eq!(
        degree_stats(&graph),
        DegreeStats {
            min: 0,
            max: 3,
            avg: 1.0,
            sinks: 2
        }
    );

    Ok(())
}
