use crate::graph::Graph;

/// Returns true if `path` is a walk in `graph`: for each `path[i]`,
/// `path[i + 1]` is a successor of it.
///
/// An empty path is trivially valid.  A single-node path is valid only if
/// that node exists.
pub fn is_path<G: Graph>(path: &[G::Node], graph: &G) -> bool {
    match path {
        [] => true,
        [node] => graph.node_exists(node),
        _ => path
            .windows(2)
            .all(|pair| graph.is_successor(&pair[0], &pair[1])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjacencyGraph;

    fn create_cyclic_graph() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(true, [(0, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn test_empty_path_is_valid() {
        assert!(is_path(&[], &create_cyclic_graph()));
        assert!(is_path(&[], &AdjacencyGraph::default()));
    }

    #[test]
    fn test_single_node_path() {
        let graph = create_cyclic_graph();
        assert!(is_path(&[3], &graph));
        assert!(!is_path(&[42], &graph));
    }

    #[test]
    fn test_walks() {
        let graph = create_cyclic_graph();
        assert!(is_path(&[0, 1, 2, 0, 1], &graph));
        assert!(is_path(&[1, 2, 3], &graph));
        assert!(!is_path(&[0, 2], &graph));
        assert!(!is_path(&[3, 2], &graph));
        assert!(!is_path(&[0, 1, 7], &graph));
    }

    #[test]
    fn test_undirected_walk_goes_both_ways() {
        let graph = AdjacencyGraph::from_edges(false, [(0, 1), (1, 2)]);
        assert!(is_path(&[2, 1, 0, 1], &graph));
        assert!(!is_path(&[0, 2], &graph));
    }
}
