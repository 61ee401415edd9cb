//! Dominator and post-dominator sets.
//!
//! A node `d` **dominates** `n` if every path from the start node to `n`
//! passes through `d`; `d` **post-dominates** `n` if every path from `n` to
//! the end node passes through `d`.  Both relations are reflexive here: the
//! result maps each node to its full set of (post-)dominators, itself
//! included.  Strict and immediate dominators are not derived.
//!
//! # Algorithm
//!
//! The classic iterative data-flow fixed point.  Every set starts as the
//! full node set, except the start node's, which is just itself.  Each pass
//! recomputes every other node's set as itself plus the intersection of its
//! predecessors' sets, until a pass changes nothing.  Sets only ever shrink,
//! so this terminates.  Nodes without predecessors keep their initial set.
//!
//! Nodes are numbered densely in [`Graph::nodes`] order and each set is a
//! bit vector over those numbers.

use std::collections::{BTreeSet, HashMap};

use bitvec::vec::BitVec;

use crate::{
    graph::Graph,
    tracing_support::{debug, info_span},
};

/// Maps every node to the set of nodes that (post-)dominate it.
pub type DominatorMap<N> = HashMap<N, BTreeSet<N>>;

/// Which neighbours a node's set is derived from.
#[derive(Clone, Copy, Debug)]
enum Flow {
    Forward,
    Backward,
}

/// Computes the dominators of every node with respect to `start`.
///
/// If `start` is not in the graph, no node is dominated by anything less
/// than the full node set.
pub fn dominators<G: Graph>(start: &G::Node, graph: &G) -> DominatorMap<G::Node> {
    let _span = info_span!("dominators", start = ?start).entered();
    fixed_point(start, graph, Flow::Forward)
}

/// Computes the post-dominators of every node with respect to `end`.
pub fn post_dominators<G: Graph>(end: &G::Node, graph: &G) -> DominatorMap<G::Node> {
    let _span = info_span!("post_dominators", end = ?end).entered();
    fixed_point(end, graph, Flow::Backward)
}

fn fixed_point<G: Graph>(root: &G::Node, graph: &G, flow: Flow) -> DominatorMap<G::Node> {
    let nodes: Vec<G::Node> = graph.nodes().collect();
    let index: HashMap<&G::Node, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();

    // Neighbour lists in index form, resolved once up front.  Neighbours
    // that are not listed by `nodes()` are ignored.
    let neighbours: Vec<Vec<usize>> = nodes
        .iter()
        .map(|node| {
            let to_index = |n: G::Node| index.get(&n).copied();
            match flow {
                Flow::Forward => graph.predecessors(node).filter_map(to_index).collect(),
                Flow::Backward => graph.successors(node).filter_map(to_index).collect(),
            }
        })
        .collect();

    let root = index.get(root).copied();
    let full = BitVec::<usize>::repeat(true, nodes.len());
    let mut sets: Vec<BitVec> = (0..nodes.len())
        .map(|i| {
            if Some(i) == root {
                let mut only_root = BitVec::repeat(false, nodes.len());
                only_root.set(i, true);
                only_root
            } else {
                full.clone()
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    let mut passes = 0;
    let mut changed = true;
    while changed {
        changed = false;
        #[cfg(feature = "tracing")]
        {
            passes += 1;
        }
        for (i, preds) in neighbours.iter().enumerate() {
            let Some((&first, rest)) = preds.split_first() else {
                continue;
            };
            if Some(i) == root {
                continue;
            }

            let mut set = sets[first].clone();
            for &pred in rest {
                set &= sets[pred].as_bitslice();
            }
            set.set(i, true);

            if set != sets[i] {
                sets[i] = set;
                changed = true;
            }
        }
    }
    debug!(passes, num_nodes = nodes.len(), "dominator sets converged");

    nodes
        .iter()
        .zip(&sets)
        .map(|(node, set)| {
            let members = set.iter_ones().map(|j| nodes[j].clone()).collect();
            (node.clone(), members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        AdjacencyGraph,
        test_support::{ArbGraph, reachable_avoiding},
    };

    fn set(nodes: &[usize]) -> BTreeSet<usize> {
        nodes.iter().copied().collect()
    }

    /// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    fn create_diamond() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(true, [(0, 1), (0, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_start_dominates_only_itself() {
        let doms = dominators(&0, &create_diamond());
        assert_eq!(doms[&0], set(&[0]));
    }

    #[test]
    fn test_diamond() {
        let doms = dominators(&0, &create_diamond());
        assert_eq!(doms[&1], set(&[0, 1]));
        assert_eq!(doms[&2], set(&[0, 2]));
        assert_eq!(doms[&3], set(&[0, 3]));
    }

    #[test]
    fn test_post_dominators_of_diamond() {
        let post = post_dominators(&3, &create_diamond());
        assert_eq!(post[&3], set(&[3]));
        assert_eq!(post[&1], set(&[1, 3]));
        assert_eq!(post[&0], set(&[0, 3]));
    }

    #[test]
    fn test_loop() {
        // 0 -> 1 -> 2 -> 1, 2 -> 3
        let graph = AdjacencyGraph::from_edges(true, [(0, 1), (1, 2), (2, 1), (2, 3)]);
        let doms = dominators(&0, &graph);
        assert_eq!(doms[&1], set(&[0, 1]));
        assert_eq!(doms[&2], set(&[0, 1, 2]));
        assert_eq!(doms[&3], set(&[0, 1, 2, 3]));

        let post = post_dominators(&3, &graph);
        assert_eq!(post[&0], set(&[0, 1, 2, 3]));
        assert_eq!(post[&1], set(&[1, 2, 3]));
    }

    #[test]
    fn test_nodes_without_predecessors_keep_full_set() {
        // 5 is unreachable and has no predecessors.
        let graph = AdjacencyGraph::from_edges(true, [(0, 1), (5, 1)]);
        let doms = dominators(&0, &graph);
        assert_eq!(doms[&5], set(&[0, 1, 5]));
        assert_eq!(doms[&1], set(&[0, 1]));
    }

    #[test]
    fn test_empty_graph() {
        assert!(dominators(&0, &AdjacencyGraph::default()).is_empty());
    }

    #[quickcheck]
    fn prop_idempotent(ArbGraph { graph }: ArbGraph) -> bool {
        let Some(start) = graph.nodes().next() else {
            return true;
        };
        dominators(&start, &graph) == dominators(&start, &graph)
            && post_dominators(&start, &graph) == post_dominators(&start, &graph)
    }

    #[quickcheck]
    fn prop_matches_path_definition(ArbGraph { graph }: ArbGraph) -> bool {
        let Some(start) = graph.nodes().next() else {
            return true;
        };
        let doms = dominators(&start, &graph);
        let reachable = reachable_avoiding(&graph, start, None);
        doms[&start] == set(&[start])
            && reachable.iter().all(|node| {
                graph
                    .nodes()
                    .filter(|d| d != &start && d != node)
                    .all(|d| {
                        let avoidable = reachable_avoiding(&graph, start, Some(d)).contains(node);
                        doms[node].contains(&d) != avoidable
                    })
            })
    }
}
