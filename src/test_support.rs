//! Fixtures and `quickcheck` generators shared by the unit and integration
//! tests.

use std::collections::{BTreeSet, VecDeque};

use quickcheck::{Arbitrary, Gen};

use crate::{
    AdjacencyGraph,
    graph::{Coster, Graph, HeuristicCoster, MutableGraph},
};

const MAX_NODES: usize = 12;
const MAX_EXTRA_EDGES: usize = 30;

/// An arbitrary small graph, directed or undirected, possibly with
/// self-loops and isolated nodes.  Nodes are numbered `0..n`.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: AdjacencyGraph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % MAX_NODES;
        let num_edges = usize::arbitrary(g) % MAX_EXTRA_EDGES;

        let mut graph = AdjacencyGraph::new(bool::arbitrary(g));
        for node in 0..num_nodes {
            graph.add_node(node, &[]);
        }
        if num_nodes > 0 {
            for _ in 0..num_edges {
                let from = usize::arbitrary(g) % num_nodes;
                let to = usize::arbitrary(g) % num_nodes;
                graph.add_edge(from, to);
            }
        }

        ArbGraph { graph }
    }
}

/// An arbitrary connected, undirected graph with pairwise distinct edge
/// costs, so that its minimum spanning tree is unique.
#[derive(Debug, Clone)]
pub struct ArbWeightedGraph {
    pub graph: AdjacencyGraph,
}

impl Arbitrary for ArbWeightedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = 1 + usize::arbitrary(g) % MAX_NODES;

        // A random spanning tree keeps the graph connected.
        let mut pairs: Vec<(usize, usize)> = (1..num_nodes)
            .map(|node| (usize::arbitrary(g) % node, node))
            .collect();
        for _ in 0..usize::arbitrary(g) % MAX_EXTRA_EDGES {
            let a = usize::arbitrary(g) % num_nodes;
            let b = usize::arbitrary(g) % num_nodes;
            if a != b {
                pairs.push((a, b));
            }
        }

        let mut ranked: Vec<(u32, usize)> = (0..pairs.len())
            .map(|i| (u32::arbitrary(g), i))
            .collect();
        ranked.sort();

        let mut graph = AdjacencyGraph::new(false);
        graph.add_node(0, &[]);
        for (rank, (_, i)) in ranked.into_iter().enumerate() {
            let (a, b) = pairs[i];
            graph.add_edge(a, b);
            graph.set_edge_cost(&a, &b, (rank + 1) as f64);
        }

        ArbWeightedGraph { graph }
    }
}

/// Nodes reachable from `start` by following successors, never entering
/// `avoid`.
pub fn reachable_avoiding<G: Graph>(
    graph: &G,
    start: G::Node,
    avoid: Option<G::Node>,
) -> BTreeSet<G::Node> {
    let mut visited = BTreeSet::new();
    if avoid.as_ref() == Some(&start) {
        return visited;
    }
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }
        for successor in graph.successors(&node) {
            if avoid.as_ref() != Some(&successor) && !visited.contains(&successor) {
                queue.push_back(successor);
            }
        }
    }
    visited
}

/// An undirected `rows x cols` grid with 4-neighbour connectivity, keyed by
/// `(row, col)`.  Unlike [`AdjacencyGraph`] it is computed on the fly and
/// implements [`HeuristicCoster`] with the Manhattan distance.
#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    weighted: bool,
}

impl GridGraph {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            weighted: true,
        }
    }

    /// Hides the [`Coster`] capabilities, leaving a plain graph.
    pub fn without_costs(self) -> Self {
        Self {
            weighted: false,
            ..self
        }
    }

    fn contains(&self, &(row, col): &(usize, usize)) -> bool {
        row < self.rows && col < self.cols
    }

    fn neighbours(&self, node: &(usize, usize)) -> Vec<(usize, usize)> {
        if !self.contains(node) {
            return Vec::new();
        }
        let (row, col) = *node;
        let mut result = Vec::with_capacity(4);
        if row > 0 {
            result.push((row - 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.cols {
            result.push((row, col + 1));
        }
        if row + 1 < self.rows {
            result.push((row + 1, col));
        }
        result
    }
}

impl Graph for GridGraph {
    type Node = (usize, usize);

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }

    fn node_exists(&self, node: &(usize, usize)) -> bool {
        self.contains(node)
    }

    fn successors(&self, node: &(usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbours(node).into_iter()
    }

    fn predecessors(&self, node: &(usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbours(node).into_iter()
    }

    fn as_coster(&self) -> Option<&dyn Coster<(usize, usize)>> {
        if self.weighted {
            Some(self as &dyn Coster<_>)
        } else {
            None
        }
    }

    fn as_heuristic_coster(&self) -> Option<&dyn HeuristicCoster<(usize, usize)>> {
        if self.weighted {
            Some(self as &dyn HeuristicCoster<_>)
        } else {
            None
        }
    }
}

impl Coster<(usize, usize)> for GridGraph {
    /// Moving between rows `r1` and `r2` costs `1 + r1 + r2`.
    fn cost(&self, from: &(usize, usize), to: &(usize, usize)) -> f64 {
        1.0 + (from.0 + to.0) as f64
    }
}

impl HeuristicCoster<(usize, usize)> for GridGraph {
    fn heuristic_cost(&self, from: &(usize, usize), to: &(usize, usize)) -> f64 {
        (from.0.abs_diff(to.0) + from.1.abs_diff(to.1)) as f64
    }
}
