use std::collections::{BTreeMap, HashMap};

use crate::{
    cost::UNIFORM_COST,
    error::GraphError,
    graph::{Coster, Graph, MutableGraph},
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Adjacency {
    successors: Vec<usize>,
    predecessors: Vec<usize>,
}

fn push_unique(list: &mut Vec<usize>, node: usize) {
    if !list.contains(&node) {
        list.push(node);
    }
}

fn remove_value(list: &mut Vec<usize>, node: usize) {
    list.retain(|&n| n != node);
}

/// A graph stored as per-node successor and predecessor lists, with
/// `usize` node identifiers and an `f64` cost per edge.
///
/// Nodes are enumerated in ascending identifier order; the successors of a
/// node are enumerated in the order their edges were added.  Parallel edges
/// collapse into one.  When undirected, every edge is stored in both
/// directions and successors equal predecessors.
///
/// New edges cost [`UNIFORM_COST`] until [`MutableGraph::set_edge_cost`] is
/// called.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph {
    nodes: BTreeMap<usize, Adjacency>,
    costs: HashMap<(usize, usize), f64>,
    directed: bool,
}

impl Default for AdjacencyGraph {
    /// Creates an empty directed graph.
    fn default() -> Self {
        Self::new(true)
    }
}

impl AdjacencyGraph {
    /// Creates a new, empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: BTreeMap::new(),
            costs: HashMap::new(),
            directed,
        }
    }

    /// Creates a graph containing the given edges and their endpoints.
    pub fn from_edges(directed: bool, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(directed);
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Creates a graph containing the given `(from, to, cost)` edges and
    /// their endpoints.
    pub fn from_weighted_edges(
        directed: bool,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Self {
        let mut graph = Self::new(directed);
        for (from, to, cost) in edges {
            graph.add_edge(from, to);
            graph.set_edge_cost(&from, &to, cost);
        }
        graph
    }

    /// Gets the cost of the edge `from -> to`, or `None` if there is no such
    /// edge.
    pub fn edge_cost(&self, from: usize, to: usize) -> Option<f64> {
        self.costs.get(&(from, to)).copied()
    }

    /// Sets the cost of an existing edge, failing if the edge is missing.
    pub fn try_set_edge_cost(
        &mut self,
        from: usize,
        to: usize,
        cost: f64,
    ) -> Result<(), GraphError<usize>> {
        if !self.is_successor(&from, &to) {
            return Err(GraphError::MissingEdge(from, to));
        }
        self.costs.insert((from, to), cost);
        if !self.directed {
            self.costs.insert((to, from), cost);
        }
        Ok(())
    }

    /// Changes the directedness, failing unless the graph is empty.
    pub fn try_set_directed(&mut self, directed: bool) -> Result<(), GraphError<usize>> {
        if !self.nodes.is_empty() {
            return Err(GraphError::NotEmpty(self.nodes.len()));
        }
        self.directed = directed;
        Ok(())
    }

    /// Sum of the costs of all stored edges.  Each undirected edge is
    /// counted once.
    pub fn total_cost(&self) -> f64 {
        self.costs
            .iter()
            .filter(|((from, to), _)| self.directed || from <= to)
            .map(|(_, cost)| cost)
            .sum()
    }

    fn link(&mut self, from: usize, to: usize) {
        push_unique(&mut self.nodes.entry(from).or_default().successors, to);
        push_unique(&mut self.nodes.entry(to).or_default().predecessors, from);
        self.costs.entry((from, to)).or_insert(UNIFORM_COST);
    }

    fn unlink(&mut self, from: usize, to: usize) {
        if let Some(adjacency) = self.nodes.get_mut(&from) {
            remove_value(&mut adjacency.successors, to);
        }
        if let Some(adjacency) = self.nodes.get_mut(&to) {
            remove_value(&mut adjacency.predecessors, from);
        }
        self.costs.remove(&(from, to));
    }
}

#[cfg(not(feature = "unchecked"))]
fn precondition_violated(err: GraphError<usize>) {
    panic!("{err}");
}

#[cfg(feature = "unchecked")]
fn precondition_violated(_err: GraphError<usize>) {}

impl Graph for AdjacencyGraph {
    type Node = usize;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.keys().copied()
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node_exists(&self, node: &usize) -> bool {
        self.nodes.contains_key(node)
    }

    fn successors(&self, node: &usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .get(node)
            .into_iter()
            .flat_map(|adjacency| adjacency.successors.iter().copied())
    }

    fn predecessors(&self, node: &usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .get(node)
            .into_iter()
            .flat_map(|adjacency| adjacency.predecessors.iter().copied())
    }

    fn is_successor(&self, node: &usize, successor: &usize) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|adjacency| adjacency.successors.contains(successor))
    }

    fn is_predecessor(&self, node: &usize, predecessor: &usize) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|adjacency| adjacency.predecessors.contains(predecessor))
    }

    fn degree(&self, node: &usize) -> usize {
        self.nodes.get(node).map_or(0, |adjacency| {
            adjacency.successors.len() + adjacency.predecessors.len()
        })
    }

    /// Gets every edge in ascending order of source, then in insertion order
    /// of the source's outgoing edges.
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().flat_map(|(&from, adjacency)| {
            adjacency.successors.iter().map(move |&to| (from, to))
        })
    }

    fn as_coster(&self) -> Option<&dyn Coster<usize>> {
        Some(self)
    }
}

impl Coster<usize> for AdjacencyGraph {
    fn cost(&self, from: &usize, to: &usize) -> f64 {
        debug_assert!(
            self.is_successor(from, to),
            "cost requested for missing edge {from} -> {to}"
        );
        self.edge_cost(*from, *to).unwrap_or(UNIFORM_COST)
    }
}

impl MutableGraph for AdjacencyGraph {
    fn new_node(&mut self, successors: &[usize]) -> usize {
        let id = self
            .nodes
            .last_key_value()
            .map_or(0, |(&last, _)| last + 1);
        self.add_node(id, successors);
        id
    }

    fn add_node(&mut self, node: usize, successors: &[usize]) {
        self.nodes.entry(node).or_default();
        for &successor in successors {
            self.add_edge(node, successor);
        }
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        self.link(from, to);
        if !self.directed {
            self.link(to, from);
        }
    }

    /// Sets the cost of an existing edge.  Panics if the edge is missing,
    /// unless the `unchecked` feature is enabled, in which case the call is
    /// ignored.
    fn set_edge_cost(&mut self, from: &usize, to: &usize, cost: f64) {
        if let Err(err) = self.try_set_edge_cost(*from, *to, cost) {
            precondition_violated(err);
        }
    }

    fn remove_node(&mut self, node: &usize) {
        let Some(adjacency) = self.nodes.remove(node) else {
            return;
        };
        for successor in adjacency.successors {
            if let Some(other) = self.nodes.get_mut(&successor) {
                remove_value(&mut other.predecessors, *node);
            }
        }
        for predecessor in adjacency.predecessors {
            if let Some(other) = self.nodes.get_mut(&predecessor) {
                remove_value(&mut other.successors, *node);
            }
        }
        self.costs
            .retain(|&(from, to), _| from != *node && to != *node);
    }

    fn remove_edge(&mut self, from: &usize, to: &usize) {
        self.unlink(*from, *to);
        if !self.directed {
            self.unlink(*to, *from);
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.costs.clear();
    }

    /// Changes the directedness of an empty graph.  Panics if the graph is
    /// not empty, unless the `unchecked` feature is enabled, in which case
    /// the call is ignored.
    fn set_directed(&mut self, directed: bool) {
        if let Err(err) = self.try_set_directed(directed) {
            precondition_violated(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_simple_graph() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(true, [(0, 1), (0, 2), (1, 3)])
    }

    #[test]
    fn test_directed_adjacency() {
        let graph = create_simple_graph();
        assert!(graph.is_successor(&0, &1));
        assert!(!graph.is_successor(&1, &0));
        assert!(graph.is_predecessor(&1, &0));
        assert!(graph.is_adjacent(&1, &0));
        assert!(graph.is_adjacent(&0, &1));
        assert!(!graph.is_adjacent(&2, &3));
        assert_eq!(graph.successors(&0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.predecessors(&3).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.degree(&1), 2);
    }

    #[test]
    fn test_missing_node_queries_are_empty() {
        let graph = create_simple_graph();
        assert!(!graph.node_exists(&9));
        assert_eq!(graph.successors(&9).count(), 0);
        assert_eq!(graph.predecessors(&9).count(), 0);
        assert!(!graph.is_successor(&9, &0));
        assert!(!graph.is_adjacent(&9, &0));
        assert_eq!(graph.degree(&9), 0);
    }

    #[test]
    fn test_undirected_edges_are_mirrored() {
        let graph = AdjacencyGraph::from_edges(false, [(0, 1), (1, 2)]);
        assert!(graph.is_successor(&1, &0));
        assert_eq!(
            graph.successors(&1).collect::<Vec<_>>(),
            graph.predecessors(&1).collect::<Vec<_>>()
        );
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1), (1, 0), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let graph = AdjacencyGraph::from_edges(true, [(4, 4)]);
        assert_eq!(graph.degree(&4), 2);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_new_node_picks_fresh_id() {
        let mut graph = create_simple_graph();
        let id = graph.new_node(&[0, 7]);
        assert_eq!(id, 4);
        assert!(graph.is_successor(&4, &7));
        assert!(graph.node_exists(&7));
        assert_eq!(AdjacencyGraph::default().new_node(&[]), 0);
    }

    #[test]
    fn test_remove_node_removes_edges() {
        let mut graph = create_simple_graph();
        graph.remove_node(&1);
        assert!(!graph.node_exists(&1));
        assert_eq!(graph.successors(&0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(graph.predecessors(&3).count(), 0);
        assert_eq!(graph.edge_cost(0, 1), None);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_remove_undirected_edge() {
        let mut graph = AdjacencyGraph::from_edges(false, [(0, 1), (1, 2)]);
        graph.remove_edge(&1, &0);
        assert!(!graph.is_adjacent(&0, &1));
        assert!(graph.is_adjacent(&1, &2));
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_edge_costs() {
        let mut graph = AdjacencyGraph::from_weighted_edges(false, [(0, 1, 2.5), (1, 2, 4.0)]);
        assert_eq!(graph.cost(&1, &0), 2.5);
        assert_eq!(graph.total_cost(), 6.5);
        graph.add_edge(2, 3);
        assert_eq!(graph.cost(&3, &2), UNIFORM_COST);
        assert_eq!(
            graph.try_set_edge_cost(0, 3, 1.0),
            Err(GraphError::MissingEdge(0, 3))
        );
    }

    #[test]
    fn test_set_directed_requires_empty_graph() {
        let mut graph = create_simple_graph();
        assert_eq!(graph.try_set_directed(false), Err(GraphError::NotEmpty(4)));
        graph.clear();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.try_set_directed(false), Ok(()));
        assert!(!graph.is_directed());
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    #[should_panic(expected = "no edge from 0 to 3")]
    fn test_set_cost_of_missing_edge_panics() {
        let mut graph = create_simple_graph();
        graph.set_edge_cost(&0, &3, 1.0);
    }
}
