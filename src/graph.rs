//! `Graph` and `MutableGraph` are the capability traits every algorithm in
//! this crate is written against.  `Graph` answers adjacency, existence and
//! enumeration queries; `MutableGraph` extends it with the operations needed
//! to fill a destination graph, such as a minimum spanning tree.
//!
//! Edge weights are not part of the base model.  A graph that carries real
//! weights implements [`Coster`] (and optionally [`HeuristicCoster`]) and
//! advertises it through [`Graph::as_coster`] /
//! [`Graph::as_heuristic_coster`], so that algorithms taking a plain `G: Graph`
//! can still discover the capability at runtime.  See [`crate::cost`] for the
//! precedence rules.
//!
//! Queries about nodes that do not exist never fail: they return `false` or
//! an empty iterator.
use std::{collections::HashSet, fmt::Debug, hash::Hash};

/// A trait representing a node identifier in a graph.
///
/// This is a marker trait with a blanket implementation, so any small
/// comparable type (`usize`, `u32`, `&str`, newtypes, ...) can be used as a
/// node identifier.  `Ord` is required so that results can be reported in a
/// deterministic order.
pub trait NodeId: Eq + Hash + Clone + Debug + Ord {}

impl<T> NodeId for T where T: Eq + Hash + Clone + Debug + Ord {}

/// A read-only view of a directed or undirected graph.
///
/// Implementors must provide [`Self::successors`], [`Self::predecessors`],
/// [`Self::nodes`] and [`Self::is_directed`]; everything else has a default
/// built on those, which implementations may override with something faster.
///
/// An undirected graph is represented by making successors and predecessors
/// identical, i.e. every edge is reported in both directions.
pub trait Graph {
    type Node: NodeId;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool;

    // Nodes

    /// Gets an iterator over all node identifiers in the graph.  Algorithms
    /// visit nodes in this order, so a deterministic enumeration gives
    /// deterministic results.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Checks whether a node with the given identifier is in the graph.
    fn node_exists(&self, node: &Self::Node) -> bool {
        self.nodes().any(|n| &n == node)
    }

    // Adjacency

    /// Gets an iterator over the nodes reachable by an outgoing edge from
    /// `node`.  Empty if `node` does not exist.
    fn successors(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Gets an iterator over the nodes with an edge into `node`.  Empty if
    /// `node` does not exist.
    fn predecessors(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Checks whether `successor` appears in [`Self::successors`] of `node`.
    fn is_successor(&self, node: &Self::Node, successor: &Self::Node) -> bool {
        self.successors(node).any(|n| &n == successor)
    }

    /// Checks whether `predecessor` appears in [`Self::predecessors`] of
    /// `node`.
    fn is_predecessor(&self, node: &Self::Node, predecessor: &Self::Node) -> bool {
        self.predecessors(node).any(|n| &n == predecessor)
    }

    /// Checks whether the two nodes are joined by an edge in either
    /// direction.
    fn is_adjacent(&self, node: &Self::Node, neighbor: &Self::Node) -> bool {
        self.is_successor(node, neighbor) || self.is_predecessor(node, neighbor)
    }

    /// Number of successors plus number of predecessors.  A reflexive edge
    /// is therefore counted twice.
    fn degree(&self, node: &Self::Node) -> usize {
        self.successors(node).count() + self.predecessors(node).count()
    }

    // Edges

    /// Gets an iterator over every edge as a `(from, to)` pair.  Undirected
    /// graphs report each edge once per direction.
    fn edges(&self) -> impl Iterator<Item = (Self::Node, Self::Node)> + '_ {
        let mut edges = Vec::new();
        for from in self.nodes() {
            let mut seen = HashSet::new();
            for to in self.successors(&from) {
                if seen.insert(to.clone()) {
                    edges.push((from.clone(), to));
                }
            }
        }
        edges.into_iter()
    }

    /// Gets the number of edges reported by [`Self::edges`].
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    // Optional capabilities

    /// Returns this graph as a [`Coster`] if it has real edge weights.
    fn as_coster(&self) -> Option<&dyn Coster<Self::Node>> {
        None
    }

    /// Returns this graph as a [`HeuristicCoster`] if it provides a
    /// heuristic between arbitrary nodes.
    fn as_heuristic_coster(&self) -> Option<&dyn HeuristicCoster<Self::Node>> {
        None
    }
}

/// A graph with an actual cost between adjacent nodes, i.e. a weighted
/// graph.
///
/// Only edges that exist need to be answered; asking for the cost of a
/// non-edge is a caller error with unspecified result.
pub trait Coster<N> {
    fn cost(&self, from: &N, to: &N) -> f64;
}

/// A [`Coster`] that can also estimate the cost between any two nodes.  An
/// implementation that has no useful estimate can return `0.0`, which is the
/// null heuristic.
pub trait HeuristicCoster<N>: Coster<N> {
    fn heuristic_cost(&self, from: &N, to: &N) -> f64;
}

/// A graph that can be changed in arbitrary ways.
///
/// Algorithms that write results into a `MutableGraph` never receive the
/// same object as their read-only source.
pub trait MutableGraph: Graph {
    /// Adds a node with a fresh identifier chosen by the graph, plus edges to
    /// each of `successors`, and returns the new identifier.
    fn new_node(&mut self, successors: &[Self::Node]) -> Self::Node;

    /// Adds a node with the given identifier, plus edges to each of
    /// `successors`.  Missing successor nodes are created; reciprocal edges
    /// are added if the graph is undirected.
    fn add_node(&mut self, node: Self::Node, successors: &[Self::Node]);

    /// Adds the edge `from -> to` (both directions when undirected), creating
    /// either endpoint if absent.  The graph chooses the initial cost.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node);

    /// Sets the cost of an existing edge.  For a directed graph only
    /// `from -> to` is affected.  Setting the cost of an edge that was never
    /// added is a caller error.
    fn set_edge_cost(&mut self, from: &Self::Node, to: &Self::Node, cost: f64);

    /// Removes a node and every edge touching it.
    fn remove_node(&mut self, node: &Self::Node);

    /// Removes an edge, and its reciprocal when undirected.
    fn remove_edge(&mut self, from: &Self::Node, to: &Self::Node);

    /// Removes all nodes and edges.
    fn clear(&mut self);

    /// Switches the graph between directed and undirected.  Only ever called
    /// on an empty graph.
    fn set_directed(&mut self, directed: bool);
}
