//! Strongly connected components.
//!
//! [`tarjan`] partitions any [`Graph`] into strongly connected components.
//! On a directed graph, the graph is acyclic exactly when every component is
//! a single node without a reflexive edge (see [`is_acyclic`]).  On an
//! undirected graph the components are the connected "islands", so more than
//! one component means the graph is not connected.

use std::collections::{HashMap, HashSet};

use derivative::Derivative;

use crate::{
    graph::Graph,
    tracing_support::{debug, info_span, trace},
};

/// A node whose successors are still being explored.
struct Frame<N> {
    node: N,
    successors: std::vec::IntoIter<N>,
}

#[derive(Derivative)]
#[derivative(Default(bound = ""))]
struct TarjanState<N> {
    next_index: usize,
    indices: HashMap<N, usize>,
    lowlinks: HashMap<N, usize>,
    /// Nodes of components that are not closed yet, in discovery order.
    stack: Vec<N>,
    on_stack: HashSet<N>,
    /// Explicit replacement for the recursion of the textbook algorithm.
    call_stack: Vec<Frame<N>>,
    sccs: Vec<Vec<N>>,
}

impl<N> TarjanState<N>
where
    N: Eq + std::hash::Hash + Clone,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            lowlinks: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn run<G: Graph<Node = N>>(&mut self, graph: &G) {
        for node in graph.nodes() {
            if !self.indices.contains_key(&node) {
                self.strong_connect(graph, node);
            }
        }
    }

    fn visit<G: Graph<Node = N>>(&mut self, graph: &G, node: N) {
        self.indices.insert(node.clone(), self.next_index);
        self.lowlinks.insert(node.clone(), self.next_index);
        self.next_index += 1;
        self.stack.push(node.clone());
        self.on_stack.insert(node.clone());
        let successors: Vec<N> = graph.successors(&node).collect();
        self.call_stack.push(Frame {
            node,
            successors: successors.into_iter(),
        });
    }

    fn lower_lowlink(&mut self, node: &N, candidate: usize) {
        if let Some(lowlink) = self.lowlinks.get_mut(node) {
            *lowlink = (*lowlink).min(candidate);
        }
    }

    fn strong_connect<G: Graph<Node = N>>(&mut self, graph: &G, root: N) {
        self.visit(graph, root);

        while let Some(frame) = self.call_stack.last_mut() {
            let node = frame.node.clone();
            match frame.successors.next() {
                Some(successor) => {
                    if !self.indices.contains_key(&successor) {
                        self.visit(graph, successor);
                    } else if self.on_stack.contains(&successor) {
                        let candidate = self.lowlinks[&successor];
                        self.lower_lowlink(&node, candidate);
                    }
                }
                None => {
                    self.call_stack.pop();
                    let lowlink = self.lowlinks[&node];
                    if lowlink == self.indices[&node] {
                        self.close_component(&node);
                    }
                    if let Some(parent) = self.call_stack.last() {
                        let parent = parent.node.clone();
                        self.lower_lowlink(&parent, lowlink);
                    }
                }
            }
        }
    }

    /// Pops the traversal stack down to and including `root`.
    fn close_component(&mut self, root: &N) {
        let mut scc = Vec::new();
        while let Some(node) = self.stack.pop() {
            self.on_stack.remove(&node);
            let is_root = &node == root;
            scc.push(node);
            if is_root {
                break;
            }
        }
        trace!(size = scc.len(), "closed component");
        self.sccs.push(scc);
    }
}

/// Returns the strongly connected components of `graph` using Tarjan's
/// algorithm.
///
/// Every node appears in exactly one component.  Components come out in
/// reverse topological order of the condensation, and the nodes within a
/// component in the order they were popped; neither order is meaningful
/// beyond being deterministic for a deterministic [`Graph::nodes`] and
/// [`Graph::successors`].
pub fn tarjan<G: Graph>(graph: &G) -> Vec<Vec<G::Node>> {
    let num_nodes = graph.num_nodes();
    let _span = info_span!("tarjan", num_nodes).entered();

    let mut state = TarjanState::with_capacity(num_nodes);
    state.run(graph);

    debug!(num_sccs = state.sccs.len(), "strongly connected components");
    state.sccs
}

/// Returns true if a directed graph has no cycles, counting a reflexive edge
/// as a cycle.
pub fn is_acyclic<G: Graph>(graph: &G) -> bool {
    tarjan(graph).iter().all(|scc| match scc.as_slice() {
        [node] => !graph.is_successor(node, node),
        _ => false,
    })
}

/// Partitions an undirected graph into connected components.
#[cfg(feature = "pathfinding")]
pub fn connected_components<G: Graph>(graph: &G) -> Vec<HashSet<G::Node>> {
    let _span = info_span!("connected_components").entered();
    let nodes = graph.nodes().collect::<Vec<_>>();
    pathfinding::prelude::connected_components(&nodes, |node| {
        graph.successors(node).collect::<Vec<_>>()
    })
}
