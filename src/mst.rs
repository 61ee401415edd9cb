//! Minimum spanning trees.
//!
//! Both builders read a source [`Graph`] and write the tree into a separate
//! [`MutableGraph`], which is cleared and made undirected first.  Edge
//! weights are resolved with [`resolve_cost`], so an explicit cost function
//! beats the graph's [`Coster`](crate::Coster) capability, which beats the
//! uniform cost.
//!
//! Equal weights are broken by the order of [`Graph::edges`]; both builders
//! are deterministic for a deterministic edge enumeration.

use std::collections::HashSet;

use crate::{
    cost::{CostFn, resolve_cost},
    disjoint_set::DisjointSet,
    graph::{Graph, MutableGraph},
    tracing_support::{debug, info_span, trace, warn},
};

/// An edge of a source graph together with its resolved weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

impl<N> WeightedEdge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Sorts edges by ascending weight.  The sort is stable, so equal weights
/// keep their relative order.
pub fn sort_by_weight<N>(edges: &mut [WeightedEdge<N>]) {
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
}

/// Sum of the weights of `edges`.
pub fn total_weight<N>(edges: &[WeightedEdge<N>]) -> f64 {
    edges.iter().map(|edge| edge.weight).sum()
}

fn add_tree_edge<D: MutableGraph>(dst: &mut D, edge: &WeightedEdge<D::Node>) {
    trace!(from = ?edge.from, to = ?edge.to, weight = edge.weight, "tree edge");
    dst.add_edge(edge.from.clone(), edge.to.clone());
    dst.set_edge_cost(&edge.from, &edge.to, edge.weight);
}

/// Builds a minimum spanning tree of `graph` into `dst` with Prim's
/// algorithm, returning the tree edges in the order they were added.
///
/// The tree grows from the first node of [`Graph::nodes`].  If the source is
/// not connected, growth stops once no edge leaves the tree; `dst` then holds
/// the spanning tree of the first node's component only, and a warning is
/// logged.  Use [`kruskal`] to get a spanning forest instead.  An empty
/// source leaves `dst` empty.
pub fn prim<G, D>(
    dst: &mut D,
    graph: &G,
    cost: Option<CostFn<'_, G::Node>>,
) -> Vec<WeightedEdge<G::Node>>
where
    G: Graph,
    D: MutableGraph<Node = G::Node>,
{
    let _span = info_span!("prim").entered();
    let cost = resolve_cost(graph, cost);
    dst.clear();
    dst.set_directed(false);

    let mut nodes = graph.nodes();
    let Some(start) = nodes.next() else {
        return Vec::new();
    };
    let mut remaining: HashSet<G::Node> = nodes.filter(|node| node != &start).collect();
    dst.add_node(start, &[]);

    let edges: Vec<_> = graph.edges().collect();
    let mut tree = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let cheapest = edges
            .iter()
            .filter(|(from, to)| dst.node_exists(from) && remaining.contains(to))
            .map(|(from, to)| WeightedEdge::new(from.clone(), to.clone(), cost(from, to)))
            .min_by(|a, b| a.weight.total_cmp(&b.weight));

        let Some(edge) = cheapest else {
            warn!(
                unreached = remaining.len(),
                "source graph is disconnected; spanning tree is partial"
            );
            break;
        };

        add_tree_edge(dst, &edge);
        remaining.remove(&edge.to);
        tree.push(edge);
    }

    debug!(edges = tree.len(), weight = total_weight(&tree), "prim done");
    tree
}

/// Builds a minimum spanning forest of `graph` into `dst` with Kruskal's
/// algorithm, returning the tree edges in the order they were added.
///
/// Unlike [`prim`], a disconnected source is handled: `dst` receives one
/// tree per connected component.  Isolated nodes have no edges and are not
/// added to `dst`.
pub fn kruskal<G, D>(
    dst: &mut D,
    graph: &G,
    cost: Option<CostFn<'_, G::Node>>,
) -> Vec<WeightedEdge<G::Node>>
where
    G: Graph,
    D: MutableGraph<Node = G::Node>,
{
    let _span = info_span!("kruskal").entered();
    let cost = resolve_cost(graph, cost);
    dst.clear();
    dst.set_directed(false);

    let mut edges: Vec<_> = graph
        .edges()
        .map(|(from, to)| {
            let weight = cost(&from, &to);
            WeightedEdge::new(from, to, weight)
        })
        .collect();
    sort_by_weight(&mut edges);

    let mut sets = DisjointSet::new();
    for node in graph.nodes() {
        sets.make_set(node);
    }

    let mut tree = Vec::new();
    for edge in edges {
        if sets.union(&edge.from, &edge.to) {
            add_tree_edge(dst, &edge);
            tree.push(edge);
        }
    }

    debug!(
        edges = tree.len(),
        trees = sets.num_sets(),
        weight = total_weight(&tree),
        "kruskal done"
    );
    tree
}
