pub use crate::adjacency_graph::AdjacencyGraph;
pub use crate::graph::{Coster, Graph, HeuristicCoster, MutableGraph, NodeId};
