//! Classic graph algorithms written against a small capability interface.
//!
//! Any type implementing [`Graph`] can be fed to:
//!
//! - [`is_path`], which checks a node sequence against the graph's edges,
//! - [`tarjan`], which finds strongly connected components,
//! - [`prim`] and [`kruskal`], which build a minimum spanning tree into a
//!   [`MutableGraph`],
//! - [`dominators`] and [`post_dominators`].
//!
//! Edge weights come from an explicit function, the graph's own [`Coster`]
//! capability, or the uniform cost, in that order (see [`cost`]).
//! [`AdjacencyGraph`] is a ready-made implementation of every trait.
//!
//! # Features
//!
//! - `tracing` (default): spans and events from the algorithms, plus the
//!   timing subscriber in [`tracing_support`].
//! - `pathfinding` (default): [`connected_components`].
//! - `unchecked`: caller errors on [`AdjacencyGraph`] are ignored instead of
//!   panicking.

pub mod adjacency_graph;
pub mod cost;
pub mod disjoint_set;
pub mod dominators;
pub mod error;
pub mod graph;
pub mod mst;
pub mod path;
pub mod prelude;
pub mod scc;
pub mod tracing_support;

#[doc(hidden)]
pub mod test_support;

pub use adjacency_graph::AdjacencyGraph;
pub use cost::{UNIFORM_COST, null_heuristic, resolve_cost, resolve_heuristic, uniform_cost};
pub use disjoint_set::DisjointSet;
pub use dominators::{DominatorMap, dominators, post_dominators};
pub use error::GraphError;
pub use graph::{Coster, Graph, HeuristicCoster, MutableGraph, NodeId};
pub use mst::{WeightedEdge, kruskal, prim, sort_by_weight, total_weight};
pub use path::is_path;
#[cfg(feature = "pathfinding")]
pub use scc::connected_components;
pub use scc::{is_acyclic, tarjan};
