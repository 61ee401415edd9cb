use std::fmt::Debug;

/// Precondition violations detected by the checked mutation methods of
/// [`AdjacencyGraph`](crate::AdjacencyGraph).
///
/// The algorithms themselves never produce errors; these only surface when a
/// caller mutates a graph in a way the graph contract leaves undefined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<N: Debug> {
    #[error("no edge from {0:?} to {1:?}")]
    MissingEdge(N, N),
    #[error("directedness can only be changed on an empty graph ({0} nodes present)")]
    NotEmpty(usize),
}
