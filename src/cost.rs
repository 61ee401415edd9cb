//! Edge-weight resolution shared by every algorithm that needs costs.
//!
//! The order of precedence is always: an explicitly supplied function, then
//! the graph's own [`Coster`](crate::Coster) /
//! [`HeuristicCoster`](crate::HeuristicCoster) capability, then the uniform
//! cost (every edge weighs `1.0`) or the null heuristic (always `0.0`).

use crate::graph::Graph;

/// Weight of every edge when nothing better is known.
pub const UNIFORM_COST: f64 = 1.0;

/// A borrowed cost or heuristic function over node identifiers.
pub type CostFn<'a, N> = &'a dyn Fn(&N, &N) -> f64;

/// A resolved cost or heuristic function.
pub type ResolvedCostFn<'a, N> = Box<dyn Fn(&N, &N) -> f64 + 'a>;

/// The uniform cost function: every edge costs [`UNIFORM_COST`].
pub fn uniform_cost<N>(_from: &N, _to: &N) -> f64 {
    UNIFORM_COST
}

/// The null heuristic: every estimate is zero.
pub fn null_heuristic<N>(_from: &N, _to: &N) -> f64 {
    0.0
}

/// Picks the cost function to use for `graph`: `explicit` if given, else the
/// graph's [`Graph::as_coster`] capability, else [`uniform_cost`].
pub fn resolve_cost<'a, G>(
    graph: &'a G,
    explicit: Option<CostFn<'a, G::Node>>,
) -> ResolvedCostFn<'a, G::Node>
where
    G: Graph,
{
    if let Some(cost) = explicit {
        Box::new(cost)
    } else if let Some(coster) = graph.as_coster() {
        Box::new(move |from: &G::Node, to: &G::Node| coster.cost(from, to))
    } else {
        Box::new(uniform_cost::<G::Node>)
    }
}

/// Picks the heuristic to use for `graph`: `explicit` if given, else the
/// graph's [`Graph::as_heuristic_coster`] capability, else
/// [`null_heuristic`].
pub fn resolve_heuristic<'a, G>(
    graph: &'a G,
    explicit: Option<CostFn<'a, G::Node>>,
) -> ResolvedCostFn<'a, G::Node>
where
    G: Graph,
{
    if let Some(heuristic) = explicit {
        Box::new(heuristic)
    } else if let Some(coster) = graph.as_heuristic_coster() {
        Box::new(move |from: &G::Node, to: &G::Node| {
            coster.heuristic_cost(from, to)
        })
    } else {
        Box::new(null_heuristic::<G::Node>)
    }
}
