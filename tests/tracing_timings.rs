#![cfg(feature = "tracing")]

use graphkit::{
    AdjacencyGraph, dominators, kruskal, prim, tarjan,
    tracing_support::{dump_method_timings, method_timings, reset_method_timings},
};

#[test]
fn test_algorithms_record_span_timings() {
    reset_method_timings();

    let graph = AdjacencyGraph::from_weighted_edges(
        false,
        [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)],
    );
    let mut dst = AdjacencyGraph::default();
    tarjan(&graph);
    tarjan(&graph);
    prim(&mut dst, &graph, None);
    kruskal(&mut dst, &graph, None);
    dominators(&0, &graph);

    let timings = method_timings();
    dump_method_timings();
    let count = |name: &str| {
        timings
            .iter()
            .find(|timing| timing.name == name)
            .map_or(0, |timing| timing.count)
    };
    assert_eq!(count("tarjan"), 2);
    assert_eq!(count("prim"), 1);
    assert_eq!(count("kruskal"), 1);
    assert_eq!(count("dominators"), 1);
    assert_eq!(count("post_dominators"), 0);
}
