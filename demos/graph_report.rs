//! Reads an edge list (or stdin) and prints the strongly connected
//! components, minimum spanning tree weights and dominators of the graph.
//!
//! Each non-blank line holds `from to [cost]` with integer node ids; `#`
//! starts a comment.  A missing cost defaults to 1.  An edge listed twice
//! keeps the cost of its last line; with `--undirected`, `0 1` and `1 0` are
//! the same edge.
//!
//! Usage:
//!   cargo run --example graph_report -- demos/data/flow.txt
//!   cat demos/data/flow.txt | cargo run --example graph_report -- --start 0 -v

use std::{
    collections::BTreeSet,
    fs,
    io::{self, Read},
    process,
};

use clap::Parser;
use graphkit::{
    AdjacencyGraph, Graph, dominators, is_acyclic, kruskal, post_dominators, prim, tarjan,
    total_weight,
};

/// Print a structural report for a weighted edge list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (use '-' or omit to read from stdin)
    input: Option<String>,

    /// Treat every edge as undirected
    #[arg(long)]
    undirected: bool,

    /// Start node for dominators (defaults to the smallest node id)
    #[arg(long)]
    start: Option<usize>,

    /// End node for post-dominators (defaults to the largest node id)
    #[arg(long)]
    end: Option<usize>,

    /// Log verbosity: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum ParseError {
    #[error("line {line}: expected `from to [cost]`, got {fields} field(s)")]
    FieldCount { line: usize, fields: usize },
    #[error("line {line}: invalid node id {value:?}")]
    Node { line: usize, value: String },
    #[error("line {line}: invalid cost {value:?}")]
    Cost { line: usize, value: String },
}

fn parse_edges(input: &str) -> Result<Vec<(usize, usize, f64)>, ParseError> {
    let mut edges = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        let node = |value: &str| {
            value.parse::<usize>().map_err(|_| ParseError::Node {
                line,
                value: value.to_string(),
            })
        };
        let edge = match fields.as_slice() {
            [from, to] => (node(from)?, node(to)?, 1.0),
            [from, to, cost] => {
                let cost = cost.parse::<f64>().map_err(|_| ParseError::Cost {
                    line,
                    value: cost.to_string(),
                })?;
                (node(from)?, node(to)?, cost)
            }
            _ => {
                return Err(ParseError::FieldCount {
                    line,
                    fields: fields.len(),
                });
            }
        };
        edges.push(edge);
    }
    Ok(edges)
}

fn read_stdin_or_exit() -> String {
    let mut buffer = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut buffer) {
        eprintln!("Failed to read stdin: {err}");
        process::exit(1);
    }
    buffer
}

fn read_file_or_exit(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read '{path}': {err}");
            process::exit(1);
        }
    }
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: u8) {
    use tracing::level_filters::LevelFilter;

    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    graphkit::tracing_support::init_logging(level);
}

#[cfg(not(feature = "tracing"))]
fn init_logging(_verbose: u8) {}

fn format_set(nodes: &BTreeSet<usize>) -> String {
    let ids: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
    format!("{{{}}}", ids.join(", "))
}

fn print_report(graph: &AdjacencyGraph, edges: &[(usize, usize, f64)], args: &Args) {
    println!(
        "Graph: {} nodes, {} edges, {}",
        graph.num_nodes(),
        graph.num_edges(),
        if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        }
    );

    let mut sccs = tarjan(graph);
    sccs.iter_mut().for_each(|scc| scc.sort());
    println!("\nStrongly connected components ({}):", sccs.len());
    for scc in &sccs {
        println!("  {scc:?}");
    }
    if graph.is_directed() {
        println!("Acyclic: {}", is_acyclic(graph));
    }

    // Spanning trees ignore direction.
    let undirected = AdjacencyGraph::from_weighted_edges(false, edges.iter().copied());
    let mut tree = AdjacencyGraph::default();
    let prim_weight = total_weight(&prim(&mut tree, &undirected, None));
    let kruskal_edges = kruskal(&mut tree, &undirected, None);
    println!("\nMinimum spanning tree:");
    println!("  prim weight:    {prim_weight}");
    println!("  kruskal weight: {}", total_weight(&kruskal_edges));
    for edge in &kruskal_edges {
        println!("  {} - {} ({})", edge.from, edge.to, edge.weight);
    }

    let (Some(first), Some(last)) = (graph.nodes().next(), graph.nodes().last()) else {
        return;
    };
    let start = args.start.unwrap_or(first);
    let end = args.end.unwrap_or(last);

    let doms = dominators(&start, graph);
    println!("\nDominators from {start}:");
    for node in graph.nodes() {
        println!("  {node}: {}", format_set(&doms[&node]));
    }

    let post = post_dominators(&end, graph);
    println!("\nPost-dominators to {end}:");
    for node in graph.nodes() {
        println!("  {node}: {}", format_set(&post[&node]));
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = match args.input.as_deref() {
        Some("-") | None => read_stdin_or_exit(),
        Some(path) => read_file_or_exit(path),
    };

    let edges = match parse_edges(&input) {
        Ok(edges) => edges,
        Err(err) => {
            eprintln!("Invalid edge list: {err}");
            process::exit(1);
        }
    };

    let graph = AdjacencyGraph::from_weighted_edges(!args.undirected, edges.iter().copied());
    print_report(&graph, &edges, &args);
}
