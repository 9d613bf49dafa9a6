use crate::graph::{MutableGraph, WeightedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a connected random graph with n nodes.
///
/// A random spanning tree guarantees connectivity; `extra_edges`
/// additional undirected edges are then scattered over random node
/// pairs. Weights are uniform in 1.0..100.0.
pub fn connected_random_graph(n: usize, extra_edges: usize) -> WeightedGraph<usize, OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");

    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = rand::thread_rng();

    graph.add_node(0);
    for node in 1..n {
        let anchor = rng.gen_range(0..node);
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_undirected_edge(node, anchor, weight);
    }

    let mut added = 0;
    while added < extra_edges && n > 1 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_undirected_edge(a, b, weight);
            added += 1;
        }
    }

    graph
}

/// Generates a width x height grid graph with unit weights and
/// 4-connectivity, nodes indexed row-major
pub fn grid_graph(width: usize, height: usize) -> WeightedGraph<usize, u32> {
    let mut graph = WeightedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            graph.add_node(node);

            if x + 1 < width {
                graph.add_undirected_edge(node, node + 1, 1);
            }
            if y + 1 < height {
                graph.add_undirected_edge(node, node + width, 1);
            }
        }
    }

    graph
}
