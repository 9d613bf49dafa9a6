use crate::algorithm::{min_scan::MinScanDijkstra, Route, ShortestPathAlgorithm};
use crate::graph::traits::{Graph, MutableGraph, NodeId, Weight};
use crate::Result;
use std::collections::{HashMap, HashSet};

/// A weighted graph over named nodes, stored as adjacency lists.
///
/// Nodes are opaque identifiers (strings, integers, small value types).
/// Edges are directed at the storage level; [`MutableGraph::add_undirected_edge`]
/// inserts the two opposite directed edges of equal weight.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Every node known to the graph, whether added explicitly or seen
    /// as an edge endpoint
    nodes: HashSet<N>,

    /// Outgoing edges for each node: node -> [(neighbor, weight)]
    adjacency: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            nodes: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new graph with capacity reserved for the given number
    /// of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        WeightedGraph {
            nodes: HashSet::with_capacity(nodes),
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Computes the shortest route between two nodes in one call,
    /// running the reference engine from `origin` and reconstructing
    /// the path to `destination`.
    ///
    /// Fails with [`crate::Error::NoPath`] when `destination` is not
    /// reachable from `origin`.
    pub fn full_path(&self, origin: &N, destination: &N) -> Result<Route<N, W>> {
        let result = MinScanDijkstra::new().compute(self, origin.clone())?;
        result.path_to(destination)
    }
}

impl<N, W> Graph<N, W> for WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.nodes.iter().cloned())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = N> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(neighbor, _)| neighbor.clone()))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.adjacency.get(from) {
            edges.iter().any(|(neighbor, _)| neighbor == to)
        } else {
            false
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        if let Some(edges) = self.adjacency.get(from) {
            edges
                .iter()
                .find(|(neighbor, _)| neighbor == to)
                .map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}

impl<N, W> MutableGraph<N, W> for WeightedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) {
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());

        let edges = self.adjacency.entry(from).or_default();

        // Overwrite in place when the ordered pair already has an edge,
        // so the neighbor list never holds duplicates
        for edge in edges.iter_mut() {
            if edge.0 == to {
                edge.1 = weight;
                return;
            }
        }

        edges.push((to, weight));
    }
}
