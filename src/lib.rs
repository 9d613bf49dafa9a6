//! Routegraph - named-node weighted graphs with shortest-path routing
//!
//! This library provides a small graph-algorithms core: build a weighted
//! graph of named nodes incrementally (edges may be directed or
//! undirected), run a single-source shortest-path computation, and
//! reconstruct the concrete route between any two nodes.
//!
//! Two interchangeable engines implement the same contract: the
//! repeated-minimum-scan [`MinScanDijkstra`] (O(V² + E)) and the
//! binary-heap [`HeapDijkstra`] (O((V + E) log V)). Both produce
//! identical distances and predecessors for any non-negative-weighted
//! graph.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    heap::HeapDijkstra, min_scan::MinScanDijkstra, Route, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::labeled::WeightedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no existing path from {origin} to {destination}: the two nodes are not connected")]
    NoPath { origin: String, destination: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
