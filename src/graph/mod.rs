pub mod generators;
pub mod labeled;
pub mod traits;

pub use labeled::WeightedGraph;
pub use traits::{Graph, MutableGraph, NodeId, Weight};
