use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};
use num_traits::Zero;
use std::collections::HashMap;

/// Result of a shortest path computation from a single source.
///
/// The maps are an immutable snapshot of the graph state at the time of
/// the computation; they do not track later mutations of the graph.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Best known cumulative distance from the source, for every node
    /// reachable from it. Unreachable nodes carry no entry.
    pub distances: HashMap<N, W>,

    /// For each labeled node, the node immediately preceding it on its
    /// best path from the source. The source itself has no entry.
    pub predecessors: HashMap<N, N>,

    /// Source node of the computation
    pub source: N,
}

/// A concrete shortest route between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N, W> {
    /// Total distance along the route
    pub distance: W,

    /// Ordered node sequence from origin to destination, inclusive
    pub nodes: Vec<N>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Shortest distance from the source to the given node, or `None`
    /// if it is unreachable
    pub fn distance_to(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Reconstructs the full route from the source to `destination` by
    /// walking the predecessor map backward.
    ///
    /// When `destination` equals the source, the route is the
    /// single-node sequence with distance zero. An unreachable
    /// destination yields [`Error::NoPath`].
    pub fn path_to(&self, destination: &N) -> Result<Route<N, W>> {
        if *destination == self.source {
            return Ok(Route {
                distance: W::zero(),
                nodes: vec![self.source.clone()],
            });
        }

        let distance = match self.distances.get(destination) {
            Some(distance) => *distance,
            None => return Err(self.no_path(destination)),
        };

        let mut nodes = vec![destination.clone()];
        let mut current = destination.clone();
        while current != self.source {
            match self.predecessors.get(&current) {
                Some(previous) => {
                    current = previous.clone();
                    nodes.push(current.clone());
                }
                // A labeled node with no predecessor chain back to the
                // source: treat as unreachable rather than panic
                None => return Err(self.no_path(destination)),
            }
        }
        nodes.reverse();

        Ok(Route { distance, nodes })
    }

    fn no_path(&self, destination: &N) -> Error {
        Error::NoPath {
            origin: format!("{:?}", self.source),
            destination: format!("{:?}", destination),
        }
    }
}

/// Trait for single-source shortest path engines.
///
/// Implementations must produce identical distances and predecessor
/// chains for any graph with non-negative weights, whatever their
/// internal extraction strategy.
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to every reachable node
    fn compute(&self, graph: &G, source: N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the engine
    fn name(&self) -> &'static str;
}
