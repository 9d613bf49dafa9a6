use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;
use log::debug;
use num_traits::Zero;
use std::collections::HashMap;

/// Dijkstra's algorithm with binary-heap extraction.
///
/// Same contract as [`crate::MinScanDijkstra`], O((V + E) log V) instead
/// of O(V² + E). Requires `Ord` weights; wrap floats in
/// `ordered_float::OrderedFloat`.
#[derive(Debug, Default)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    /// Creates a new engine instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for HeapDijkstra
where
    N: NodeId,
    W: Weight + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "HeapDijkstra"
    }

    fn compute(&self, graph: &G, source: N) -> Result<ShortestPathResult<N, W>> {
        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();

        distances.insert(source.clone(), W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale queue entry: a shorter path to u was already settled
            if let Some(current) = distances.get(&u) {
                if *current < dist_u {
                    continue;
                }
            }

            for v in graph.neighbors(&u) {
                let weight = match graph.edge_weight(&u, &v) {
                    Some(weight) => weight,
                    None => continue,
                };

                let candidate = dist_u + weight;
                let improves = match distances.get(&v) {
                    None => true,
                    Some(current) => candidate < *current,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "heap dijkstra settled {} of {} nodes from {:?}",
            distances.len(),
            graph.node_count(),
            source
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
