use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;
use log::{debug, trace};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Dijkstra's algorithm with repeated-minimum-scan extraction.
///
/// Each round scans the remaining working set for the labeled node with
/// the smallest distance: O(V) per extraction, O(V² + E) overall. This
/// is the reference engine; [`crate::HeapDijkstra`] trades the scan for
/// a binary heap while producing the same results.
#[derive(Debug, Default)]
pub struct MinScanDijkstra;

impl MinScanDijkstra {
    /// Creates a new engine instance
    pub fn new() -> Self {
        MinScanDijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for MinScanDijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "MinScanDijkstra"
    }

    fn compute(&self, graph: &G, source: N) -> Result<ShortestPathResult<N, W>> {
        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();

        // The source labels itself at zero even when the graph has
        // never seen it; everything else then stays unreachable
        distances.insert(source.clone(), W::zero());

        // Working set: every node currently known to the graph
        let mut unsettled: HashSet<N> = graph.nodes().collect();

        loop {
            // Scan for the labeled node with the minimum distance,
            // breaking ties toward the smallest identifier
            let next = unsettled
                .iter()
                .filter_map(|node| distances.get(node).map(|d| (node.clone(), *d)))
                .min_by(|(a, da), (b, db)| {
                    da.partial_cmp(db)
                        .unwrap_or(Ordering::Equal)
                        .then_with(|| a.cmp(b))
                });

            // No labeled node left: the rest of the working set is
            // unreachable from the source
            let (u, dist_u) = match next {
                Some(found) => found,
                None => break,
            };
            unsettled.remove(&u);

            for v in graph.neighbors(&u) {
                // A neighbor listed without a weight entry is skipped,
                // not reported
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
                    trace!("relax {:?} -> {:?}: {:?}", u, v, candidate);
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v, u.clone());
                }
            }
        }

        debug!(
            "min-scan settled {} of {} nodes from {:?}",
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
