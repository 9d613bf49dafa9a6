use num_traits::Num;
use std::fmt::Debug;
use std::hash::Hash;

/// Bounds for node identifiers: equality-comparable, hashable, ordered.
///
/// `Ord` gives the engines a fixed tie-break (smallest identifier) when
/// several nodes share the same minimal distance label, so results are
/// reproducible.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Bounds for edge weights: any numeric type with a zero and a partial
/// order. Integers work directly; floats needing `Ord` (for the heap
/// engine) can be wrapped in `ordered_float::OrderedFloat`.
pub trait Weight: Num + PartialOrd + Copy + Debug {}

impl<T> Weight for T where T: Num + PartialOrd + Copy + Debug {}

/// Trait representing a weighted graph over named nodes
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every node known to the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the outgoing neighbors of a node
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns true if there's a directed edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of a directed edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for mutable graph construction
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adds a node to the graph. Idempotent: returns false if the node
    /// was already present.
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge with the given weight. Both endpoints become
    /// known nodes. Re-adding the same ordered pair overwrites the
    /// stored weight.
    fn add_edge(&mut self, from: N, to: N, weight: W);

    /// Adds an undirected edge: two directed edges of equal weight
    fn add_undirected_edge(&mut self, from: N, to: N, weight: W) {
        self.add_edge(from.clone(), to.clone(), weight);
        self.add_edge(to, from, weight);
    }
}
