use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over (node, priority) pairs, backed by the
/// standard binary heap. Ties on priority pop in node order, keeping
/// extraction deterministic.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, node: V, priority: P) {
        self.heap.push(Reverse((priority, node)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, node))| (node, priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, node))| (node.clone(), *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
