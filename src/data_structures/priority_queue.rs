use std::cmp::min;
use std::fmt::Debug;

use crate::data_structures::Frontier;
use crate::derank::derank;

const HEAP_ARITY: usize = 4usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_right(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

/// An item in the heap with its ranking.
///
/// Ranked by `(priority, sequence)`. The sequence number grows with every
/// push, so items with the same priority come out in insertion order.
#[derive(Debug, Clone)]
struct PriorityEntry<N, K> {
    priority: K,
    sequence: u64,
    item: N,
}

impl<N, K: Ord> PartialEq for PriorityEntry<N, K> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}
impl<N, K: Ord> Eq for PriorityEntry<N, K> {}

impl<N, K: Ord> PartialOrd for PriorityEntry<N, K> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<N, K: Ord> Ord for PriorityEntry<N, K> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Minimum-priority-first frontier.
///
/// Drives Uniform-Cost and A* search.
///
/// A d-ary array heap. Every subtree's root ranks better than all the other
/// entries in the subtree.
#[derive(Debug, Clone)]
pub struct PriorityQueue<N, K>
where
    K: Ord,
{
    heap: Vec<PriorityEntry<N, K>>,
    next_sequence: u64,
    high_water: usize,
}

impl<N, K> PriorityQueue<N, K>
where
    K: Ord,
{
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0usize)
    }
    #[must_use]
    pub fn with_capacity(c: usize) -> Self {
        Self {
            heap: Vec::with_capacity(c),
            next_sequence: 0u64,
            high_water: 0usize,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: N, priority: K) {
        self.verify_heap();

        let heap_index = self.heap.len(); // Future heap_index
        self.heap.push(PriorityEntry {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
        self.high_water = self.high_water.max(self.heap.len());
        self.sift_up(heap_index);

        self.verify_heap();
    }

    /// Removes the item with the lowest priority.
    ///
    /// Ties go to the item pushed first.
    pub fn pop(&mut self) -> Option<N> {
        self.verify_heap();

        let entry = match self.heap.len() {
            0 | 1 => self.heap.pop(),
            _ => self.pop_non_trivial_heap(),
        };

        self.verify_heap();
        entry.map(|e| e.item)
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every entry goes after its parent entry, if any.
        for i in 1..self.heap.len() {
            let p = up(i);
            debug_assert!(
                self.heap[p] <= self.heap[i],
                "Entry[{p}] !<= child [{i}]. Out of heap of len={}",
                self.heap.len(),
            );
        }
    }

    // Implementation details

    /// Pops the top entry from a Heap with at least 2 elements.
    ///
    /// Works by unfairly sifting down the top entry to the last level, where it
    /// can be swapped with the very last element of the array and popped.
    /// Temporarily breaks invariants around the entry sifting down unfairly.
    fn pop_non_trivial_heap(&mut self) -> Option<PriorityEntry<N, K>> {
        debug_assert!(
            self.heap.len() > 1,
            "It doesn't get easier. Why are you calling this?"
        );

        let len = self.heap.len();
        let last = len - 1;

        let mut hole = 0;
        loop {
            // Find the best child
            let mut child = down_left(hole);
            if child >= len {
                break;
            }
            debug_assert_eq!(child + HEAP_ARITY, down_right(hole) + 1);
            child += derank(&self.heap[child..min(child + HEAP_ARITY, len)]);

            self.heap.swap(hole, child);
            hole = child;
        }
        // NOTE: The hole made it to the last level, but it may not be at the
        // end of the array.
        debug_assert!(hole <= last, "The hole={hole} is > last={last}");
        if hole != last {
            self.heap.swap(hole, last);
            self.sift_up(hole);
        }

        self.heap.pop()
    }

    /// Raises an entry
    /// Returns it's new index
    #[inline(always)]
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.heap.len(), "Index out of bounds...");

        let mut pos = index;
        while pos != 0 {
            let parent = up(pos);
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }
}

impl<N, K> Default for PriorityQueue<N, K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, K> Frontier<N, K> for PriorityQueue<N, K>
where
    K: Ord,
{
    #[inline(always)]
    fn push(&mut self, item: N, priority: K) {
        PriorityQueue::push(self, item, priority)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<N> {
        PriorityQueue::pop(self)
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
    fn max_len(&self) -> usize {
        self.high_water
    }
}
