use std::collections::VecDeque;

use crate::data_structures::Frontier;

/// First-in, first-out frontier.
///
/// Drives Breadth-First search.
#[derive(Debug, Clone)]
pub struct Queue<N> {
    items: VecDeque<N>,
    high_water: usize,
}

impl<N> Queue<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            high_water: 0usize,
        }
    }
    #[must_use]
    pub fn with_capacity(c: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(c),
            high_water: 0usize,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, item: N) {
        self.items.push_back(item);
        self.high_water = self.high_water.max(self.items.len());
    }
    /// Removes the least recently pushed item.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<N> {
        self.items.pop_front()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<N> Default for Queue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Frontier<N, ()> for Queue<N> {
    #[inline(always)]
    fn push(&mut self, item: N, _priority: ()) {
        Queue::push(self, item)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<N> {
        Queue::pop(self)
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        Queue::len(self)
    }
    fn max_len(&self) -> usize {
        self.high_water
    }
}
