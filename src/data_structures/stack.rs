use crate::data_structures::Frontier;

/// Last-in, first-out frontier.
///
/// Drives Depth-First search.
#[derive(Debug, Clone)]
pub struct Stack<N> {
    items: Vec<N>,
    high_water: usize,
}

impl<N> Stack<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: vec![],
            high_water: 0usize,
        }
    }
    #[must_use]
    pub fn with_capacity(c: usize) -> Self {
        Self {
            items: Vec::with_capacity(c),
            high_water: 0usize,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, item: N) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len());
    }
    /// Removes the most recently pushed item.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<N> {
        self.items.pop()
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

impl<N> Default for Stack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Frontier<N, ()> for Stack<N> {
    #[inline(always)]
    fn push(&mut self, item: N, _priority: ()) {
        Stack::push(self, item)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<N> {
        Stack::pop(self)
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        Stack::len(self)
    }
    fn max_len(&self) -> usize {
        self.high_water
    }
}
