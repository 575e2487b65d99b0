//! Frontier data structures.
//!
//! Searches keep their not-yet-expanded nodes in one of these. They only
//! differ in which node comes out next.

pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;

/// A collection of nodes waiting to be expanded.
///
/// `K` is the priority a node is pushed with. Frontiers that order nodes by
/// arrival use `()` and ignore it.
///
/// There's no peeking and no removal by identity.
pub trait Frontier<N, K> {
    fn push(&mut self, item: N, priority: K);
    fn pop(&mut self) -> Option<N>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    /// The largest size this frontier ever reached.
    fn max_len(&self) -> usize;
}
