use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// A configuration of the searched world.
///
/// Searches only compare and hash States, they never look inside them.
pub trait State: Clone + Debug + PartialEq + Eq + Hash {}
impl<T> State for T where T: Clone + Debug + PartialEq + Eq + Hash {}

/// A label for the transition between two States.
pub trait Action: Clone + Debug + PartialEq + Eq {}
impl<T> Action for T where T: Clone + Debug + PartialEq + Eq {}

/// How many successors fit inline before spilling to the heap.
///
/// Grid worlds have at most 4 neighbours.
pub const INLINE_SUCCESSORS: usize = 4;

/// The `(state, action, step_cost)` triples reachable from a State.
pub type Successors<St, A, C> = SmallVec<[(St, A, C); INLINE_SUCCESSORS]>;
