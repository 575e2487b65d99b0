use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod derank;
pub mod heap_primitives;

// Errors and costs
// ----------------
pub mod cost;
pub mod error;
pub mod float_cost;

// Search space and problems
// -------------------------
pub mod problem;
pub mod space;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;
pub mod data_structures;
