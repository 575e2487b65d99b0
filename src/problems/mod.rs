//! Implementation of search problems.
//!
//! These expose their worlds through `SearchProblem`, so any search can find
//! plans on them.

pub mod graph;
pub mod maze_2d;
