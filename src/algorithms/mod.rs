//! Implementation of search algorithms.
//!
//! These algorithms find plans on generic search problems. They share the
//! [`graph_search::GraphSearch`] skeleton and only differ in their frontier
//! and in how nodes get ranked.

pub mod astar;
pub mod breadth_first;
pub mod depth_first;
pub mod graph_search;
pub mod uniform_cost;

use derive_more::Display;

use crate::error::SearchError;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;

pub use astar::a_star_search;
pub use astar::a_star_search as astar;
pub use breadth_first::breadth_first_search;
pub use breadth_first::breadth_first_search as bfs;
pub use depth_first::depth_first_search;
pub use depth_first::depth_first_search as dfs;
pub use uniform_cost::uniform_cost_search;
pub use uniform_cost::uniform_cost_search as ucs;

/// A search algorithm, selectable by name.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    #[display("depthFirstSearch")]
    #[value(name = "dfs", aliases = ["depthFirstSearch", "depth-first"])]
    DepthFirst,
    #[display("breadthFirstSearch")]
    #[value(name = "bfs", aliases = ["breadthFirstSearch", "breadth-first"])]
    BreadthFirst,
    #[display("uniformCostSearch")]
    #[value(name = "ucs", aliases = ["uniformCostSearch", "uniform-cost"])]
    UniformCost,
    #[display("aStarSearch")]
    #[value(name = "astar", aliases = ["aStarSearch", "a-star"])]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
        Algorithm::AStar,
    ];

    /// The short alias.
    pub fn alias(&self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::AStar => "astar",
        }
    }

    /// Whether the algorithm uses a heuristic.
    pub fn is_informed(&self) -> bool {
        matches!(self, Algorithm::AStar)
    }

    /// Runs the algorithm once on `problem`.
    ///
    /// `heuristic` is only consulted by A*.
    pub fn search<P, H>(&self, problem: &P, heuristic: &H) -> Result<Vec<P::Action>, SearchError>
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        log::debug!("Running {self} on {problem:?}");
        match self {
            Algorithm::DepthFirst => depth_first_search(problem),
            Algorithm::BreadthFirst => breadth_first_search(problem),
            Algorithm::UniformCost => uniform_cost_search(problem),
            Algorithm::AStar => a_star_search(problem, heuristic),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SearchError;

    /// Accepts both the long names and the short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" | "depthFirstSearch" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadthFirstSearch" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "ucs" | "uniformCostSearch" | "uniform-cost" => Ok(Algorithm::UniformCost),
            "astar" | "aStarSearch" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}
