use num_traits::SaturatingAdd;

use crate::algorithms::graph_search::GraphSearch;
use crate::algorithms::graph_search::Node;
use crate::algorithms::graph_search::Ranking;
use crate::cost::Cost;
use crate::data_structures::PriorityQueue;
use crate::error::SearchError;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;

/// Ranks nodes by `f = g + h`, the cost of their plan plus the estimated cost
/// of reaching a goal from them.
///
/// Equal `f` values are expanded in the order they were reached.
#[derive(Debug)]
pub struct HeuristicCost<'h, H>
where
    H: ?Sized,
{
    heuristic: &'h H,
}

impl<'h, H> HeuristicCost<'h, H>
where
    H: ?Sized,
{
    pub fn new(heuristic: &'h H) -> Self {
        Self { heuristic }
    }
}

impl<P, H> Ranking<P> for HeuristicCost<'_, H>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    type Priority = P::Cost;

    #[inline(always)]
    fn rank(&self, problem: &P, node: &Node<P>) -> Result<P::Cost, SearchError> {
        let h = self
            .heuristic
            .h(&node.state, problem)?
            .non_negative("heuristic")?;
        Ok(node.g.saturating_add(&h))
    }
}

/// Searches the nodes with the lowest combined cost and heuristic first.
pub type AStarSearch<'p, 'h, P, H> =
    GraphSearch<'p, P, PriorityQueue<Node<P>, <P as SearchProblem>::Cost>, HeuristicCost<'h, H>>;

/// Finds a plan guided by `heuristic`.
///
/// With [`crate::problem::NullHeuristic`] this is exactly
/// [`crate::algorithms::uniform_cost::uniform_cost_search`].
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let mut search =
        AStarSearch::new(problem, PriorityQueue::new(), HeuristicCost::new(heuristic))?;
    let plan = search.run();
    log::debug!("A* done. {search:?} {:?}", search.stats());
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::NullHeuristic;
    use crate::problems::graph::GraphProblem;

    type Graph = GraphProblem<char, &'static str, u32>;

    /// Two equally cheap routes, one of them looks better.
    ///
    /// ```text
    ///   S -1-> L -1-> M -1-> G
    ///   S -1-> R -1-> N -1-> G
    /// ```
    fn two_routes() -> Graph {
        GraphProblem::new('S')
            .goal('G')
            .edge('S', "left", 'L', 1)
            .edge('S', "right", 'R', 1)
            .edge('L', "left", 'M', 1)
            .edge('R', "right", 'N', 1)
            .edge('M', "left", 'G', 1)
            .edge('N', "right", 'G', 1)
    }

    fn prefers_right(s: &char, _p: &Graph) -> u32 {
        match s {
            'S' => 3,
            'R' => 2,
            'N' => 1,
            'G' => 0,
            _ => 3,
        }
    }

    #[test]
    fn follows_the_heuristic() {
        let problem = two_routes();
        assert_eq!(
            a_star_search(&problem, &NullHeuristic),
            Ok(vec!["left", "left", "left"])
        );
        assert_eq!(
            a_star_search(&problem, &prefers_right),
            Ok(vec!["right", "right", "right"])
        );
    }

    #[test]
    fn closures_are_heuristics() {
        let problem = two_routes();
        let avoid_left = |s: &char, _p: &Graph| if matches!(s, 'L' | 'M') { 10u32 } else { 0u32 };
        assert_eq!(
            a_star_search(&problem, &avoid_left),
            Ok(vec!["right", "right", "right"])
        );
    }

    #[test]
    fn heuristics_can_be_dynamic() {
        let problem = two_routes();
        let h: &dyn Heuristic<Graph> = &NullHeuristic;
        assert_eq!(a_star_search(&problem, h), Ok(vec!["left", "left", "left"]));
    }

    #[test]
    fn unimplemented_heuristics_fail() {
        struct Missing;
        impl Heuristic<Graph> for Missing {}

        assert_eq!(
            a_star_search(&two_routes(), &Missing),
            Err(SearchError::NotImplemented("heuristic"))
        );
    }
}
