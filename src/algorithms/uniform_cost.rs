use crate::algorithms::graph_search::GraphSearch;
use crate::algorithms::graph_search::Node;
use crate::algorithms::graph_search::Ranking;
use crate::data_structures::PriorityQueue;
use crate::error::SearchError;
use crate::problem::SearchProblem;

/// Ranks nodes by the cost of their plan.
#[derive(Copy, Clone, Debug, Default)]
pub struct PathCost;

impl<P> Ranking<P> for PathCost
where
    P: SearchProblem,
{
    type Priority = P::Cost;

    #[inline(always)]
    fn rank(&self, _problem: &P, node: &Node<P>) -> Result<P::Cost, SearchError> {
        Ok(node.g)
    }
}

/// Searches the cheapest nodes first.
pub type UniformCostSearch<'p, P> =
    GraphSearch<'p, P, PriorityQueue<Node<P>, <P as SearchProblem>::Cost>, PathCost>;

/// Finds a plan of least total cost.
///
/// States are never re-opened through a cheaper path, so the plan is only
/// guaranteed to be the cheapest when the first path reaching each State is.
pub fn uniform_cost_search<P>(problem: &P) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem,
{
    let mut search = UniformCostSearch::new(problem, PriorityQueue::new(), PathCost)?;
    let plan = search.run();
    log::debug!("UCS done. {search:?} {:?}", search.stats());
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::graph::GraphProblem;

    #[test]
    fn finds_cheapest_plan() {
        //   S -1-> A -1-> B -1-> C
        //   S -5-> D -1-> C
        //   C, D -> G
        let problem = GraphProblem::<char, &str, u32>::new('S')
            .goal('G')
            .edge('S', "S->D", 'D', 5)
            .edge('S', "S->A", 'A', 1)
            .edge('A', "A->B", 'B', 1)
            .edge('B', "B->C", 'C', 1)
            .edge('D', "D->G", 'G', 1)
            .edge('C', "C->G", 'G', 1);

        // S->A->B->C->G costs 4, S->D->G costs 6.
        assert_eq!(
            uniform_cost_search(&problem),
            Ok(vec!["S->A", "A->B", "B->C", "C->G"])
        );
    }

    #[test]
    fn ranks_by_cumulative_cost() {
        // Ranking by the last step alone would expand D before C.
        //   S -10-> A -30-> C -1-> G     C at 40
        //   S -20-> B -25-> D -1-> G     D at 45
        let problem = GraphProblem::<char, &str, u32>::new('S')
            .goal('G')
            .edge('S', "S->A", 'A', 10)
            .edge('S', "S->B", 'B', 20)
            .edge('A', "A->C", 'C', 30)
            .edge('B', "B->D", 'D', 25)
            .edge('C', "C->G", 'G', 1)
            .edge('D', "D->G", 'G', 1);

        assert_eq!(
            uniform_cost_search(&problem),
            Ok(vec!["S->A", "A->C", "C->G"])
        );
    }

    #[test]
    fn first_path_is_final() {
        // B is reached first through the expensive edge and never re-opened,
        // so the goal is found through it.
        //   S -10-> B -1-> G
        //   S -1-> A -1-> B
        let problem = GraphProblem::<char, &str, u32>::new('S')
            .goal('G')
            .edge('S', "S->B", 'B', 10)
            .edge('S', "S->A", 'A', 1)
            .edge('A', "A->B", 'B', 1)
            .edge('B', "B->G", 'G', 1);

        assert_eq!(uniform_cost_search(&problem), Ok(vec!["S->B", "B->G"]));
    }
}
