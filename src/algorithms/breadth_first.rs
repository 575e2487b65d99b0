use crate::algorithms::graph_search::GraphSearch;
use crate::algorithms::graph_search::Node;
use crate::algorithms::graph_search::Unranked;
use crate::data_structures::Queue;
use crate::error::SearchError;
use crate::problem::SearchProblem;

/// Searches the shallowest nodes first.
pub type BreadthFirstSearch<'p, P> = GraphSearch<'p, P, Queue<Node<P>>, Unranked>;

/// Finds a plan with the fewest actions.
pub fn breadth_first_search<P>(problem: &P) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem,
{
    let mut search = BreadthFirstSearch::new(problem, Queue::new(), Unranked)?;
    let plan = search.run();
    log::debug!("BFS done. {search:?} {:?}", search.stats());
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::graph::GraphProblem;

    #[test]
    fn finds_fewest_actions() {
        //   S -> A -> G
        //   S -> B -> C -> G
        let problem = GraphProblem::<char, &str, u32>::new('S')
            .goal('G')
            .edge('S', "b", 'B', 1)
            .edge('S', "a", 'A', 1)
            .edge('B', "c", 'C', 1)
            .edge('C', "g", 'G', 1)
            .edge('A', "g", 'G', 1);

        assert_eq!(breadth_first_search(&problem), Ok(vec!["a", "g"]));
    }

    #[test]
    fn ignores_costs() {
        let problem = GraphProblem::<char, &str, u32>::new('S')
            .goal('G')
            .edge('S', "expensive", 'G', 100)
            .edge('S', "cheap", 'A', 1)
            .edge('A', "cheap", 'G', 1);

        assert_eq!(breadth_first_search(&problem), Ok(vec!["expensive"]));
    }
}
