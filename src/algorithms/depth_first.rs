use crate::algorithms::graph_search::GraphSearch;
use crate::algorithms::graph_search::Node;
use crate::algorithms::graph_search::Unranked;
use crate::data_structures::Stack;
use crate::error::SearchError;
use crate::problem::SearchProblem;

/// Searches the deepest nodes first.
pub type DepthFirstSearch<'p, P> = GraphSearch<'p, P, Stack<Node<P>>, Unranked>;

/// Finds a plan by always expanding the most recently reached State.
///
/// Terminates on cyclic graphs, but the plan is rarely the shortest.
pub fn depth_first_search<P>(problem: &P) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem,
{
    let mut search = DepthFirstSearch::new(problem, Stack::new(), Unranked)?;
    let plan = search.run();
    log::debug!("DFS done. {search:?} {:?}", search.stats());
    plan
}
