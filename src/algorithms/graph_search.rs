use std::fmt::Debug;

use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::data_structures::Frontier;
use crate::error::SearchError;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::State;

/// A State waiting in the frontier with the whole plan that reached it.
///
/// Carrying the plan trades memory for not needing a search tree to walk
/// back through once a goal shows up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub state: St,
    pub actions: Vec<A>,
    /// Cost of `actions`.
    pub g: C,
}

impl<St, A, C> SearchNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn root(state: St) -> Self {
        Self {
            state,
            actions: vec![],
            g: C::zero(),
        }
    }

    /// The node reached by taking `action` from here.
    #[must_use]
    pub fn child(&self, state: St, action: A, step_cost: C) -> Self {
        Self {
            state,
            actions: self.extended_plan(action),
            g: self.g.saturating_add(&step_cost),
        }
    }

    #[must_use]
    pub fn extended_plan(&self, action: A) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        actions
    }
}

/// The `SearchNode` type of a problem.
pub type Node<P> = SearchNode<
    <P as SearchProblem>::State,
    <P as SearchProblem>::Action,
    <P as SearchProblem>::Cost,
>;

/// Decides the priority each node enters the frontier with.
pub trait Ranking<P>
where
    P: SearchProblem,
{
    type Priority;

    fn rank(&self, problem: &P, node: &Node<P>) -> Result<Self::Priority, SearchError>;
}

/// No priority. The frontier's own discipline orders the nodes.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unranked;

impl<P> Ranking<P> for Unranked
where
    P: SearchProblem,
{
    type Priority = ();

    #[inline(always)]
    fn rank(&self, _problem: &P, _node: &Node<P>) -> Result<(), SearchError> {
        Ok(())
    }
}

/// Where a search is at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// The start node is in the frontier, nothing was expanded yet.
    Initialized,
    Expanding,
    GoalFound,
    Exhausted,
    /// The problem or the ranking failed mid-expansion.
    Failed,
}

impl SearchPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchPhase::GoalFound | SearchPhase::Exhausted | SearchPhase::Failed
        )
    }
}

/// The outcome of a single expansion step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus<A> {
    Expanding,
    GoalFound(Vec<A>),
    Exhausted,
}

/// Counters for a single search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Nodes pushed into the frontier, including the start.
    pub generated: usize,
    /// Largest frontier size.
    pub max_frontier: usize,
}

/// Graph search over a `SearchProblem`.
///
/// The four classic searches share this skeleton and only differ in the
/// frontier `F` and the `Ranking` `R` used to push nodes.
///
/// - States are marked visited when pushed, and a visited State is never
///   pushed again. Its first path is final, there's no cost relaxation.
/// - Successors are goal-checked when generated, and the first goal found
///   ends the search.
///
/// With cost-ranked frontiers this means the returned plan is only
/// guaranteed to be optimal when the first path found to every State is
/// already the cheapest one.
pub struct GraphSearch<'p, P, F, R>
where
    P: SearchProblem,
    F: Frontier<Node<P>, R::Priority>,
    R: Ranking<P>,
{
    problem: &'p P,
    frontier: F,
    /// States that were already pushed. Grows monotonically.
    visited: FxHashSet<P::State>,
    ranking: R,

    phase: SearchPhase,
    plan: Option<Vec<P::Action>>,
    error: Option<SearchError>,
    stats: SearchStats,
}

impl<'p, P, F, R> GraphSearch<'p, P, F, R>
where
    P: SearchProblem,
    F: Frontier<Node<P>, R::Priority>,
    R: Ranking<P>,
{
    /// Pushes the start node into `frontier`.
    ///
    /// A start State that's already a goal is solved by the empty plan right
    /// away.
    pub fn new(problem: &'p P, frontier: F, ranking: R) -> Result<Self, SearchError> {
        let mut search = Self {
            problem,
            frontier,
            visited: FxHashSet::default(),
            ranking,

            phase: SearchPhase::Initialized,
            plan: None,
            error: None,
            stats: SearchStats::default(),
        };

        let start = problem.start_state()?;
        if problem.is_goal_state(&start)? {
            log::debug!("Start {start:?} is already a goal");
            search.phase = SearchPhase::GoalFound;
            search.plan = Some(vec![]);
            return Ok(search);
        }

        log::debug!("Searching from {start:?}");
        search.push(Node::<P>::root(start))?;
        Ok(search)
    }

    #[inline(always)]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            max_frontier: self.frontier.max_len(),
            ..self.stats
        }
    }

    /// Whether `s` was pushed at some point.
    #[inline(always)]
    pub fn is_visited(&self, s: &P::State) -> bool {
        self.visited.contains(s)
    }

    #[inline(always)]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Expands one node.
    ///
    /// Once a terminal status was reached it's returned again. A failed
    /// expansion leaves the frontier half-updated, so the search stays
    /// failed and keeps returning the same error.
    pub fn step(&mut self) -> Result<SearchStatus<P::Action>, SearchError> {
        match self.phase {
            SearchPhase::GoalFound => {
                return Ok(SearchStatus::GoalFound(
                    self.plan.clone().unwrap_or_default(),
                ));
            }
            SearchPhase::Exhausted => return Ok(SearchStatus::Exhausted),
            SearchPhase::Failed => {
                return Err(self
                    .error
                    .clone()
                    .unwrap_or(SearchError::NotImplemented("step")));
            }
            SearchPhase::Initialized | SearchPhase::Expanding => {}
        }
        self.phase = SearchPhase::Expanding;

        self.expand().inspect_err(|e| {
            log::debug!("Search failed: {e}");
            self.phase = SearchPhase::Failed;
            self.error = Some(e.clone());
        })
    }

    fn expand(&mut self) -> Result<SearchStatus<P::Action>, SearchError> {
        let Some(node) = self.frontier.pop() else {
            log::debug!(
                "Frontier exhausted after expanding {} nodes",
                self.stats.expanded
            );
            self.phase = SearchPhase::Exhausted;
            return Ok(SearchStatus::Exhausted);
        };
        self.stats.expanded += 1;
        log::trace!("Expanding {:?} (g={})", node.state, node.g);

        for (s, a, c) in self.problem.successors(&node.state)? {
            let c = c.non_negative("step cost")?;
            if self.visited.contains(&s) {
                continue;
            }
            if self.problem.is_goal_state(&s)? {
                let plan = node.extended_plan(a);
                log::debug!(
                    "Goal {s:?} found with {} actions after expanding {} nodes",
                    plan.len(),
                    self.stats.expanded
                );
                self.phase = SearchPhase::GoalFound;
                self.plan = Some(plan.clone());
                return Ok(SearchStatus::GoalFound(plan));
            }
            self.push(node.child(s, a, c))?;
        }

        Ok(SearchStatus::Expanding)
    }

    /// Runs the search to completion.
    ///
    /// An exhausted frontier is reported as [`SearchError::NoSolution`].
    pub fn run(&mut self) -> Result<Vec<P::Action>, SearchError> {
        loop {
            match self.step()? {
                SearchStatus::Expanding => continue,
                SearchStatus::GoalFound(plan) => return Ok(plan),
                SearchStatus::Exhausted => {
                    return Err(SearchError::NoSolution {
                        expanded: self.stats.expanded,
                    });
                }
            }
        }
    }

    #[inline(always)]
    fn push(&mut self, node: Node<P>) -> Result<(), SearchError> {
        debug_assert!(!self.visited.contains(&node.state));

        let priority = self.ranking.rank(self.problem, &node)?;
        self.visited.insert(node.state.clone());
        self.frontier.push(node, priority);
        self.stats.generated += 1;
        Ok(())
    }

    pub fn write_memory_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        let stats = self.stats();
        writeln!(out, "GraphSearch Stats:")?;
        writeln!(
            out,
            "  - Expanded nodes:  {}",
            stats.expanded.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Generated nodes: {}",
            stats.generated.separate_with_commas()
        )?;

        let s = size_of::<Node<P>>();
        writeln!(
            out,
            "  - |Frontier|:  {} ({})",
            self.frontier.len().separate_with_commas(),
            Size::from_bytes(self.frontier.len() * s)
        )?;
        writeln!(
            out,
            "  - |Frontier|*: {} ({})",
            stats.max_frontier.separate_with_commas(),
            Size::from_bytes(stats.max_frontier * s)
        )?;

        let s = size_of::<P::State>();
        let l = self.visited.len();
        let c = self.visited.capacity();
        writeln!(
            out,
            "  - |Visited|:   {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Visited|*:  {} ({})",
            c.separate_with_commas(),
            Size::from_bytes(c * s)
        )?;

        Ok(())
    }
}

impl<P, F, R> Debug for GraphSearch<'_, P, F, R>
where
    P: SearchProblem,
    F: Frontier<Node<P>, R::Priority>,
    R: Ranking<P>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GraphSearch{{{:?}, ({} visited, {} in frontier)}}",
            self.phase,
            self.visited.len(),
            self.frontier.len()
        )
    }
}
