use std::fmt::Display;

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cost::Cost;
use crate::error::SearchError;
use crate::float_cost::FloatCost;
use crate::problem::SearchProblem;
use crate::space::Action;
use crate::space::State;
use crate::space::Successors;

/// An explicit weighted directed graph.
///
/// Successors come out in the order their edges were added.
#[derive(Clone, Debug)]
pub struct GraphProblem<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    start: St,
    goals: FxHashSet<St>,
    /// Outgoing `(action, to, cost)` edges of each State.
    edges: FxHashMap<St, Vec<(A, St, C)>>,
    /// States in order of appearance, for printing.
    states: Vec<St>,
    known: FxHashSet<St>,
}

impl<St, A, C> GraphProblem<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(start: St) -> Self {
        let mut g = Self {
            start: start.clone(),
            goals: FxHashSet::default(),
            edges: FxHashMap::default(),
            states: vec![],
            known: FxHashSet::default(),
        };
        g.add_state(start);
        g
    }

    #[must_use]
    pub fn goal(mut self, s: St) -> Self {
        self.add_goal(s);
        self
    }
    #[must_use]
    pub fn edge(mut self, from: St, action: A, to: St, cost: C) -> Self {
        self.add_edge(from, action, to, cost);
        self
    }

    pub fn add_goal(&mut self, s: St) {
        self.add_state(s.clone());
        self.goals.insert(s);
    }
    pub fn add_edge(&mut self, from: St, action: A, to: St, cost: C) {
        self.add_state(from.clone());
        self.add_state(to.clone());
        self.edges.entry(from).or_default().push((action, to, cost));
    }

    fn add_state(&mut self, s: St) {
        if self.known.insert(s.clone()) {
            self.states.push(s);
        }
    }

    pub fn start(&self) -> &St {
        &self.start
    }
    pub fn goals(&self) -> &FxHashSet<St> {
        &self.goals
    }
    /// All the States mentioned by the graph.
    pub fn states(&self) -> &[St] {
        &self.states
    }
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl<St, A, C> SearchProblem for GraphProblem<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    type State = St;
    type Action = A;
    type Cost = C;

    fn start_state(&self) -> Result<St, SearchError> {
        Ok(self.start.clone())
    }

    fn is_goal_state(&self, s: &St) -> Result<bool, SearchError> {
        Ok(self.goals.contains(s))
    }

    fn successors(&self, s: &St) -> Result<Successors<St, A, C>, SearchError> {
        Ok(self
            .edges
            .get(s)
            .map(|out| {
                out.iter()
                    .map(|(a, to, c)| (to.clone(), a.clone(), *c))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn cost_of_actions(&self, actions: &[A]) -> Result<C, SearchError> {
        let mut state = &self.start;
        let mut cost = C::zero();
        for (step, action) in actions.iter().enumerate() {
            let (_, to, c) = self
                .edges
                .get(state)
                .and_then(|out| out.iter().find(|(a, _, _)| a == action))
                .ok_or_else(|| SearchError::IllegalAction {
                    action: format!("{action:?}"),
                    step,
                })?;
            state = to;
            cost = cost.saturating_add(c);
        }
        Ok(cost)
    }
}

/// Prints the textual graph format.
impl<St, A, C> std::fmt::Display for GraphProblem<St, A, C>
where
    St: State + Display,
    A: Action + Display,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "start_state: {}", self.start)?;
        write!(f, "goal_states:")?;
        for s in self.states.iter().filter(|s| self.goals.contains(*s)) {
            write!(f, " {s}")?;
        }
        writeln!(f)?;
        for from in &self.states {
            for (a, to, c) in self.edges.get(from).into_iter().flatten() {
                writeln!(f, "{from} {a} {to} {c}")?;
            }
        }
        Ok(())
    }
}

/// A graph read from text.
pub type TextGraphProblem = GraphProblem<String, String, FloatCost<f64>>;

#[derive(Debug, Error, PartialEq)]
pub enum GraphParseError {
    #[error("Missing 'start_state:' line")]
    MissingStart,
    #[error("Line {line}: duplicated '{key}'")]
    Duplicated { line: usize, key: &'static str },
    #[error("Line {line}: '{content}' is not 'from action to cost'")]
    InvalidEdge { line: usize, content: String },
    #[error("Line {line}: invalid cost '{value}'")]
    InvalidCost { line: usize, value: String },
}

const START_KEY: &str = "start_state:";
const GOALS_KEY: &str = "goal_states:";

/// Parses the textual graph format.
///
/// ```text
/// start_state: A
/// goal_states: G H
/// # from action to cost
/// A A->B B 1.0
/// B B->G G 2
/// ```
///
/// Lines are numbered from 1. Blank lines and `#` comments are skipped.
impl std::convert::TryFrom<&str> for TextGraphProblem {
    type Error = GraphParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut start: Option<String> = None;
        let mut goals: Option<Vec<String>> = None;
        let mut edges = vec![];

        for (i, line) in s.lines().enumerate() {
            let line_number = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix(START_KEY) {
                if start.is_some() {
                    return Err(GraphParseError::Duplicated {
                        line: line_number,
                        key: START_KEY,
                    });
                }
                let rest = rest.trim();
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(GraphParseError::InvalidEdge {
                        line: line_number,
                        content: line.to_string(),
                    });
                }
                start = Some(rest.to_string());
                continue;
            }
            if let Some(rest) = line.strip_prefix(GOALS_KEY) {
                if goals.is_some() {
                    return Err(GraphParseError::Duplicated {
                        line: line_number,
                        key: GOALS_KEY,
                    });
                }
                goals = Some(rest.split_whitespace().map(str::to_string).collect());
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let [from, action, to, cost] = fields.as_slice() else {
                return Err(GraphParseError::InvalidEdge {
                    line: line_number,
                    content: line.to_string(),
                });
            };
            let c: FloatCost<f64> = cost.parse().map_err(|_| GraphParseError::InvalidCost {
                line: line_number,
                value: cost.to_string(),
            })?;
            edges.push((
                from.to_string(),
                action.to_string(),
                to.to_string(),
                c,
            ));
        }

        let mut problem = GraphProblem::new(start.ok_or(GraphParseError::MissingStart)?);
        for goal in goals.unwrap_or_default() {
            problem.add_goal(goal);
        }
        for (from, action, to, cost) in edges {
            problem.add_edge(from, action, to, cost);
        }
        Ok(problem)
    }
}
