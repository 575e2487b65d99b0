use num_traits::SaturatingAdd;
use num_traits::Zero;

use crate::cost::Cost;
use crate::error::SearchError;
use crate::space::Action;
use crate::space::State;
use crate::space::Successors;

/// A search problem: where to start, where to stop, and how to move.
///
/// Every operation has a default that fails with
/// [`SearchError::NotImplemented`], so a domain that forgets to bind one
/// breaks on first use instead of searching something meaningless.
///
/// Problems are immutable during a search. All search-time data lives in the
/// search itself.
pub trait SearchProblem: std::fmt::Debug {
    type State: State;
    type Action: Action;
    type Cost: Cost;

    /// The single initial State.
    fn start_state(&self) -> Result<Self::State, SearchError> {
        Err(SearchError::NotImplemented("start_state"))
    }

    /// Whether `s` satisfies the goal.
    fn is_goal_state(&self, _s: &Self::State) -> Result<bool, SearchError> {
        Err(SearchError::NotImplemented("is_goal_state"))
    }

    /// The `(state, action, step_cost)` triples reachable from `s`.
    ///
    /// The order must be the same every time `s` is expanded.
    fn successors(
        &self,
        _s: &Self::State,
    ) -> Result<Successors<Self::State, Self::Action, Self::Cost>, SearchError> {
        Err(SearchError::NotImplemented("successors"))
    }

    /// Total cost of executing `actions` from the start State.
    ///
    /// The sequence must be made of legal moves.
    fn cost_of_actions(&self, _actions: &[Self::Action]) -> Result<Self::Cost, SearchError> {
        Err(SearchError::NotImplemented("cost_of_actions"))
    }

    /// Replays `actions` from the start State through `successors`.
    ///
    /// Returns the State reached and the accumulated cost.
    fn follow(&self, actions: &[Self::Action]) -> Result<(Self::State, Self::Cost), SearchError> {
        let mut state = self.start_state()?;
        let mut cost = Self::Cost::zero();
        for (step, action) in actions.iter().enumerate() {
            let (next, _, c) = self
                .successors(&state)?
                .into_iter()
                .find(|(_, a, _)| a == action)
                .ok_or_else(|| SearchError::IllegalAction {
                    action: format!("{action:?}"),
                    step,
                })?;
            state = next;
            cost = cost.saturating_add(&c);
        }
        Ok((state, cost))
    }

    /// Whether `actions` takes the start State to a goal.
    fn is_solution(&self, actions: &[Self::Action]) -> Result<bool, SearchError> {
        match self.follow(actions) {
            Ok((end, _)) => self.is_goal_state(&end),
            Err(SearchError::IllegalAction { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// An estimate of the remaining cost from a State to the nearest goal.
///
/// Plain functions and closures `Fn(&State, &Problem) -> Cost` are
/// heuristics too.
pub trait Heuristic<P>
where
    P: SearchProblem + ?Sized,
{
    fn h(&self, _s: &P::State, _p: &P) -> Result<P::Cost, SearchError> {
        Err(SearchError::NotImplemented("heuristic"))
    }
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    #[inline(always)]
    fn h(&self, s: &P::State, p: &P) -> Result<P::Cost, SearchError> {
        Ok(self(s, p))
    }
}

/// The trivial heuristic.
///
/// Turns A* into Uniform-Cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: SearchProblem + ?Sized,
{
    #[inline(always)]
    fn h(&self, _s: &P::State, _p: &P) -> Result<P::Cost, SearchError> {
        Ok(P::Cost::zero())
    }
}

/// [`NullHeuristic`] as a plain function.
pub fn null_heuristic<P>(_s: &P::State, _p: &P) -> P::Cost
where
    P: SearchProblem + ?Sized,
{
    P::Cost::zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Unbound;

    impl SearchProblem for Unbound {
        type State = u8;
        type Action = char;
        type Cost = u32;
    }

    #[derive(Debug)]
    struct Unestimated;
    impl Heuristic<Unbound> for Unestimated {}

    #[test]
    fn unbound_operations_fail_hard() {
        let p = Unbound;
        assert_eq!(
            p.start_state(),
            Err(SearchError::NotImplemented("start_state"))
        );
        assert_eq!(
            p.is_goal_state(&0),
            Err(SearchError::NotImplemented("is_goal_state"))
        );
        assert_eq!(
            p.successors(&0).map(|s| s.len()),
            Err(SearchError::NotImplemented("successors"))
        );
        assert_eq!(
            p.cost_of_actions(&['a']),
            Err(SearchError::NotImplemented("cost_of_actions"))
        );
        assert_eq!(
            Unestimated.h(&0, &p),
            Err(SearchError::NotImplemented("heuristic"))
        );
    }

    #[test]
    fn null_estimates() {
        let p = Unbound;
        assert_eq!(NullHeuristic.h(&3, &p), Ok(0u32));
        assert_eq!(null_heuristic(&3, &p), 0u32);

        let constant = |_s: &u8, _p: &Unbound| 7u32;
        assert_eq!(Heuristic::<Unbound>::h(&constant, &3, &p), Ok(7u32));
    }
}
