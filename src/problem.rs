//! The problem contract shared by every search procedure.

use crate::error::SearchError;
use rand::Rng;

/// A finite, lazily produced sequence of neighbor states.
pub type Neighbors<'a, S> = Box<dyn Iterator<Item = S> + 'a>;

/// Defines a local search problem.
///
/// The user owns the state encoding and the cost function. Search
/// procedures only clone states, evaluate their cost and replace the
/// current state with a whole new one; they never look inside.
///
/// `random_state` and `cost` are always required. `neighbors` is used by
/// hill climbing and `random_neighbor` by simulated annealing; a problem
/// that targets only one procedure can leave the other at its default,
/// which fails with [`SearchError::NotImplemented`] on first use.
///
/// # Minimization
///
/// Lower cost is better. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_localsearch::{Neighbors, Problem, SearchError};
///
/// struct Parabola;
///
/// impl Problem for Parabola {
///     type State = i64;
///
///     fn random_state<R: Rng>(&self, rng: &mut R) -> i64 {
///         rng.random_range(-100..=100)
///     }
///
///     fn neighbors<'a, R: Rng>(
///         &'a self,
///         state: &'a i64,
///         _rng: &'a mut R,
///     ) -> Result<Neighbors<'a, i64>, SearchError> {
///         Ok(Box::new([state - 1, state + 1].into_iter()))
///     }
///
///     fn random_neighbor<R: Rng>(
///         &self,
///         state: &i64,
///         amplitude: f64,
///         _temperature_fraction: f64,
///         rng: &mut R,
///     ) -> Result<i64, SearchError> {
///         let step = amplitude.round().max(1.0) as i64;
///         Ok(state + rng.random_range(-step..=step))
///     }
///
///     fn cost(&self, x: &i64) -> f64 {
///         (*x as f64).powi(2)
///     }
/// }
/// ```
pub trait Problem {
    /// The state (candidate solution) representation.
    type State: Clone;

    /// Draws a random state.
    ///
    /// Every reachable state must have non-zero probability over
    /// repeated calls.
    fn random_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Produces the neighbors of `state`, one elementary move each.
    ///
    /// The sequence must be finite. It may randomize each element, so two
    /// calls on the same state need not yield the same set.
    fn neighbors<'a, R: Rng>(
        &'a self,
        state: &'a Self::State,
        rng: &'a mut R,
    ) -> Result<Neighbors<'a, Self::State>, SearchError> {
        let _ = (state, rng);
        Err(SearchError::not_implemented("neighbors"))
    }

    /// Upper bound on the length of [`Problem::neighbors`] for `state`,
    /// if the problem knows it.
    fn neighbor_bound(&self, state: &Self::State) -> Option<usize> {
        let _ = state;
        None
    }

    /// Draws one random neighbor of `state`.
    ///
    /// `amplitude` is a positive step-size hint; larger values should allow
    /// larger moves. `temperature_fraction` lies in `[0, 1]` and tracks
    /// search progress (1 at the start, 0 at the final temperature). Every
    /// state must stay reachable through repeated calls.
    fn random_neighbor<R: Rng>(
        &self,
        state: &Self::State,
        amplitude: f64,
        temperature_fraction: f64,
        rng: &mut R,
    ) -> Result<Self::State, SearchError> {
        let _ = (state, amplitude, temperature_fraction, rng);
        Err(SearchError::not_implemented("random_neighbor"))
    }

    /// Computes the cost of a state. Lower is better.
    ///
    /// Must be pure and deterministic.
    fn cost(&self, state: &Self::State) -> f64;
}
