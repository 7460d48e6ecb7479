//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Draw a random initial state
//! 2. At each iteration:
//!    a. Generate the neighbor sequence of the current state
//!    b. Select the cheapest neighbor (first one wins on ties)
//!    c. Move if it is strictly cheaper, otherwise stop
//! 3. Return the final state
//!
//! The neighbor sequence may be randomized, so this is a stochastic
//! greedy descent rather than a deterministic steepest descent.

use super::config::HillClimbingConfig;
use crate::error::{ensure_finite, SearchError};
use crate::problem::Problem;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbingResult<S: Clone> {
    /// The final (locally optimal) state.
    pub best: S,
    /// Cost of the final state.
    pub best_cost: f64,
    /// Cost of the random starting state.
    pub initial_cost: f64,
    /// Number of moves performed.
    pub iterations: usize,
    /// Number of neighbor cost evaluations.
    pub evaluations: usize,
    /// Whether the climb stopped at a local optimum rather than the
    /// iteration cap.
    pub converged: bool,
    /// Cost after each move, starting with the initial cost.
    pub cost_history: Vec<f64>,
}

/// Hill climbing runner.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    pub fn run<P: Problem>(
        problem: &P,
        config: &HillClimbingConfig,
    ) -> Result<HillClimbingResult<P::State>, SearchError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs hill climbing with a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: Problem, R: Rng>(
        problem: &P,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<HillClimbingResult<P::State>, SearchError> {
        config.validate()?;

        let mut current = problem.random_state(rng);
        let mut current_cost = ensure_finite(problem.cost(&current))?;
        let initial_cost = current_cost;

        debug!(initial_cost, "hill climbing started");

        let mut iterations = 0usize;
        let mut evaluations = 0usize;
        let mut converged = false;
        let mut cost_history = vec![current_cost];

        while iterations < config.max_iterations {
            let limit = problem
                .neighbor_bound(&current)
                .map_or(config.max_neighbors, |b| b.min(config.max_neighbors));

            // Strict `<` keeps the first minimum encountered.
            let mut candidate: Option<(P::State, f64)> = None;
            for neighbor in problem.neighbors(&current, rng)?.take(limit) {
                let cost = problem.cost(&neighbor);
                evaluations += 1;
                if !cost.is_finite() {
                    trace!(cost, "skipping neighbor with non-finite cost");
                    continue;
                }
                if candidate.as_ref().is_none_or(|(_, c)| cost < *c) {
                    candidate = Some((neighbor, cost));
                }
            }

            match candidate {
                Some((neighbor, cost)) if cost < current_cost => {
                    current = neighbor;
                    current_cost = cost;
                    iterations += 1;
                    cost_history.push(current_cost);
                    trace!(iteration = iterations, cost = current_cost, "moved");
                }
                _ => {
                    converged = true;
                    break;
                }
            }
        }

        debug!(
            iterations,
            evaluations,
            best_cost = current_cost,
            converged,
            "hill climbing finished"
        );

        Ok(HillClimbingResult {
            best: current,
            best_cost: current_cost,
            initial_cost,
            iterations,
            evaluations,
            converged,
            cost_history,
        })
    }
}
