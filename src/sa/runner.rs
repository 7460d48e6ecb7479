//! Adaptive SA execution loop.
//!
//! # Algorithm
//!
//! 1. Draw a random state; it seeds both current and best
//! 2. Resolve the starting temperature ([`TemperatureInit`])
//! 3. While `T > T_final` and the global budget remains:
//!    a. Sample up to `max_iterations_per_temperature` random neighbors,
//!    stopping early after `max_successes` acceptances (Metropolis rule)
//!    b. Adapt the cooling factor and amplitude from the level statistics
//!    c. Check the trailing best costs for stagnation; reheat or cool
//! 4. Return the best state seen

use super::config::{AnnealingConfig, TemperatureInit};
use super::observer::{AnnealingObserver, LevelReport, NoopObserver, Progress};
use super::schedule::{metropolis_accept, LevelOutcome, LevelStats, Schedule};
use crate::error::{ensure_finite, SearchError};
use crate::problem::Problem;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, trace};

/// Result of an adaptive Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult<S: Clone> {
    /// The best state found.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Cost of the random starting state.
    pub initial_cost: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of completed temperature levels.
    pub levels: usize,

    /// Effective starting temperature after rescaling.
    pub initial_temperature: f64,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Amplitude when the run stopped.
    pub final_amplitude: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that improved the best cost.
    pub improving_moves: usize,

    /// Number of stagnation-triggered reheats.
    pub reheats: usize,

    /// Best cost at the end of each level.
    pub cost_history: Vec<f64>,
}

/// Executes adaptive Simulated Annealing.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<P: Problem>(
        problem: &P,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult<P::State>, SearchError> {
        Self::run_with_observer(problem, config, NoopObserver)
    }

    /// Runs SA with a generator seeded from `config.seed`, reporting to
    /// `observer`.
    pub fn run_with_observer<P: Problem, O: AnnealingObserver>(
        problem: &P,
        config: &AnnealingConfig,
        observer: O,
    ) -> Result<AnnealingResult<P::State>, SearchError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng, observer)
    }

    /// Runs SA with a caller-supplied generator.
    ///
    /// `config.seed` is ignored. The generator drives state sampling,
    /// Metropolis acceptance and reheat decisions.
    pub fn run_with_rng<P: Problem, R: Rng, O: AnnealingObserver>(
        problem: &P,
        config: &AnnealingConfig,
        rng: &mut R,
        mut observer: O,
    ) -> Result<AnnealingResult<P::State>, SearchError> {
        config.validate()?;

        let mut current = problem.random_state(rng);
        let mut current_cost = ensure_finite(problem.cost(&current))?;
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let initial_temperature = resolve_initial_temperature(problem, config, initial_cost, rng);
        let mut schedule = Schedule::new(config, initial_temperature);

        debug!(initial_cost, initial_temperature, "annealing started");
        observer.on_start(initial_cost, initial_temperature);

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut reheats = 0usize;
        let mut level = 0usize;
        let mut cost_history = Vec::new();

        while schedule.is_hot() && iterations < config.max_iterations {
            let temperature = schedule.temperature();
            let amplitude = schedule.amplitude();
            let fraction = schedule.temperature_fraction();
            let mut stats = LevelStats::default();

            while stats.iterations < config.max_iterations_per_temperature
                && stats.successes < config.max_successes
                && iterations < config.max_iterations
            {
                stats.iterations += 1;
                iterations += 1;

                let candidate = problem.random_neighbor(&current, amplitude, fraction, rng)?;
                let candidate_cost = problem.cost(&candidate);
                let delta = candidate_cost - current_cost;

                if metropolis_accept(delta, temperature, rng) {
                    current = candidate;
                    current_cost = candidate_cost;
                    stats.successes += 1;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        stats.improvements += 1;
                        improving_moves += 1;
                    }
                }

                if config.report_interval > 0 && iterations.is_multiple_of(config.report_interval)
                {
                    observer.on_progress(&Progress {
                        iteration: iterations,
                        level,
                        temperature,
                        current_cost,
                        best_cost,
                        stats,
                        cooling_factor: schedule.cooling_factor(),
                        amplitude,
                    });
                }
            }

            cost_history.push(best_cost);

            let outcome = schedule.finish_level(&stats, best_cost, rng);
            if outcome == LevelOutcome::Reheated {
                reheats += 1;
            }
            trace!(
                level,
                ?outcome,
                temperature = schedule.temperature(),
                successes = stats.successes,
                improvements = stats.improvements,
                cooling_factor = schedule.cooling_factor(),
                amplitude = schedule.amplitude(),
                "level finished"
            );

            observer.on_level(&LevelReport {
                level,
                iteration: iterations,
                temperature,
                next_temperature: schedule.temperature(),
                best_cost,
                stats,
                cooling_factor: schedule.cooling_factor(),
                amplitude,
                next_amplitude: schedule.amplitude(),
                outcome,
            });
            level += 1;
        }

        debug!(
            iterations,
            levels = level,
            reheats,
            best_cost,
            "annealing finished"
        );
        observer.on_finish(best_cost, iterations);

        Ok(AnnealingResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            levels: level,
            initial_temperature,
            final_temperature: schedule.temperature(),
            final_amplitude: schedule.amplitude(),
            accepted_moves,
            improving_moves,
            reheats,
            cost_history,
        })
    }
}

/// Resolves the starting temperature according to `config.temperature_init`.
fn resolve_initial_temperature<P: Problem, R: Rng>(
    problem: &P,
    config: &AnnealingConfig,
    initial_cost: f64,
    rng: &mut R,
) -> f64 {
    match config.temperature_init {
        TemperatureInit::Fixed => config.initial_temperature,

        TemperatureInit::CostScaled { threshold, divisor } => {
            if initial_cost > threshold {
                initial_cost / divisor
            } else {
                config.initial_temperature
            }
        }

        TemperatureInit::Sampled {
            samples,
            multiplier,
        } => {
            let (min, max) = (0..samples)
                .map(|_| problem.cost(&problem.random_state(rng)))
                .filter(|c| c.is_finite())
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
                    (lo.min(c), hi.max(c))
                });
            let spread = max - min;
            if spread.is_finite() && spread > 0.0 {
                multiplier * spread
            } else {
                config.initial_temperature
            }
        }
    }
}
