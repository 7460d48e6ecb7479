//! Temperature schedule state and the Metropolis rule.
//!
//! [`Schedule`] owns everything that changes between temperature levels:
//! the temperature itself, the effective cooling factor, the neighbor
//! amplitude and the rolling best-cost window used for stagnation
//! detection. The runner drives it one level at a time through
//! [`Schedule::finish_level`].

use super::config::{AdaptiveTuning, AnnealingConfig, StagnationPolicy};
use rand::Rng;
use std::collections::VecDeque;

/// Probability of accepting a move that changes the cost by `delta`.
///
/// Returns exactly 1 for `delta <= 0`, otherwise `exp(-delta / T)`. The
/// temperature is floored at `f64::MIN_POSITIVE`.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else {
        (-delta / temperature.max(f64::MIN_POSITIVE)).exp()
    }
}

/// Metropolis acceptance criterion.
///
/// Improving moves are always accepted; worsening moves are accepted
/// with probability `exp(-delta / T)`. A NaN `delta` is rejected.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random::<f64>() < acceptance_probability(delta, temperature)
}

/// Counters collected over one temperature level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Candidates evaluated at this level.
    pub iterations: usize,
    /// Accepted candidates.
    pub successes: usize,
    /// Accepted candidates that improved the best cost.
    pub improvements: usize,
}

/// What the schedule did at the end of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Normal cooling with the (possibly adapted) cooling factor.
    Cooled,
    /// Stagnation detected; cooled with the stagnation factor.
    FastCooled,
    /// Stagnation detected; temperature reset and cooling skipped.
    Reheated,
}

/// Mutable state of an annealing schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    temperature: f64,
    initial_temperature: f64,
    final_temperature: f64,
    base_cooling_factor: f64,
    cooling_factor: f64,
    amplitude: f64,
    adaptive: bool,
    max_successes: usize,
    tuning: AdaptiveTuning,
    stagnation: StagnationPolicy,
    history: VecDeque<f64>,
}

impl Schedule {
    /// Creates a schedule starting at `initial_temperature`.
    ///
    /// `initial_temperature` is the effective starting value after any
    /// rescaling, not necessarily `config.initial_temperature`.
    pub fn new(config: &AnnealingConfig, initial_temperature: f64) -> Self {
        let tuning = config.tuning;
        Self {
            temperature: initial_temperature,
            initial_temperature,
            final_temperature: config.final_temperature,
            base_cooling_factor: config.cooling_factor,
            cooling_factor: config.cooling_factor,
            amplitude: config
                .initial_amplitude
                .clamp(tuning.min_amplitude, tuning.max_amplitude),
            adaptive: config.adaptive,
            max_successes: config.max_successes,
            tuning,
            stagnation: config.stagnation,
            history: VecDeque::with_capacity(config.stagnation.window),
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Cooling factor applied at the end of the last level.
    pub fn cooling_factor(&self) -> f64 {
        self.cooling_factor
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Trailing level-best costs, oldest first.
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Whether the temperature is still above the final threshold.
    pub fn is_hot(&self) -> bool {
        self.temperature > self.final_temperature
    }

    /// Progress hint in `[0, 1]`: 1 at the initial temperature, 0 at the
    /// final one.
    pub fn temperature_fraction(&self) -> f64 {
        let span = self.initial_temperature - self.final_temperature;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.temperature - self.final_temperature) / span).clamp(0.0, 1.0)
    }

    /// Closes a temperature level.
    ///
    /// Adapts the cooling factor and amplitude (when enabled), records
    /// `best_cost` in the stagnation window, then either reheats or cools.
    pub fn finish_level<R: Rng>(
        &mut self,
        stats: &LevelStats,
        best_cost: f64,
        rng: &mut R,
    ) -> LevelOutcome {
        self.cooling_factor = if self.adaptive {
            self.adapt_amplitude(stats);
            self.adapted_cooling_factor(stats)
        } else {
            self.base_cooling_factor
        };

        self.record(best_cost);

        if self.is_stagnant() {
            self.cooling_factor = self.stagnation.cooling_factor;
            if rng.random::<f64>() < self.stagnation.reheat_probability {
                self.temperature = self.initial_temperature * self.stagnation.reheat_fraction;
                return LevelOutcome::Reheated;
            }
            self.temperature *= self.cooling_factor;
            return LevelOutcome::FastCooled;
        }

        self.temperature *= self.cooling_factor;
        LevelOutcome::Cooled
    }

    fn success_ratio(&self, stats: &LevelStats) -> f64 {
        stats.successes as f64 / self.max_successes as f64
    }

    fn adapted_cooling_factor(&self, stats: &LevelStats) -> f64 {
        let t = &self.tuning;
        if stats.improvements > 0 {
            (self.base_cooling_factor * t.slow_cooling).min(t.max_cooling_factor)
        } else if self.success_ratio(stats) < t.fast_cooling_below {
            (self.base_cooling_factor * t.fast_cooling).max(t.min_cooling_factor)
        } else {
            self.base_cooling_factor
        }
    }

    fn adapt_amplitude(&mut self, stats: &LevelStats) {
        let t = &self.tuning;
        let ratio = self.success_ratio(stats);
        if ratio < t.grow_below {
            self.amplitude = (self.amplitude * t.amplitude_grow).min(t.max_amplitude);
        } else if ratio > t.shrink_above {
            self.amplitude = (self.amplitude * t.amplitude_shrink).max(t.min_amplitude);
        }
    }

    fn record(&mut self, best_cost: f64) {
        if self.history.len() == self.stagnation.window {
            self.history.pop_front();
        }
        self.history.push_back(best_cost);
    }

    fn is_stagnant(&self) -> bool {
        if self.history.len() < self.stagnation.window {
            return false;
        }
        let (min, max) = self
            .history
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
                (lo.min(c), hi.max(c))
            });
        max - min < self.stagnation.relative_spread * min
    }
}
