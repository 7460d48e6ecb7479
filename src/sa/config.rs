//! Annealing configuration and adaptive-control parameters.

use crate::error::SearchError;

/// How the starting temperature is derived.
///
/// The cost-scaled rule is a magnitude heuristic: it keeps the Metropolis
/// criterion meaningful when costs are far above 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureInit {
    /// Use `initial_temperature` as given.
    Fixed,

    /// When the initial cost exceeds `threshold`, start at
    /// `initial_cost / divisor`; otherwise use `initial_temperature`.
    ///
    /// `final_temperature` is only compared with the effective start, so
    /// it may exceed `initial_temperature`. A run that does not rescale
    /// then finishes without any level.
    CostScaled {
        /// Cost above which rescaling applies.
        threshold: f64,
        /// Divisor applied to the initial cost.
        divisor: f64,
    },

    /// Draw `samples` random states and start at
    /// `multiplier * (max_cost - min_cost)`.
    ///
    /// Falls back to `initial_temperature` when all samples cost the same.
    /// As with `CostScaled`, `final_temperature` may exceed
    /// `initial_temperature`.
    Sampled {
        /// Number of random states to evaluate.
        samples: usize,
        /// Factor applied to the observed cost spread.
        multiplier: f64,
    },
}

impl Default for TemperatureInit {
    fn default() -> Self {
        TemperatureInit::CostScaled {
            threshold: 1.0,
            divisor: 10.0,
        }
    }
}

/// Bounds and step factors for the per-level adaptive adjustments.
///
/// Ratios are fractions of `max_successes`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveTuning {
    /// Lower clamp for the amplitude.
    pub min_amplitude: f64,
    /// Upper clamp for the amplitude.
    pub max_amplitude: f64,
    /// Amplitude multiplier when acceptance is scarce.
    pub amplitude_grow: f64,
    /// Amplitude multiplier when acceptance is abundant.
    pub amplitude_shrink: f64,
    /// Success ratio below which the amplitude grows.
    pub grow_below: f64,
    /// Success ratio above which the amplitude shrinks.
    pub shrink_above: f64,
    /// Cooling-factor multiplier after a level that improved the best cost.
    pub slow_cooling: f64,
    /// Cap for the slowed cooling factor.
    pub max_cooling_factor: f64,
    /// Cooling-factor multiplier when acceptance is scarce.
    pub fast_cooling: f64,
    /// Floor for the accelerated cooling factor.
    pub min_cooling_factor: f64,
    /// Success ratio below which cooling accelerates.
    pub fast_cooling_below: f64,
}

impl Default for AdaptiveTuning {
    fn default() -> Self {
        Self {
            min_amplitude: 1.0,
            max_amplitude: 30.0,
            amplitude_grow: 1.2,
            amplitude_shrink: 0.8,
            grow_below: 0.2,
            shrink_above: 0.8,
            slow_cooling: 1.05,
            max_cooling_factor: 0.98,
            fast_cooling: 0.95,
            min_cooling_factor: 0.8,
            fast_cooling_below: 0.3,
        }
    }
}

/// Stagnation detection and reheating.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagnationPolicy {
    /// Number of trailing level-best costs inspected.
    pub window: usize,
    /// The search is stagnant when `max - min < relative_spread * |min|`
    /// over the window.
    pub relative_spread: f64,
    /// Cooling factor forced while stagnant.
    pub cooling_factor: f64,
    /// Probability of reheating once stagnant.
    pub reheat_probability: f64,
    /// Reheat target as a fraction of the initial temperature.
    pub reheat_fraction: f64,
}

impl Default for StagnationPolicy {
    fn default() -> Self {
        Self {
            window: 5,
            relative_spread: 0.001,
            cooling_factor: 0.7,
            reheat_probability: 0.2,
            reheat_fraction: 0.5,
        }
    }
}

/// Configuration for the adaptive Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::{AnnealingConfig, TemperatureInit};
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(5.0)
///     .with_final_temperature(0.001)
///     .with_cooling_factor(0.9)
///     .with_temperature_init(TemperatureInit::Fixed)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Configured starting temperature (see [`TemperatureInit`]).
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    /// Must be strictly positive.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1).
    pub cooling_factor: f64,

    /// Global budget of neighbor evaluations.
    pub max_iterations: usize,

    /// Inner-loop budget per temperature level.
    pub max_iterations_per_temperature: usize,

    /// Accepted moves after which a level ends early.
    pub max_successes: usize,

    /// Starting neighbor amplitude ("dmax").
    pub initial_amplitude: f64,

    /// Enables the adaptive cooling-factor and amplitude adjustments.
    pub adaptive: bool,

    /// Starting-temperature rule.
    pub temperature_init: TemperatureInit,

    /// Adaptive adjustment parameters.
    pub tuning: AdaptiveTuning,

    /// Stagnation and reheat parameters.
    pub stagnation: StagnationPolicy,

    /// Observer progress callback period in global iterations. 0 disables.
    pub report_interval: usize,

    /// Random seed (None for the default seed).
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            final_temperature: 0.01,
            cooling_factor: 0.95,
            max_iterations: 1_000_000,
            max_iterations_per_temperature: 100,
            max_successes: 10,
            initial_amplitude: 10.0,
            adaptive: true,
            temperature_init: TemperatureInit::default(),
            tuning: AdaptiveTuning::default(),
            stagnation: StagnationPolicy::default(),
            report_interval: 1000,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_iterations_per_temperature(mut self, n: usize) -> Self {
        self.max_iterations_per_temperature = n;
        self
    }

    pub fn with_max_successes(mut self, n: usize) -> Self {
        self.max_successes = n;
        self
    }

    pub fn with_initial_amplitude(mut self, amplitude: f64) -> Self {
        self.initial_amplitude = amplitude;
        self
    }

    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    pub fn with_temperature_init(mut self, init: TemperatureInit) -> Self {
        self.temperature_init = init;
        self
    }

    pub fn with_tuning(mut self, tuning: AdaptiveTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_stagnation(mut self, stagnation: StagnationPolicy) -> Self {
        self.stagnation = stagnation;
        self
    }

    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        // Negated comparisons so that NaN is rejected too.
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(SearchError::invalid(
                "initial_temperature must be positive and finite",
            ));
        }
        if !(self.final_temperature > 0.0) {
            return Err(SearchError::invalid(format!(
                "final_temperature must be strictly positive, got {}",
                self.final_temperature
            )));
        }
        if self.temperature_init == TemperatureInit::Fixed
            && self.final_temperature >= self.initial_temperature
        {
            return Err(SearchError::invalid(
                "final_temperature must be less than initial_temperature",
            ));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(SearchError::invalid(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::invalid("max_iterations must be at least 1"));
        }
        if self.max_iterations_per_temperature == 0 {
            return Err(SearchError::invalid(
                "max_iterations_per_temperature must be at least 1",
            ));
        }
        if self.max_successes == 0 {
            return Err(SearchError::invalid("max_successes must be at least 1"));
        }
        self.validate_tuning()?;
        self.validate_stagnation()?;
        match self.temperature_init {
            TemperatureInit::Fixed => {}
            TemperatureInit::CostScaled { threshold, divisor } => {
                if !threshold.is_finite() {
                    return Err(SearchError::invalid("cost-scaled threshold must be finite"));
                }
                if !(divisor > 0.0) {
                    return Err(SearchError::invalid(format!(
                        "cost-scaled divisor must be positive, got {divisor}"
                    )));
                }
            }
            TemperatureInit::Sampled {
                samples,
                multiplier,
            } => {
                if samples < 2 {
                    return Err(SearchError::invalid("sampled init needs at least 2 samples"));
                }
                if !(multiplier > 0.0) {
                    return Err(SearchError::invalid(format!(
                        "sampled multiplier must be positive, got {multiplier}"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_tuning(&self) -> Result<(), SearchError> {
        let t = &self.tuning;
        if !(t.min_amplitude > 0.0 && t.min_amplitude <= t.max_amplitude) {
            return Err(SearchError::invalid(
                "amplitude bounds must satisfy 0 < min_amplitude <= max_amplitude",
            ));
        }
        if !(self.initial_amplitude >= t.min_amplitude && self.initial_amplitude <= t.max_amplitude)
        {
            return Err(SearchError::invalid(format!(
                "initial_amplitude {} outside [{}, {}]",
                self.initial_amplitude, t.min_amplitude, t.max_amplitude
            )));
        }
        if !(t.amplitude_grow >= 1.0) || !(t.amplitude_shrink > 0.0 && t.amplitude_shrink <= 1.0) {
            return Err(SearchError::invalid(
                "amplitude_grow must be >= 1 and amplitude_shrink in (0, 1]",
            ));
        }
        if !(t.min_cooling_factor > 0.0
            && t.min_cooling_factor <= t.max_cooling_factor
            && t.max_cooling_factor < 1.0)
        {
            return Err(SearchError::invalid(
                "cooling factor bounds must satisfy 0 < min <= max < 1",
            ));
        }
        if !(t.slow_cooling > 0.0 && t.fast_cooling > 0.0) {
            return Err(SearchError::invalid("cooling multipliers must be positive"));
        }
        for ratio in [t.grow_below, t.shrink_above, t.fast_cooling_below] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(SearchError::invalid(format!(
                    "success ratios must lie in [0, 1], got {ratio}"
                )));
            }
        }
        Ok(())
    }

    fn validate_stagnation(&self) -> Result<(), SearchError> {
        let s = &self.stagnation;
        if s.window < 2 {
            return Err(SearchError::invalid("stagnation window must be at least 2"));
        }
        if !(s.relative_spread >= 0.0) {
            return Err(SearchError::invalid("relative_spread must be non-negative"));
        }
        if !(s.cooling_factor > 0.0 && s.cooling_factor < 1.0) {
            return Err(SearchError::invalid(
                "stagnation cooling_factor must be in (0, 1)",
            ));
        }
        if !(0.0..=1.0).contains(&s.reheat_probability) {
            return Err(SearchError::invalid("reheat_probability must be in [0, 1]"));
        }
        if !(s.reheat_fraction > 0.0 && s.reheat_fraction <= 1.0) {
            return Err(SearchError::invalid("reheat_fraction must be in (0, 1]"));
        }
        Ok(())
    }
}
