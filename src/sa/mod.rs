//! Adaptive Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! decreases with the temperature, which lets the search escape local
//! optima early on and settle later.
//!
//! On top of plain geometric cooling this variant adapts, per temperature
//! level, both the cooling factor (slower after improvements, faster when
//! moves are rarely accepted) and the neighbor amplitude passed to
//! [`Problem::random_neighbor`](crate::Problem::random_neighbor). When the
//! best cost plateaus over several levels it cools aggressively or, with a
//! fixed probability, reheats.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod observer;
mod runner;
mod schedule;

pub use config::{AdaptiveTuning, AnnealingConfig, StagnationPolicy, TemperatureInit};
pub use observer::{AnnealingObserver, LevelReport, NoopObserver, Progress, TracingObserver};
pub use runner::{AnnealingResult, AnnealingRunner};
pub use schedule::{
    acceptance_probability, metropolis_accept, LevelOutcome, LevelStats, Schedule,
};
