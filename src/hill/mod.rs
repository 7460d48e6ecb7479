//! Hill Climbing.
//!
//! Greedy local search: repeatedly move to the cheapest neighbor until no
//! neighbor improves on the current state. It is the simplest consumer of
//! the [`Problem`](crate::Problem) contract and the baseline the annealer is
//! measured against.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::{HillClimbingResult, HillClimbingRunner};
