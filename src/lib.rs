//! Domain-agnostic local search core.
//!
//! Provides a problem contract and two search procedures that operate on
//! it:
//!
//! - **Problem contract** ([`Problem`]): random state, neighbor sequence,
//!   random neighbor and cost. The only integration point for new domains.
//! - **Hill Climbing** ([`hill`]): greedy descent to a local optimum; the
//!   baseline.
//! - **Adaptive Simulated Annealing** ([`sa`]): Metropolis acceptance with
//!   adaptive cooling factor and neighbor amplitude, stagnation detection
//!   and reheating.
//!
//! # Architecture
//!
//! Runners never construct or inspect problem internals; all domain
//! knowledge flows through the four [`Problem`] operations. Randomness
//! comes from a seeded generator owned by the runner or injected by the
//! caller, so every run is reproducible. Progress is reported through
//! [`sa::AnnealingObserver`] and `tracing` events, never printed.

pub mod error;
pub mod hill;
pub mod problem;
pub mod random;
pub mod sa;

pub use error::SearchError;
pub use problem::{Neighbors, Problem};
