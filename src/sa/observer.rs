//! Progress observation for annealing runs.
//!
//! The runner never prints. Callers that want progress output plug in an
//! [`AnnealingObserver`]; [`TracingObserver`] forwards everything to
//! `tracing`, [`NoopObserver`] discards it.

use super::schedule::{LevelOutcome, LevelStats};
use tracing::{debug, info};

/// Snapshot emitted every `report_interval` global iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Global iteration count.
    pub iteration: usize,
    /// Index of the running temperature level.
    pub level: usize,
    pub temperature: f64,
    pub current_cost: f64,
    pub best_cost: f64,
    /// Counters of the running level so far.
    pub stats: LevelStats,
    /// Factor applied at the end of the previous level; the configured
    /// factor during the first level.
    pub cooling_factor: f64,
    pub amplitude: f64,
}

/// Summary emitted once per completed temperature level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelReport {
    /// Index of the completed level, starting at 0.
    pub level: usize,
    /// Global iteration count at the end of the level.
    pub iteration: usize,
    /// Temperature the level ran at.
    pub temperature: f64,
    /// Temperature for the next level.
    pub next_temperature: f64,
    pub best_cost: f64,
    pub stats: LevelStats,
    /// Cooling factor decided for this level.
    pub cooling_factor: f64,
    /// Amplitude used during the level.
    pub amplitude: f64,
    /// Amplitude for the next level.
    pub next_amplitude: f64,
    pub outcome: LevelOutcome,
}

/// Receives progress callbacks from an annealing run.
///
/// All methods default to doing nothing.
pub trait AnnealingObserver {
    /// Called once before the first level.
    fn on_start(&mut self, _initial_cost: f64, _initial_temperature: f64) {}

    /// Called every `report_interval` global iterations.
    fn on_progress(&mut self, _progress: &Progress) {}

    /// Called after each temperature level, reheated ones included.
    fn on_level(&mut self, _report: &LevelReport) {}

    /// Called once after the last level.
    fn on_finish(&mut self, _best_cost: f64, _iterations: usize) {}
}

impl<O: AnnealingObserver + ?Sized> AnnealingObserver for &mut O {
    fn on_start(&mut self, initial_cost: f64, initial_temperature: f64) {
        (**self).on_start(initial_cost, initial_temperature)
    }

    fn on_progress(&mut self, progress: &Progress) {
        (**self).on_progress(progress)
    }

    fn on_level(&mut self, report: &LevelReport) {
        (**self).on_level(report)
    }

    fn on_finish(&mut self, best_cost: f64, iterations: usize) {
        (**self).on_finish(best_cost, iterations)
    }
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AnnealingObserver for NoopObserver {}

/// Observer that emits `tracing` events.
///
/// Periodic progress and the final summary are logged at `INFO`, level
/// summaries at `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AnnealingObserver for TracingObserver {
    fn on_start(&mut self, initial_cost: f64, initial_temperature: f64) {
        info!(initial_cost, initial_temperature, "annealing started");
    }

    fn on_progress(&mut self, p: &Progress) {
        info!(
            iteration = p.iteration,
            temperature = p.temperature,
            best_cost = p.best_cost,
            "annealing progress"
        );
    }

    fn on_level(&mut self, r: &LevelReport) {
        if r.outcome == LevelOutcome::Reheated {
            info!(level = r.level, temperature = r.next_temperature, "reheating after stagnation");
        }
        debug!(
            level = r.level,
            temperature = r.next_temperature,
            successes = r.stats.successes,
            iterations = r.stats.iterations,
            improvements = r.stats.improvements,
            cooling_factor = r.cooling_factor,
            amplitude = r.next_amplitude,
            "temperature level finished"
        );
    }

    fn on_finish(&mut self, best_cost: f64, iterations: usize) {
        info!(iterations, best_cost, "annealing finished");
    }
}
