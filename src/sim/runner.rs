//! Batch evolution with an optional early stop on stability.
//!
//! The runner owns no grid. It advances the caller's grid up to
//! `RunConfig::generations` times, hands each new generation to an
//! `Observer` (a renderer, a recorder, a test probe) and reports what
//! happened.

use std::time::{Duration, Instant};

use crate::core::{Grid, RunConfig};

/// Callback invoked after every generation of a run.
///
/// Implemented for any `FnMut(&Grid)`.
pub trait Observer {
    fn on_generation(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Observer for F {
    fn on_generation(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Observer that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_generation(&mut self, _grid: &Grid) {}
}

/// Outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Generations actually advanced.
    pub generations_run: u64,

    /// Grid generation at which the run stopped because it was stable.
    /// `None` if stability checking was off or never triggered.
    pub stable_at: Option<u64>,

    /// Wall time spent evolving, observer calls included.
    pub elapsed: Duration,

    /// Live cells when the run ended.
    pub population: usize,
}

impl RunReport {
    /// True if the run ended early on a stable grid.
    #[must_use]
    pub fn stopped_stable(&self) -> bool {
        self.stable_at.is_some()
    }
}

/// Drives a grid through a configured number of generations.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Create a runner.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run without observing intermediate generations.
    pub fn run(&self, grid: &mut Grid) -> RunReport {
        self.run_observed(grid, &mut NoopObserver)
    }

    /// Run, calling `observer` after every generation.
    ///
    /// With `stop_when_stable` set, stability is checked after each step
    /// (never before the first one) and the run ends at the first stable
    /// generation.
    pub fn run_observed<O: Observer + ?Sized>(
        &self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> RunReport {
        let start = Instant::now();
        let mut generations_run = 0;
        let mut stable_at = None;

        while generations_run < self.config.generations {
            grid.evolve();
            generations_run += 1;
            observer.on_generation(grid);

            if self.config.stop_when_stable && grid.is_stable() {
                stable_at = Some(grid.generation());
                break;
            }
        }

        let report = RunReport {
            generations_run,
            stable_at,
            elapsed: start.elapsed(),
            population: grid.population(),
        };

        match report.stable_at {
            Some(generation) => log::info!(
                "run reached stability at generation {} after {} steps in {:?}",
                generation,
                report.generations_run,
                report.elapsed
            ),
            None => log::info!(
                "run completed {} generations in {:?}, population {}",
                report.generations_run,
                report.elapsed,
                report.population
            ),
        }

        report
    }
}
