//! Simulation driver: manual and time-gated stepping, painting, and clear.
//!
//! The driver owns the single live `GridState` and is the only thing that
//! advances it. Everything runs on the caller's thread in strict sequence,
//! so a paint can never land in the middle of a step.

use std::time::{Duration, Instant};

use crate::automaton::{extract_region, import_region, Grid, GridState, TransitionEngine};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::state::CellState;

/// Owns the simulation context: grid, engine, run mode, speed, and brush.
#[derive(Debug)]
pub struct SimulationDriver {
    state: GridState,
    engine: TransitionEngine,
    config: SimulationConfig,
    interval: Duration,
    running: bool,
    /// Time of the last automatic step, or None if none has happened.
    last_step: Option<Instant>,
    brush: CellState,
}

impl SimulationDriver {
    /// Create a driver with an all-Dormant grid at generation 0, paused.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let engine = TransitionEngine::with_threads(config.threads)?;

        Ok(SimulationDriver {
            state: GridState::new(config.grid_size),
            engine,
            interval: Duration::from_millis(config.interval_ms),
            running: false,
            last_step: None,
            brush: config.brush,
            config,
        })
    }

    /// Default configuration with a different grid size.
    pub fn with_grid_size(grid_size: usize) -> Result<Self> {
        Self::new(SimulationConfig::with_grid_size(grid_size))
    }

    /// Current settings, including any brush or interval changed since
    /// construction.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Current grid, for rendering.
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellState> {
        self.state.get(x, y)
    }

    /// Advance exactly one generation now, regardless of run mode.
    pub fn step_now(&mut self) -> Result<u64> {
        let generation = self.state.advance(&self.engine)?;
        log::trace!("manual step to generation {generation}");
        Ok(generation)
    }

    /// Step once if running and at least one interval has elapsed since the
    /// last automatic step. Returns whether a step happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        if !self.running {
            return Ok(false);
        }

        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.interval {
                return Ok(false);
            }
        }

        let generation = self.state.advance(&self.engine)?;
        self.last_step = Some(now);
        log::trace!("auto step to generation {generation}");
        Ok(true)
    }

    /// Reset the grid to Dormant and the generation to 0. Run mode is kept.
    pub fn clear(&mut self) {
        let previous = self.state.generation();
        self.state.clear();
        log::info!("grid cleared at generation {previous}");
    }

    /// Write the brush state at `(x, y)`.
    pub fn paint(&mut self, x: i32, y: i32) -> Result<()> {
        self.state.set(x, y, self.brush)
    }

    /// Write Dormant at `(x, y)`.
    pub fn erase(&mut self, x: i32, y: i32) -> Result<()> {
        self.state.set(x, y, CellState::Dormant)
    }

    /// Write an explicit state at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<()> {
        self.state.set(x, y, state)
    }

    pub fn brush(&self) -> CellState {
        self.brush
    }

    pub fn set_brush(&mut self, state: CellState) {
        self.brush = state;
        self.config.brush = state;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            log::info!(
                "auto-run {} at generation {}",
                if running { "started" } else { "paused" },
                self.state.generation()
            );
        }
        self.running = running;
    }

    /// Flip run mode and return the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Set the auto-run interval, clamped into the configured bounds.
    /// Returns the interval actually applied.
    pub fn set_interval_ms(&mut self, ms: u64) -> Duration {
        let clamped = self.config.clamp_interval(ms);
        if clamped != ms {
            log::debug!("interval {ms} ms clamped to {clamped} ms");
        }
        self.config.interval_ms = clamped;
        self.interval = Duration::from_millis(clamped);
        self.interval
    }

    /// Copy a region of raw codes out for rendering.
    pub fn extract_region(
        &self,
        out: &mut [u8],
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    ) -> usize {
        extract_region(self.state.grid(), out, min_x, min_y, max_x, max_y)
    }

    /// Bulk paint from raw codes. Does not change the generation.
    pub fn import_region(
        &mut self,
        input: &[u8],
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    ) -> Result<usize> {
        import_region(self.state.grid_mut(), input, min_x, min_y, max_x, max_y)
    }
}
