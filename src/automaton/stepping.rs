//! Synchronous stepping of the four-state automaton.
//!
//! Every pass reads from the input grid and writes into a separate output
//! buffer, so no cell ever observes a next-generation value of a neighbor.
//! Row order (and thread count) therefore cannot change the result.

use rayon::prelude::*;

use super::grid::{index_of, neighbor_states, Grid};
use super::rules::next_state;
use crate::error::{Error, Result};
use crate::state::CellState;

/// Computes the next generation of a grid. Holds no simulation state; the
/// optional thread pool only decides how rows are scheduled.
#[derive(Debug, Default)]
pub struct TransitionEngine {
    pool: Option<rayon::ThreadPool>,
}

impl TransitionEngine {
    /// Single-threaded engine.
    pub fn new() -> Self {
        TransitionEngine { pool: None }
    }

    /// Engine that computes rows on a dedicated rayon pool.
    /// `num_threads` of 0 or 1 gives the single-threaded engine.
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        if num_threads <= 1 {
            return Ok(Self::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;

        Ok(TransitionEngine { pool: Some(pool) })
    }

    /// Number of worker threads used per pass.
    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |p| p.current_num_threads())
    }

    /// Produce the next generation of `grid` as a new grid of the same size.
    pub fn step(&self, grid: &Grid) -> Result<Grid> {
        let mut next = Grid::new(grid.size, CellState::Dormant);
        self.step_into(grid, &mut next)?;
        Ok(next)
    }

    /// Write the next generation of `src` into `dst`, reusing its buffer.
    /// `dst` must already have the same shape as `src`.
    pub fn step_into(&self, src: &Grid, dst: &mut Grid) -> Result<()> {
        if !src.is_well_formed() {
            return Err(Error::InvalidGrid(format!(
                "{} cells in a grid of side {}",
                src.cells.len(),
                src.size
            )));
        }
        if dst.size != src.size || !dst.is_well_formed() {
            return Err(Error::InvalidGrid(format!(
                "output grid has side {}, expected {}",
                dst.size, src.size
            )));
        }

        let size = src.size;
        if size == 0 {
            return Ok(());
        }

        match &self.pool {
            Some(pool) => pool.install(|| {
                dst.cells
                    .par_chunks_mut(size)
                    .enumerate()
                    .for_each(|(y, row)| compute_row(src, y, row));
            }),
            None => {
                for (y, row) in dst.cells.chunks_mut(size).enumerate() {
                    compute_row(src, y, row);
                }
            }
        }

        log::trace!("stepped {size}x{size} grid on {} thread(s)", self.threads());
        Ok(())
    }
}

/// Fill one output row from the snapshot.
fn compute_row(src: &Grid, y: usize, row: &mut [CellState]) {
    for (x, out) in row.iter_mut().enumerate() {
        let current = src.cells[index_of(src.size, x, y)];
        *out = next_state(current, neighbor_states(src, x, y));
    }
}
