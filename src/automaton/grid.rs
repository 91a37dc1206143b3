//! Grid storage, bounds-checked cell access, and the generation counter.

use crate::error::{Error, Result};
use crate::state::CellState;

use super::stepping::TransitionEngine;

/// A square, bounded matrix of cell states in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) size: usize,
    pub(crate) cells: Vec<CellState>,
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(size: usize, x: usize, y: usize) -> usize {
    y * size + x
}

impl Grid {
    /// Create a `size` x `size` grid with every cell set to `fill`.
    pub fn new(size: usize, fill: CellState) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Build a grid from rows. Every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::InvalidGrid(format!(
                    "row {y} has {} cells, expected {size}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Grid { size, cells })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        // chunks() panics on 0, and an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(index_of(self.size, x as usize, y as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellState> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Overwrite every cell with `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Population of each state, indexed by raw code.
    pub fn census(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for cell in &self.cells {
            counts[cell.code() as usize] += 1;
        }
        counts
    }

    /// True when the cell buffer matches the declared side length.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.cells.len() == self.size * self.size
    }
}

/// The set of states present among a cell's neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborSet(u8);

impl NeighborSet {
    #[inline]
    pub fn insert(&mut self, state: CellState) {
        self.0 |= 1 << state.code();
    }

    #[inline]
    pub fn contains(self, state: CellState) -> bool {
        self.0 & (1 << state.code()) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<CellState> for NeighborSet {
    fn from_iter<I: IntoIterator<Item = CellState>>(iter: I) -> Self {
        let mut set = NeighborSet::default();
        for state in iter {
            set.insert(state);
        }
        set
    }
}

/// Collect the states present in the Moore neighborhood (8 neighbors) of
/// `(x, y)`. Positions off the grid are skipped, never treated as Dormant.
pub fn neighbor_states(grid: &Grid, x: usize, y: usize) -> NeighborSet {
    let mut present = NeighborSet::default();

    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            // Skip the center cell
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = x as i64 + dx;
            let ny = y as i64 + dy;

            if nx >= 0 && ny >= 0 && (nx as usize) < grid.size && (ny as usize) < grid.size {
                let idx = index_of(grid.size, nx as usize, ny as usize);
                present.insert(grid.cells[idx]);
            }
        }
    }

    present
}

/// Create a grid of the given size filled with `fill`.
pub fn new_grid(size: usize, fill: CellState) -> GridState {
    GridState {
        grid: Grid::new(size, fill),
        generation: 0,
    }
}

/// The one live grid plus its generation counter.
#[derive(Clone, Debug)]
pub struct GridState {
    grid: Grid,
    generation: u64,
}

impl GridState {
    /// An all-Dormant grid at generation 0.
    pub fn new(size: usize) -> Self {
        new_grid(size, CellState::Dormant)
    }

    /// Adopt an existing grid (e.g. a loaded pattern) at generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        GridState {
            grid,
            generation: 0,
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellState> {
        self.grid.get(x, y)
    }

    /// Write a single cell. Does not touch the generation counter.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<()> {
        self.grid.set(x, y, state)
    }

    /// Reset every cell to Dormant and the generation counter to 0.
    pub fn clear(&mut self) {
        self.grid.fill(CellState::Dormant);
        self.generation = 0;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Read-only access for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Compute the next generation with `engine`, swap it in, and bump the
    /// counter. On error nothing changes.
    pub fn advance(&mut self, engine: &TransitionEngine) -> Result<u64> {
        let next = engine.step(&self.grid)?;
        self.grid = next;
        self.generation += 1;
        Ok(self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn test_new_grid_is_dormant() {
        let state = GridState::new(8);
        assert_eq!(state.size(), 8);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.grid().cells().len(), 64);
        assert!(state.grid().cells().iter().all(|&c| c == Dormant));
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(4, 0, 0), 0);
        assert_eq!(index_of(4, 3, 3), 15);
        assert_eq!(index_of(4, 1, 0), 1);
        assert_eq!(index_of(4, 0, 1), 4);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(4, Dormant);

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 3));

        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 4));
    }

    #[test]
    fn test_set_get_and_out_of_bounds() {
        let mut state = GridState::new(4);

        state.set(1, 2, Gamma).unwrap();
        assert_eq!(state.get(1, 2).unwrap(), Gamma);
        assert_eq!(state.get(2, 1).unwrap(), Dormant);
        assert_eq!(state.generation(), 0);

        assert!(matches!(
            state.get(4, 0),
            Err(Error::OutOfBounds { x: 4, y: 0, size: 4 })
        ));
        assert!(matches!(
            state.set(0, -1, Alpha),
            Err(Error::OutOfBounds { .. })
        ));
        // Failed writes leave the grid alone
        assert_eq!(state.grid().census(), [0, 0, 1, 15]);
    }

    #[test]
    fn test_clear_resets_cells_and_generation() {
        let mut state = GridState::new(4);
        state.set(0, 0, Alpha).unwrap();
        state.set(3, 3, Beta).unwrap();
        state.advance(&TransitionEngine::new()).unwrap();
        state.advance(&TransitionEngine::new()).unwrap();
        assert_eq!(state.generation(), 2);

        state.clear();
        assert_eq!(state.generation(), 0);
        assert!(state.grid().cells().iter().all(|&c| c == Dormant));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let ragged = vec![vec![Alpha, Beta], vec![Gamma]];
        assert!(matches!(
            Grid::from_rows(ragged),
            Err(Error::InvalidGrid(_))
        ));

        let wide = vec![vec![Alpha, Beta, Gamma]];
        assert!(Grid::from_rows(wide).is_err());

        let square = Grid::from_rows(vec![vec![Alpha, Beta], vec![Gamma, Dormant]]).unwrap();
        assert_eq!(square.get(1, 0).unwrap(), Beta);
        assert_eq!(square.get(0, 1).unwrap(), Gamma);
        let rows: Vec<&[CellState]> = square.rows().collect();
        assert_eq!(rows, vec![&[Alpha, Beta][..], &[Gamma, Dormant][..]]);
    }

    #[test]
    fn test_neighbor_states_interior() {
        let mut grid = Grid::new(5, Dormant);
        grid.set(1, 1, Alpha).unwrap();
        grid.set(3, 3, Gamma).unwrap();

        let present = neighbor_states(&grid, 2, 2);
        assert!(present.contains(Alpha));
        assert!(present.contains(Gamma));
        assert!(present.contains(Dormant));
        assert!(!present.contains(Beta));

        // The center cell itself is never its own neighbor
        grid.set(2, 2, Beta).unwrap();
        assert!(!neighbor_states(&grid, 2, 2).contains(Beta));
    }

    #[test]
    fn test_neighbor_states_corner_is_clipped() {
        // Only (1,0), (0,1), (1,1) are real neighbors of the corner
        let mut grid = Grid::new(3, Alpha);
        grid.set(0, 0, Gamma).unwrap();

        let present = neighbor_states(&grid, 0, 0);
        assert!(present.contains(Alpha));
        assert!(!present.contains(Dormant));
        assert!(!present.contains(Gamma));
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::new(1, Alpha);
        assert!(neighbor_states(&grid, 0, 0).is_empty());
    }

    #[test]
    fn test_census() {
        let mut grid = Grid::new(3, Dormant);
        grid.set(0, 0, Alpha).unwrap();
        grid.set(1, 0, Alpha).unwrap();
        grid.set(2, 2, Gamma).unwrap();
        assert_eq!(grid.census(), [2, 0, 1, 6]);
    }
}
