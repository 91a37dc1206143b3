//! Region extraction and import operations.
//!
//! Regions are half-open rectangles `[min, max)` clamped to the grid, so a
//! viewport that hangs off the edge still reads the visible part.

use super::grid::{index_of, Grid};
use crate::error::Result;
use crate::state::CellState;

/// Clamp a rectangle to the grid. `None` for an empty or inverted region.
fn clamp_region(
    grid: &Grid,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> Option<(usize, usize, usize, usize)> {
    let size = grid.size as i64;
    let clamp = |v: i32| (v as i64).clamp(0, size) as usize;

    let (min_x, min_y, max_x, max_y) = (clamp(min_x), clamp(min_y), clamp(max_x), clamp(max_y));
    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Extract a rectangular region of raw state codes into a flat buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest).
/// This order matches the order used by `import_region`.
///
/// # Returns
/// Number of cells written, or 0 if the region is empty or `out` is too short.
pub fn extract_region(
    grid: &Grid,
    out: &mut [u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> usize {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let total = (max_x - min_x) * (max_y - min_y);
    if out.len() < total {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            out[offset] = grid.cells[index_of(grid.size, x, y)].code();
            offset += 1;
        }
    }

    offset
}

/// Import a rectangular region of raw state codes from a flat buffer.
///
/// The whole region is decoded before any cell is written, so an unknown
/// code fails with `InvalidState` and leaves the grid unchanged.
///
/// # Returns
/// Number of cells written, or 0 if the region is empty or `input` is too short.
pub fn import_region(
    grid: &mut Grid,
    input: &[u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> Result<usize> {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return Ok(0);
    };

    let total = (max_x - min_x) * (max_y - min_y);
    if input.len() < total {
        return Ok(0);
    }

    let decoded = input[..total]
        .iter()
        .map(|&code| CellState::from_code(code))
        .collect::<Result<Vec<_>>>()?;

    let mut states = decoded.into_iter();
    for y in min_y..max_y {
        for x in min_x..max_x {
            if let Some(state) = states.next() {
                let idx = index_of(grid.size, x, y);
                grid.cells[idx] = state;
            }
        }
    }

    Ok(total)
}
