//! Cell access, stepping, and clearing.

use super::{status, STATUS_NULL, STATUS_OK};
use crate::driver::SimulationDriver;
use crate::state::CellState;

/// Returned by `ta_get_cell` for a null pointer or out-of-bounds cell.
pub const CELL_ERROR: u8 = 255;

/// Writes a raw state code (0 = Alpha, 1 = Beta, 2 = Gamma, 3 = Dormant).
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, otherwise an error status.
/// Does not change the generation counter.
#[no_mangle]
pub unsafe extern "C" fn ta_set_cell(
    ptr: *mut SimulationDriver,
    x: i32,
    y: i32,
    code: u8,
) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    let driver = &mut *ptr;
    status(CellState::from_code(code).and_then(|state| driver.set(x, y, state)))
}

/// Gets the raw state code of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// The state code, or `CELL_ERROR` if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn ta_get_cell(ptr: *const SimulationDriver, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return CELL_ERROR;
    }

    (*ptr).get(x, y).map_or(CELL_ERROR, CellState::code)
}

/// Advances the automaton by exactly one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
#[no_mangle]
pub unsafe extern "C" fn ta_step(ptr: *mut SimulationDriver) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    status((*ptr).step_now())
}

/// Resets every cell to Dormant and the generation to 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
#[no_mangle]
pub unsafe extern "C" fn ta_clear(ptr: *mut SimulationDriver) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    (*ptr).clear();
    STATUS_OK
}
