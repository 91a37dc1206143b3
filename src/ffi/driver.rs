//! Run mode, speed, brush, and painting.

use std::time::Instant;

use super::{status, STATUS_NULL, STATUS_OK};
use crate::driver::SimulationDriver;
use crate::state::CellState;

/// Enables (non-zero) or pauses (0) automatic stepping.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
#[no_mangle]
pub unsafe extern "C" fn ta_set_running(ptr: *mut SimulationDriver, running: u8) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    (*ptr).set_running(running != 0);
    STATUS_OK
}

/// Flips run mode.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// 1 if now running, 0 if paused or null pointer.
#[no_mangle]
pub unsafe extern "C" fn ta_toggle_running(ptr: *mut SimulationDriver) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).toggle_running() as u8
}

/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// 1 if running, 0 if paused or null pointer.
#[no_mangle]
pub unsafe extern "C" fn ta_is_running(ptr: *const SimulationDriver) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).is_running() as u8
}

/// Sets the auto-run interval in milliseconds.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// The interval actually applied after clamping, or 0 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn ta_set_interval_ms(ptr: *mut SimulationDriver, ms: u32) -> u32 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).set_interval_ms(ms as u64).as_millis() as u32
}

/// Selects the state written by `ta_paint`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
#[no_mangle]
pub unsafe extern "C" fn ta_set_brush(ptr: *mut SimulationDriver, code: u8) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    let driver = &mut *ptr;
    status(CellState::from_code(code).map(|state| driver.set_brush(state)))
}

/// Writes the brush state at `(x, y)`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
#[no_mangle]
pub unsafe extern "C" fn ta_paint(ptr: *mut SimulationDriver, x: i32, y: i32) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    status((*ptr).paint(x, y))
}

/// Writes Dormant at `(x, y)`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
#[no_mangle]
pub unsafe extern "C" fn ta_erase(ptr: *mut SimulationDriver, x: i32, y: i32) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    status((*ptr).erase(x, y))
}

/// Call once per host frame. Steps if running and the interval has elapsed.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// 1 if a step happened, 0 if not, or the negated status on failure
/// (-1 for a null pointer).
#[no_mangle]
pub unsafe extern "C" fn ta_tick(ptr: *mut SimulationDriver) -> i32 {
    if ptr.is_null() {
        return -STATUS_NULL;
    }

    match (*ptr).tick(Instant::now()) {
        Ok(stepped) => stepped as i32,
        Err(err) => -err.code(),
    }
}
