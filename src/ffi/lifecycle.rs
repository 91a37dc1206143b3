//! Driver creation, destruction, and generation queries.

use crate::driver::SimulationDriver;

/// Creates a paused driver over a `size` x `size` all-Dormant grid.
///
/// # Returns
/// A pointer to a new SimulationDriver, or null if `size` is 0.
///
/// # Safety
/// The returned pointer must eventually be freed with `ta_destroy()`.
#[no_mangle]
pub extern "C" fn ta_create(size: u16) -> *mut SimulationDriver {
    match SimulationDriver::with_grid_size(size as usize) {
        Ok(driver) => Box::into_raw(Box::new(driver)),
        Err(err) => {
            log::warn!("ta_create({size}) failed: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a driver and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ta_destroy(ptr: *mut SimulationDriver) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_get_generation(ptr: *const SimulationDriver) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
