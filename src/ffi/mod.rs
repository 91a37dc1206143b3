//! C FFI layer for host integration.
//!
//! This module exports C ABI functions for hosts that drive the simulation
//! from another runtime. All functions are marked with `#[no_mangle]` and
//! use `extern "C"`.
//!
//! The actual logic is in `automaton` and `driver`. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions.
//!
//! Status codes: 0 = success, 1 = null pointer, anything else is
//! `Error::code()`.

pub mod driver;
pub mod grid;
pub mod lifecycle;
pub mod region;

pub use driver::{
    ta_erase, ta_is_running, ta_paint, ta_set_brush, ta_set_interval_ms, ta_set_running, ta_tick,
    ta_toggle_running,
};
pub use grid::{ta_clear, ta_get_cell, ta_set_cell, ta_step};
pub use lifecycle::{ta_create, ta_destroy, ta_get_generation};
pub use region::{ta_extract_region, ta_import_region};

use crate::error::Result;

pub const STATUS_OK: i32 = 0;
pub const STATUS_NULL: i32 = 1;

/// Collapse a result into a C status code.
pub(crate) fn status<T>(result: Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.code(),
    }
}
