//! Region extraction and import FFI functions.

use super::{status, STATUS_NULL, STATUS_OK};
use crate::driver::SimulationDriver;

/// Clamp `[min, max)` to a grid of side `size`.
/// Returns the clamped rectangle and its cell count.
fn visible_region(
    size: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> ((i32, i32, i32, i32), usize) {
    let size = size.min(i32::MAX as usize) as i32;
    let clamp = |v: i32| v.clamp(0, size);
    let (min_x, min_y, max_x, max_y) = (clamp(min_x), clamp(min_y), clamp(max_x), clamp(max_y));

    let width = (max_x - min_x).max(0) as usize;
    let height = (max_y - min_y).max(0) as usize;
    ((min_x, min_y, max_x, max_y), width * height)
}

/// Extracts a rectangular region of raw state codes into a flat buffer.
///
/// # Layout
/// The buffer is filled in y,x order (x changes fastest).
/// This matches the layout expected by `ta_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
/// - `out_buf` must point to at least as many bytes as the part of
///   `[min, max)` that lies on the grid; the rectangle is clamped first
///
/// # Returns
/// Number of cells written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ta_extract_region(
    ptr: *const SimulationDriver,
    out_buf: *mut u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let driver = &*ptr;
    let ((min_x, min_y, max_x, max_y), len) =
        visible_region(driver.grid().size(), min_x, min_y, max_x, max_y);
    if len == 0 {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    driver.extract_region(buf_slice, min_x, min_y, max_x, max_y) as u64
}

/// Imports a rectangular region of raw state codes from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in y,x order (matching `ta_extract_region`).
/// Any unknown code rejects the whole import and leaves the grid unchanged.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationDriver, or null
/// - `in_buf` must point to at least as many bytes as the part of
///   `[min, max)` that lies on the grid, laid out for the clamped rectangle
///
/// # Returns
/// 0 on success, 1 on null pointer, otherwise an error status.
#[no_mangle]
pub unsafe extern "C" fn ta_import_region(
    ptr: *mut SimulationDriver,
    in_buf: *const u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> i32 {
    if ptr.is_null() || in_buf.is_null() {
        return STATUS_NULL;
    }

    let driver = &mut *ptr;
    let ((min_x, min_y, max_x, max_y), len) =
        visible_region(driver.grid().size(), min_x, min_y, max_x, max_y);
    if len == 0 {
        return STATUS_OK;
    }

    let buf_slice = std::slice::from_raw_parts(in_buf, len);
    status(driver.import_region(buf_slice, min_x, min_y, max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::grid::{ta_get_cell, ta_set_cell};
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_extract_region_basic() {
        unsafe {
            let driver = lifecycle::ta_create(8);
            ta_set_cell(driver, 2, 2, 0);
            ta_set_cell(driver, 3, 2, 1);
            ta_set_cell(driver, 2, 3, 2);

            let mut buffer = vec![0u8; 16];
            let written = ta_extract_region(driver, buffer.as_mut_ptr(), 2, 2, 6, 6);

            assert_eq!(written, 16);
            assert_eq!(buffer[0], 0);
            assert_eq!(buffer[1], 1);
            assert_eq!(buffer[4], 2);
            assert_eq!(buffer[15], 3);

            lifecycle::ta_destroy(driver);
        }
    }

    #[test]
    fn test_extract_region_clamped() {
        unsafe {
            let driver = lifecycle::ta_create(4);

            let mut buffer = vec![0u8; 12 * 12];
            let written = ta_extract_region(driver, buffer.as_mut_ptr(), -2, -2, 10, 10);

            // Clamped to 4x4
            assert_eq!(written, 16);

            lifecycle::ta_destroy(driver);
        }
    }

    #[test]
    fn test_off_grid_viewport_uses_visible_sized_buffer() {
        unsafe {
            let driver = lifecycle::ta_create(4);
            ta_set_cell(driver, 3, 3, 2);

            // Viewport [2, 8) x [2, 8) overlaps only the 2x2 bottom-right corner
            let mut buffer = [9u8; 4];
            let written = ta_extract_region(driver, buffer.as_mut_ptr(), 2, 2, 8, 8);

            assert_eq!(written, 4);
            assert_eq!(buffer, [3, 3, 3, 2]);

            lifecycle::ta_destroy(driver);
        }
    }

    #[test]
    fn test_extreme_extent_is_clamped() {
        unsafe {
            let driver = lifecycle::ta_create(4);

            let mut buffer = [0u8; 16];
            let written = ta_extract_region(
                driver,
                buffer.as_mut_ptr(),
                i32::MIN,
                i32::MIN,
                i32::MAX,
                i32::MAX,
            );
            assert_eq!(written, 16);
            assert!(buffer.iter().all(|&c| c == 3));

            let input = [0u8; 16];
            let result = ta_import_region(
                driver,
                input.as_ptr(),
                i32::MIN,
                i32::MIN,
                i32::MAX,
                i32::MAX,
            );
            assert_eq!(result, 0);
            assert_eq!(ta_get_cell(driver, 0, 0), 0);
            assert_eq!(ta_get_cell(driver, 3, 3), 0);

            lifecycle::ta_destroy(driver);
        }
    }

    #[test]
    fn test_off_grid_import_reads_visible_part_only() {
        unsafe {
            let driver = lifecycle::ta_create(4);

            // [-1, 1) x [-1, 1) covers only cell (0, 0)
            let input = [1u8];
            assert_eq!(ta_import_region(driver, input.as_ptr(), -1, -1, 1, 1), 0);
            assert_eq!(ta_get_cell(driver, 0, 0), 1);
            assert_eq!(ta_get_cell(driver, 1, 0), 3);

            // Entirely off the grid: nothing read, nothing written
            assert_eq!(ta_import_region(driver, input.as_ptr(), 10, 10, 12, 12), 0);

            lifecycle::ta_destroy(driver);
        }
    }

    #[test]
    fn test_import_region() {
        unsafe {
            let driver = lifecycle::ta_create(4);
            let input = [0u8, 1, 2, 0];

            assert_eq!(ta_import_region(driver, input.as_ptr(), 1, 1, 3, 3), 0);
            assert_eq!(ta_get_cell(driver, 1, 1), 0);
            assert_eq!(ta_get_cell(driver, 2, 1), 1);
            assert_eq!(ta_get_cell(driver, 1, 2), 2);

            let bad = [0u8, 1, 200, 0];
            assert_eq!(ta_import_region(driver, bad.as_ptr(), 0, 0, 2, 2), 4);
            assert_eq!(ta_get_cell(driver, 0, 0), 3);

            lifecycle::ta_destroy(driver);
        }
    }

    #[test]
    fn test_region_null_checks() {
        unsafe {
            let driver = lifecycle::ta_create(4);
            let mut buffer = vec![0u8; 16];

            assert_eq!(
                ta_extract_region(ptr::null(), buffer.as_mut_ptr(), 0, 0, 4, 4),
                0
            );
            assert_eq!(ta_extract_region(driver, ptr::null_mut(), 0, 0, 4, 4), 0);
            assert_eq!(
                ta_import_region(ptr::null_mut(), buffer.as_ptr(), 0, 0, 4, 4),
                STATUS_NULL
            );
            assert_eq!(ta_import_region(driver, ptr::null(), 0, 0, 4, 4), STATUS_NULL);

            lifecycle::ta_destroy(driver);
        }
    }
}
