//! Core automaton logic and grid operations.
//!
//! This module contains the grid model, the ordered rule table, the
//! synchronous stepping engine, and bulk region copies.
//! The driver and the FFI layer in `ffi/` call into these.

pub mod grid;
pub mod region;
pub mod rules;
pub mod stepping;

pub use grid::{index_of, neighbor_states, new_grid, Grid, GridState, NeighborSet};
pub use region::{extract_region, import_region};
pub use rules::{next_state, Rule, RULES};
pub use stepping::TransitionEngine;
