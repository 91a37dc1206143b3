//! Tetra Automata - four-state 2D cellular automaton.
//!
//! A bounded N x N grid of cells, each Dormant, Alpha, Beta, or Gamma,
//! advanced synchronously by an ordered rule table over the clipped Moore
//! neighborhood. The library is usable directly from Rust and exposes a
//! C ABI (`ffi`) for hosts that render and collect input elsewhere.

pub mod automaton;
pub mod config;
pub mod driver;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{new_grid, Grid, GridState, NeighborSet, Rule, TransitionEngine, RULES};
pub use config::SimulationConfig;
pub use driver::SimulationDriver;
pub use error::{Error, Result};
pub use state::CellState;
