//! Error types shared by the grid, the engine, and the driver.

use thiserror::Error;

/// Errors surfaced by the automaton core.
#[derive(Debug, Error)]
pub enum Error {
    /// Coordinate access outside `[0, size)`.
    #[error("cell ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// A grid whose shape does not match what the operation expects.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A raw code that is not one of the four cell states.
    #[error("invalid cell state code: {0}")]
    InvalidState(u8),

    /// Configuration values outside their accepted ranges.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool for parallel stepping could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable status code for the C ABI. 0 and 1 are reserved for
    /// success and null pointer.
    pub fn code(&self) -> i32 {
        match self {
            Error::OutOfBounds { .. } => 2,
            Error::InvalidGrid(_) => 3,
            Error::InvalidState(_) => 4,
            Error::InvalidConfig(_) => 5,
            Error::ThreadPool(_) => 6,
        }
    }
}
