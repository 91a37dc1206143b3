//! Runtime configuration for a simulation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::CellState;

pub const DEFAULT_GRID_SIZE: usize = 100;
pub const DEFAULT_INTERVAL_MS: u64 = 500;
pub const MIN_INTERVAL_MS: u64 = 100;
pub const MAX_INTERVAL_MS: u64 = 1100;

/// Options recognised by the driver. Missing fields take their defaults,
/// so a host may deserialize a partial document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length N, fixed for the life of the grid.
    pub grid_size: usize,
    /// Auto-run interval in milliseconds.
    pub interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// State written by paint commands.
    pub brush: CellState,
    /// Worker threads per step (0 or 1 = single-threaded).
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            grid_size: DEFAULT_GRID_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            max_interval_ms: MAX_INTERVAL_MS,
            brush: CellState::Alpha,
            threads: 1,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with a different grid size.
    pub fn with_grid_size(grid_size: usize) -> Self {
        SimulationConfig {
            grid_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be at least 1".into()));
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.max_interval_ms {
            return Err(Error::InvalidConfig(format!(
                "interval bounds {}..={} ms are not a positive range",
                self.min_interval_ms, self.max_interval_ms
            )));
        }
        if !(self.min_interval_ms..=self.max_interval_ms).contains(&self.interval_ms) {
            return Err(Error::InvalidConfig(format!(
                "interval_ms {} outside {}..={}",
                self.interval_ms, self.min_interval_ms, self.max_interval_ms
            )));
        }
        Ok(())
    }

    /// Clamp `ms` into the configured interval bounds.
    pub fn clamp_interval(&self, ms: u64) -> u64 {
        ms.clamp(self.min_interval_ms, self.max_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_size, 100);
        assert_eq!(config.interval_ms, 500);
        assert_eq!(config.brush, CellState::Alpha);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = SimulationConfig::with_grid_size(0);
        assert!(matches!(zero.validate(), Err(Error::InvalidConfig(_))));

        let inverted = SimulationConfig {
            min_interval_ms: 900,
            max_interval_ms: 200,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let outside = SimulationConfig {
            interval_ms: 50,
            ..Default::default()
        };
        assert!(outside.validate().is_err());
    }

    #[test]
    fn test_clamp_interval() {
        let config = SimulationConfig::default();
        assert_eq!(config.clamp_interval(10), 100);
        assert_eq!(config.clamp_interval(750), 750);
        assert_eq!(config.clamp_interval(5000), 1100);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "grid_size": 32, "brush": "gamma" }"#).unwrap();
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.brush, CellState::Gamma);
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.threads, 1);
    }
}
