//! The four cell states.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// State held by a single cell.
///
/// Raw codes match the host convention: Alpha=0, Beta=1, Gamma=2, Dormant=3.
/// The transition rules are written against the variants, never the codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellState {
    Alpha = 0,
    Beta = 1,
    Gamma = 2,
    #[default]
    Dormant = 3,
}

impl CellState {
    /// All states in code order.
    pub const ALL: [CellState; 4] = [
        CellState::Alpha,
        CellState::Beta,
        CellState::Gamma,
        CellState::Dormant,
    ];

    /// Raw code for this state.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a raw code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(CellState::Alpha),
            1 => Ok(CellState::Beta),
            2 => Ok(CellState::Gamma),
            3 => Ok(CellState::Dormant),
            other => Err(Error::InvalidState(other)),
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        CellState::from_code(code)
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        state.code()
    }
}
