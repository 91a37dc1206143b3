//! The ordered transition rule table.
//!
//! Rules are checked top to bottom and the first match decides the next
//! state. The order is part of the semantics: a Beta cell next to both an
//! Alpha and a Beta resolves through the Beta/Beta rule before the
//! Beta/Alpha rule is ever consulted.

use super::grid::NeighborSet;
use crate::state::CellState::{self, Alpha, Beta, Dormant, Gamma};

/// One row of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// State the cell must currently hold.
    pub current: CellState,
    /// States that must all be present among the neighbors.
    pub requires: &'static [CellState],
    /// State the cell takes when the rule fires.
    pub next: CellState,
}

impl Rule {
    #[inline]
    pub fn matches(&self, current: CellState, neighbors: NeighborSet) -> bool {
        self.current == current && self.requires.iter().all(|&s| neighbors.contains(s))
    }
}

/// Rule table in priority order.
pub const RULES: [Rule; 6] = [
    Rule {
        current: Alpha,
        requires: &[Gamma],
        next: Beta,
    },
    Rule {
        current: Alpha,
        requires: &[Beta],
        next: Dormant,
    },
    Rule {
        current: Beta,
        requires: &[Beta],
        next: Gamma,
    },
    Rule {
        current: Gamma,
        requires: &[Gamma],
        next: Alpha,
    },
    Rule {
        current: Dormant,
        requires: &[Alpha, Gamma],
        next: Beta,
    },
    Rule {
        current: Beta,
        requires: &[Alpha],
        next: Dormant,
    },
];

/// Next state for a cell holding `current` whose neighbors hold `neighbors`.
/// Falls through to `current` when no rule fires.
#[inline]
pub fn next_state(current: CellState, neighbors: NeighborSet) -> CellState {
    RULES
        .iter()
        .find(|rule| rule.matches(current, neighbors))
        .map_or(current, |rule| rule.next)
}
