//! Navigation state: current position, history stack and transition direction.

use derive_getters::Getters;
use guidepost_core::SectionId;
use serde::{Deserialize, Serialize};

/// A (section, step index) pair.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Getters,
    derive_new::new,
    derive_more::Display,
)]
#[display("{}#{}", section, index)]
pub struct Position {
    /// Section id
    section: SectionId,
    /// Step index within the section
    index: usize,
}

/// Direction of the most recent transition.
///
/// Only drives transition animation; it carries no weight for state
/// correctness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Direction {
    /// Moving deeper into a section
    #[default]
    #[display("forward")]
    Forward,
    /// Undoing a move or leaving a section
    #[display("backward")]
    Backward,
}

impl Direction {
    /// Returns +1 for forward and -1 for backward.
    pub fn as_sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Current position, history of forward/branch moves, and last direction.
///
/// `current == None` is the hub ("no section selected"). History entries are
/// the positions moved *away from*, so popping one undoes exactly one
/// forward or branch move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct NavigationState {
    /// Current position, or `None` at the hub
    current: Option<Position>,
    /// Positions to return to, most recent last
    history: Vec<Position>,
    /// Direction of the last transition
    direction: Direction,
}

impl NavigationState {
    /// Returns true when no section is selected.
    pub fn is_in_hub(&self) -> bool {
        self.current.is_none()
    }

    /// Current section id, if any.
    pub fn section_id(&self) -> Option<&SectionId> {
        self.current.as_ref().map(Position::section)
    }

    /// Current step index, if any.
    pub fn step_index(&self) -> Option<usize> {
        self.current.as_ref().map(|p| p.index)
    }

    pub(crate) fn enter(&mut self, section: SectionId, index: usize) {
        self.current = Some(Position::new(section, index));
        self.history.clear();
        self.direction = Direction::Forward;
    }

    pub(crate) fn advance_to(&mut self, index: usize) {
        if let Some(current) = self.current.as_mut() {
            self.history.push(current.clone());
            current.index = index;
            self.direction = Direction::Forward;
        }
    }

    /// Moves to `index` without recording history, so backing out walks the
    /// ordinal order from the new position.
    pub(crate) fn jump_to(&mut self, index: usize) {
        if let Some(current) = self.current.as_mut() {
            self.direction = if index > current.index {
                Direction::Forward
            } else {
                Direction::Backward
            };
            current.index = index;
            self.history.clear();
        }
    }

    pub(crate) fn retreat(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current = Some(previous);
            self.direction = Direction::Backward;
            return true;
        }
        match self.current.as_mut() {
            Some(current) if current.index > 0 => {
                current.index -= 1;
                self.direction = Direction::Backward;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
        self.history.clear();
        self.direction = Direction::Backward;
    }
}

/// A completed state change, returned by navigator operations.
///
/// Operations that do nothing return `None` instead of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Transition {
    /// Position before the move (`None` = hub)
    from: Option<Position>,
    /// Position after the move (`None` = hub)
    to: Option<Position>,
    /// Direction of the move
    direction: Direction,
}

impl Transition {
    /// Returns true if this transition left a section for the hub.
    pub fn is_exit_to_hub(&self) -> bool {
        self.from.is_some() && self.to.is_none()
    }
}
