//! Branching step navigation for Guidepost guides.
//!
//! [`StepNavigator`] tracks the current section and step of a
//! [`Guide`](guidepost_core::Guide), moving forward along the linear chain
//! (or a step's `next_step_id` override), jumping on branch choices, and
//! undoing moves exactly through a history stack. Hosts translate their
//! input into [`NavCommand`]s and draw from the navigator's queries.
//!
//! All operations are synchronous and run to completion; a navigator is
//! owned by one host at a time.

mod command;
mod controls;
mod navigator;
mod state;

pub use command::NavCommand;
pub use controls::{BackControl, ForwardControl, Progress, StepControls};
pub use navigator::StepNavigator;
pub use state::{Direction, NavigationState, Position, Transition};
