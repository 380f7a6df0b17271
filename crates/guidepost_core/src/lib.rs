//! Core content types for Guidepost.
//!
//! A [`Guide`] is a list of [`Section`]s shown on a hub menu. Each section is
//! an ordered list of [`Step`]s; a step may branch via [`Choice`]s or redirect
//! its forward action with a `next_step_id`. Everything here is immutable once
//! constructed and carries no navigation state.

mod extras;
mod guide;
mod icon;
mod ids;
mod section;
mod step;

pub use extras::{CodeBlock, CommandEntry, Feature, InfoPanel, PromptItem, PromptTab, ResourceLink};
pub use guide::{Guide, GuideKind};
pub use icon::Icon;
pub use ids::{SectionId, StepId};
pub use section::Section;
pub use step::{Choice, Step, StepBuilder, StepBuilderError};
