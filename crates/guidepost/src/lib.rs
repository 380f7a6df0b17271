//! Guidepost: branching step-by-step guides and slide decks.
//!
//! Guides are authored in TOML (see [`guidepost_content`]), walked by a
//! [`StepNavigator`], and shown in the terminal by [`guidepost_tui`]. This
//! crate re-exports the pieces and hosts the `guidepost` command-line tool.
//!
//! # Examples
//!
//! ```
//! use guidepost::{NavCommand, StepNavigator, load_guide_str};
//! use std::sync::Arc;
//!
//! let guide = load_guide_str(r#"
//!     [guide]
//!     title = "Demo"
//!
//!     [[sections]]
//!     id = "demo"
//!     title = "Demo"
//!
//!     [[sections.steps]]
//!     id = "a"
//!     title = "First"
//!
//!     [[sections.steps]]
//!     id = "b"
//!     title = "Second"
//! "#).unwrap();
//!
//! let mut nav = StepNavigator::new(Arc::new(guide));
//! nav.dispatch(NavCommand::Choose(0));
//! nav.dispatch(NavCommand::Forward);
//! assert_eq!(nav.current_step().unwrap().id().as_str(), "b");
//! ```

pub mod cli;
mod config;
mod logging;

pub use config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, Settings};
pub use logging::{LogTarget, init_logging};

pub use guidepost_content::{
    ContentStore, ValidationConfig, ValidationResult, load_guide_file, load_guide_str,
    validate_guide_file, validate_guide_toml,
};
pub use guidepost_core::{
    Choice, CodeBlock, CommandEntry, Feature, Guide, GuideKind, Icon, InfoPanel, PromptItem,
    PromptTab, ResourceLink, Section, SectionId, Step, StepBuilder, StepId,
};
pub use guidepost_error::{
    ConfigError, ContentError, ContentErrorKind, GuidepostError, GuidepostErrorKind,
    GuidepostResult, NavigationError, NavigationErrorKind,
};
pub use guidepost_navigator::{
    BackControl, ForwardControl, NavCommand, NavigationState, Progress, StepControls,
    StepNavigator, Transition,
};
