//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the guidepost binary.

mod commands;
mod outline;
mod validate;
mod view;

pub use commands::{Cli, Commands, ValidationOutputFormat, WarningArgs};
pub use outline::{handle_outline_command, outline};
pub use validate::{EXIT_ERRORS, EXIT_WARNINGS, exit_code, handle_validate_command};
pub use view::{handle_view_command, resolve_guide};
