//! Terminal UI host for Guidepost.
//!
//! [`App`] turns key presses into navigator commands; [`ui::draw`] renders
//! the hub menu or the current step. [`run`] drives both against a real
//! terminal.

mod app;
mod terminal;
pub mod ui;

pub use app::App;
pub use terminal::run;
