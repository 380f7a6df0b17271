//! Host commands and their mapping onto navigator operations.

use crate::{ForwardControl, StepNavigator, Transition};
use guidepost_core::GuideKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Input-agnostic commands a host shell sends to the navigator.
///
/// Keyboard keys, buttons and scripted walkthroughs all reduce to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum NavCommand {
    /// Arrow-right style advance; suppressed on choice steps
    #[display("forward")]
    Forward,
    /// Activate the primary forward control (Next or Finish)
    #[display("confirm")]
    Confirm,
    /// Arrow-left style retreat; leaves to the hub when exhausted
    #[display("back")]
    Back,
    /// Escape: return to the hub from anywhere
    #[display("exit")]
    Exit,
    /// Pick the n-th (0-based) choice, the n-th section at the hub, or the
    /// n-th slide of a deck
    #[display("choose {}", _0)]
    Choose(usize),
}

impl StepNavigator {
    /// Applies a host command.
    ///
    /// At the hub only [`NavCommand::Choose`] does anything: it enters the
    /// n-th section. Inside a section:
    ///
    /// - `Forward` calls `go_next` unless the step has choices.
    /// - `Confirm` follows the forward control: Next advances, Finish
    ///   returns to the hub.
    /// - `Back` calls `go_prev`, returning to the hub when that cannot move
    ///   (decks stay on their first slide instead).
    /// - `Exit` returns to the hub.
    /// - `Choose(n)` takes the n-th choice of the current step. In a deck it
    ///   jumps to the n-th slide instead.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: NavCommand) -> Option<Transition> {
        if self.state().is_in_hub() {
            return match command {
                NavCommand::Choose(n) => {
                    let Some(section) = self.guide().section_at(n) else {
                        debug!(index = n, "No section at hub position");
                        return None;
                    };
                    let id = section.id().clone();
                    self.select_section(id.as_str())
                }
                _ => None,
            };
        }

        match command {
            NavCommand::Forward => {
                if self.has_choices() {
                    debug!("Forward suppressed on choice step");
                    None
                } else {
                    self.go_next()
                }
            }
            NavCommand::Confirm => match self.controls().forward {
                ForwardControl::Next => self.go_next(),
                ForwardControl::Finish => self.reset_to_hub(),
                ForwardControl::Choices | ForwardControl::Hidden => None,
            },
            NavCommand::Back => self.go_prev().or_else(|| {
                if *self.guide().kind() == GuideKind::Deck {
                    None
                } else {
                    self.reset_to_hub()
                }
            }),
            NavCommand::Exit => self.reset_to_hub(),
            NavCommand::Choose(n) if *self.guide().kind() == GuideKind::Deck => self.jump_to(n),
            NavCommand::Choose(n) => self
                .try_choose(n)
                .map_err(|e| warn!(error = %e, "Ignoring choice command"))
                .ok(),
        }
    }
}
