//! Control affordances derived from the current step.

use serde::{Deserialize, Serialize};

/// What the forward control of the current step should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ForwardControl {
    /// A "Next" button that calls `go_next`
    #[display("next")]
    Next,
    /// A "Finish" button that returns to the hub
    #[display("finish")]
    Finish,
    /// No forward button; the step's choices are the only way on
    #[display("choices")]
    Choices,
    /// Nothing to show (hub)
    #[display("hidden")]
    Hidden,
}

/// What the back control of the current step should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum BackControl {
    /// Go back within the section
    #[display("previous")]
    Previous,
    /// Cannot go back further; leave to the hub
    #[display("hub")]
    Hub,
    /// Nothing to show (hub)
    #[display("hidden")]
    Hidden,
}

/// Back and forward affordances for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepControls {
    /// Back control
    pub back: BackControl,
    /// Forward control
    pub forward: ForwardControl,
}

impl StepControls {
    /// Controls shown at the hub.
    pub const HIDDEN: StepControls = StepControls {
        back: BackControl::Hidden,
        forward: ForwardControl::Hidden,
    };
}

/// Position of the current step within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    /// Zero-based step index
    pub index: usize,
    /// Number of steps in the section
    pub total: usize,
}

impl Progress {
    /// Fraction of the section reached, counting the current step.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.total as f64
    }
}
