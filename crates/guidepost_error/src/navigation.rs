//! Navigation error types.

/// Specific error conditions for navigator operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NavigationErrorKind {
    /// Section id not present in the guide
    #[display("Unknown section '{}'", _0)]
    UnknownSection(String),
    /// Step id not present in the current section
    #[display("Unknown step '{}' in section '{}'", step, section)]
    UnknownStep {
        /// Section that was searched
        section: String,
        /// Step id that failed to resolve
        step: String,
    },
    /// Section exists but has no steps
    #[display("Section '{}' has no steps", _0)]
    EmptySection(String),
    /// Operation requires a selected section
    #[display("No section selected")]
    NoSection,
    /// Step index out of range for the current section
    #[display("Section '{}' has no step #{}", section, index)]
    StepOutOfRange {
        /// Section that was searched
        section: String,
        /// Zero-based step index
        index: usize,
    },
    /// Choice index out of range for the current step
    #[display("Step '{}' has no choice #{}", step, index)]
    NoSuchChoice {
        /// Step whose choices were searched
        step: String,
        /// Zero-based choice index
        index: usize,
    },
}

/// Error type for navigator operations.
///
/// # Examples
///
/// ```
/// use guidepost_error::{NavigationError, NavigationErrorKind};
///
/// let err = NavigationError::new(NavigationErrorKind::UnknownSection("demo".to_string()));
/// assert!(format!("{}", err).contains("demo"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Navigation Error: {} at line {} in {}", kind, line, file)]
pub struct NavigationError {
    /// The specific error condition
    pub kind: NavigationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NavigationError {
    /// Create a new NavigationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NavigationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
