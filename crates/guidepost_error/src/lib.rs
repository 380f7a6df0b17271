//! Error types for the Guidepost library.
//!
//! This crate provides the foundation error types used throughout the Guidepost
//! workspace. Each domain gets a location-tracking error struct; the
//! [`GuidepostError`] wrapper unifies them for callers that cross domains.

mod config;
mod content;
mod navigation;
#[cfg(feature = "tui")]
mod tui;

pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind};
pub use navigation::{NavigationError, NavigationErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GuidepostErrorKind {
    /// Navigation error
    Navigation(NavigationError),
    /// Content loading or validation error
    Content(ContentError),
    /// Configuration error
    Config(ConfigError),
    /// Terminal UI error
    #[cfg(feature = "tui")]
    Tui(TuiError),
}

impl std::fmt::Display for GuidepostErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuidepostErrorKind::Navigation(e) => write!(f, "{}", e),
            GuidepostErrorKind::Content(e) => write!(f, "{}", e),
            GuidepostErrorKind::Config(e) => write!(f, "{}", e),
            #[cfg(feature = "tui")]
            GuidepostErrorKind::Tui(e) => write!(f, "{}", e),
        }
    }
}

/// Guidepost error with kind discrimination.
#[derive(Debug)]
pub struct GuidepostError(Box<GuidepostErrorKind>);

impl GuidepostError {
    /// Create a new error from a kind.
    pub fn new(kind: GuidepostErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GuidepostErrorKind {
        &self.0
    }
}

impl std::fmt::Display for GuidepostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Guidepost Error: {}", self.0)
    }
}

impl std::error::Error for GuidepostError {}

// Generic From implementation for any type that converts to GuidepostErrorKind
impl<T> From<T> for GuidepostError
where
    T: Into<GuidepostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Guidepost operations.
pub type GuidepostResult<T> = std::result::Result<T, GuidepostError>;
