//! Terminal UI error types.

/// Kinds of TUI errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TuiErrorKind {
    /// Terminal setup or teardown failed
    #[display("Terminal error: {}", _0)]
    Terminal(String),
    /// Reading an input event failed
    #[display("Event error: {}", _0)]
    Event(String),
    /// Drawing a frame failed
    #[display("Render error: {}", _0)]
    Render(String),
}

/// TUI error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// The kind of error that occurred
    pub kind: TuiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TUI error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
