//! Content loading error types.

/// Specific error conditions for guide content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentErrorKind {
    /// Failed to read guide file
    FileRead(String),
    /// Failed to parse TOML content
    TomlParse(String),
    /// Guide failed validation; one message per problem
    Invalid(Vec<String>),
    /// Directory contained no guide files
    NoGuides(String),
    /// Two guide files share the same id
    DuplicateGuide(String),
}

impl std::fmt::Display for ContentErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentErrorKind::FileRead(msg) => write!(f, "Failed to read guide file: {}", msg),
            ContentErrorKind::TomlParse(msg) => write!(f, "Failed to parse TOML: {}", msg),
            ContentErrorKind::Invalid(problems) => {
                write!(f, "Guide failed validation: {}", problems.join("; "))
            }
            ContentErrorKind::NoGuides(dir) => {
                write!(f, "No guide files (*.toml) found in '{}'", dir)
            }
            ContentErrorKind::DuplicateGuide(id) => {
                write!(f, "Guide id '{}' is defined by more than one file", id)
            }
        }
    }
}

/// Error type for content loading.
///
/// # Examples
///
/// ```
/// use guidepost_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::TomlParse("expected `=`".to_string()));
/// assert!(format!("{}", err).contains("TOML"));
/// ```
#[derive(Debug, Clone)]
pub struct ContentError {
    /// The specific error condition
    pub kind: ContentErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ContentError {
    /// Create a new ContentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Content Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ContentError {}
