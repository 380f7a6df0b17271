//! Presentational icon names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Icon attached to a section or choice.
///
/// Icons are opaque to navigation; renderers map them to glyphs. Names are
/// accepted in kebab-case (`book-open`) or camelCase (`bookOpen`), and any
/// unrecognized name is kept as [`Icon::Other`] rather than failing.
///
/// # Examples
///
/// ```
/// use guidepost_core::Icon;
///
/// assert_eq!(Icon::parse("bookOpen"), Icon::BookOpen);
/// assert_eq!(Icon::parse("book-open"), Icon::BookOpen);
/// assert_eq!(Icon::parse("rocket"), Icon::Other("rocket".to_string()));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    /// Terminal prompt
    #[default]
    Terminal,
    /// Light bulb
    Lightbulb,
    /// Apple logo
    Apple,
    /// Windows logo
    Windows,
    /// Wrench
    Wrench,
    /// Puzzle piece
    Puzzle,
    /// Open book
    BookOpen,
    /// Text document
    FileText,
    /// Compass
    Compass,
    /// Code brackets
    Code,
    /// Chart
    Chart,
    /// Trophy
    Trophy,
    /// Unrecognized icon name, kept verbatim
    #[strum(default)]
    Other(String),
}

impl Icon {
    /// Parses an icon name, normalizing camelCase to kebab-case.
    pub fn parse(name: &str) -> Self {
        let mut kebab = String::with_capacity(name.len() + 4);
        for (i, ch) in name.trim().chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    kebab.push('-');
                }
                kebab.push(ch.to_ascii_lowercase());
            } else {
                kebab.push(ch);
            }
        }
        match Icon::from_str(&kebab) {
            Ok(Icon::Other(_)) | Err(_) => Icon::Other(name.to_string()),
            Ok(icon) => icon,
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Icon::parse(&name)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.to_string()
    }
}
