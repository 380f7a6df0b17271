//! Presentational extras attached to steps.
//!
//! None of these types affect navigation. They are carried through from the
//! content files so renderers can draw them.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_copyable() -> bool {
    true
}

/// A block of code or terminal output shown on a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CodeBlock {
    /// Language hint, e.g. "bash"
    #[serde(default)]
    language: String,
    /// The code itself
    code: String,
    /// Caption shown above the block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    /// Whether the renderer should offer a copy affordance
    #[serde(default = "default_copyable")]
    copyable: bool,
}

impl CodeBlock {
    /// Creates a copyable code block.
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            filename: None,
            copyable: true,
        }
    }

    /// Sets the caption.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets whether the block is copyable.
    pub fn with_copyable(mut self, copyable: bool) -> Self {
        self.copyable = copyable;
        self
    }
}

/// A feature card: label, short description, accent color and optional link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Feature {
    /// Card heading
    label: String,
    /// Card body
    description: String,
    /// Accent color (hex)
    #[serde(default)]
    color: String,
    /// Optional external link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

/// One example prompt inside a prompt tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PromptItem {
    /// Grouping label
    category: String,
    /// Prompt text
    prompt: String,
}

/// A tab of example prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PromptTab {
    /// Tab id, unique within the step
    id: String,
    /// Tab label
    label: String,
    /// Prompts listed under this tab
    #[serde(default)]
    items: Vec<PromptItem>,
}

/// A command and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CommandEntry {
    /// Command text, e.g. "/init"
    command: String,
    /// What the command does
    description: String,
}

/// Expandable side panel opened from a trigger word in the step content.
///
/// The trigger word appears in the content wrapped in braces, e.g.
/// `"made by {Anthropic}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct InfoPanel {
    /// Word in the content that opens the panel
    trigger_word: String,
    /// Panel heading
    title: String,
    /// Panel body paragraphs
    #[serde(default)]
    paragraphs: Vec<String>,
}

impl InfoPanel {
    /// Creates a panel opened by `trigger_word`.
    pub fn new(
        trigger_word: impl Into<String>,
        title: impl Into<String>,
        paragraphs: Vec<String>,
    ) -> Self {
        Self {
            trigger_word: trigger_word.into(),
            title: title.into(),
            paragraphs,
        }
    }
}

/// External resource shown on resource-listing steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ResourceLink {
    /// Link title
    title: String,
    /// Target URL
    url: String,
    /// Short description
    #[serde(default)]
    description: String,
    /// Category heading the link is grouped under
    category: String,
}
