//! Steps and branch choices.

use crate::{CodeBlock, CommandEntry, Feature, Icon, InfoPanel, PromptTab, StepId};
use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TRIGGER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}").expect("trigger pattern is a valid regex")
});

/// A labeled branch option that jumps to a step in the same section.
///
/// # Examples
///
/// ```
/// use guidepost_core::{Choice, Icon};
///
/// let choice = Choice::new("Mac", "gs-install-mac").with_icon(Icon::Apple);
/// assert_eq!(choice.go_to().as_str(), "gs-install-mac");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Choice {
    /// Button label
    label: String,
    /// Longer explanation shown under the label
    #[serde(default)]
    description: String,
    /// Presentational icon
    #[serde(default)]
    icon: Icon,
    /// Target step id within the same section
    go_to: StepId,
}

impl Choice {
    /// Creates a choice targeting the given step.
    pub fn new(label: impl Into<String>, go_to: impl Into<StepId>) -> Self {
        Self {
            label: label.into(),
            description: String::new(),
            icon: Icon::default(),
            go_to: go_to.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }
}

/// A single screen of content within a section.
///
/// Steps with [`choices`](Step::choices) are branch points: callers should
/// route through one of the choices instead of offering a "next" control.
/// A step may instead declare [`next_step_id`](Step::next_step_id) to
/// redirect the forward action, e.g. to converge after a branch.
///
/// # Examples
///
/// ```
/// use guidepost_core::StepBuilder;
///
/// let step = StepBuilder::default()
///     .id("gs-intro")
///     .title("What is it?")
///     .content("Made by {Anthropic}.")
///     .build()
///     .unwrap();
/// assert!(!step.has_choices());
/// assert_eq!(step.display_content(), "Made by Anthropic.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Step {
    /// Step id, unique within its section
    id: StepId,
    /// Heading
    title: String,
    /// Optional subheading
    #[builder(default, setter(strip_option))]
    subtitle: Option<String>,
    /// Body text; `{word}` marks an info panel trigger
    #[builder(default)]
    content: String,
    /// Bullet list under the body
    #[builder(default)]
    bullet_points: Vec<String>,
    /// Primary code block
    #[builder(default, setter(strip_option))]
    code: Option<CodeBlock>,
    /// Secondary code block, usually expected output
    #[builder(default, setter(strip_option))]
    secondary_code: Option<CodeBlock>,
    /// Feature cards
    #[builder(default)]
    features: Vec<Feature>,
    /// Tabs of example prompts
    #[builder(default)]
    prompt_tabs: Vec<PromptTab>,
    /// Commands with descriptions
    #[builder(default)]
    command_list: Vec<CommandEntry>,
    /// Whether to show the animated terminal mockup
    #[builder(default)]
    terminal_mockup: bool,
    /// Panel opened from a trigger word in the content
    #[builder(default, setter(strip_option))]
    info_panel: Option<InfoPanel>,
    /// Branch options
    #[builder(default)]
    choices: Vec<Choice>,
    /// Forward-action override
    #[builder(default, setter(strip_option))]
    next_step_id: Option<StepId>,
    /// Whether the guide's resource links are listed on this step
    #[builder(default)]
    show_resources: bool,
}

impl Step {
    /// Returns true if this step is a branch point.
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Returns the choice at `index`, if any.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Returns the words wrapped in braces in the content, in order.
    pub fn trigger_words(&self) -> Vec<&str> {
        TRIGGER_PATTERN
            .captures_iter(&self.content)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Returns the content with trigger braces removed.
    pub fn display_content(&self) -> String {
        TRIGGER_PATTERN.replace_all(&self.content, "$1").into_owned()
    }
}
