//! Guides: the immutable content table the navigator walks.

use crate::{ResourceLink, Section};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How a guide is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GuideKind {
    /// Hub menu of sections, each a branching flow
    #[default]
    Guide,
    /// A single linear section entered directly, with no hub
    Deck,
}

/// A complete guide: sections in hub order plus shared resource links.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Guide {
    /// Guide title shown on the hub
    title: String,
    /// Optional hub subtitle
    subtitle: Option<String>,
    /// Presentation kind
    kind: GuideKind,
    /// Hint line shown under the hub menu
    hub_hint: Option<String>,
    /// Sections in hub order
    sections: Vec<Section>,
    /// Resource links shown on resource-listing steps
    resources: Vec<ResourceLink>,
}

impl Guide {
    /// Creates a guide from its sections.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            kind: GuideKind::default(),
            hub_hint: None,
            sections,
            resources: Vec::new(),
        }
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the presentation kind.
    pub fn with_kind(mut self, kind: GuideKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the hub hint line.
    pub fn with_hub_hint(mut self, hint: impl Into<String>) -> Self {
        self.hub_hint = Some(hint.into());
        self
    }

    /// Sets the resource links.
    pub fn with_resources(mut self, resources: Vec<ResourceLink>) -> Self {
        self.resources = resources;
        self
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id().as_str() == id)
    }

    /// Returns the section at hub position `index`.
    pub fn section_at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Resource categories in first-appearance order.
    pub fn resource_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for link in &self.resources {
            if !categories.contains(&link.category().as_str()) {
                categories.push(link.category());
            }
        }
        categories
    }

    /// Resource links in the given category.
    pub fn resources_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ResourceLink> {
        self.resources
            .iter()
            .filter(move |link| link.category() == category)
    }

    /// Total number of steps across all sections.
    pub fn step_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}
