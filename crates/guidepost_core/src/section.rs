//! Sections: named, ordered sequences of steps.

use crate::{Icon, SectionId, Step, StepId};
use derive_getters::Getters;
use std::collections::HashMap;

/// A named, ordered sequence of steps.
///
/// The step index is built once on construction and never changes; step
/// lookup by id is a single hash probe. If two steps share an id the first
/// one wins (content validation reports the duplicate).
///
/// # Examples
///
/// ```
/// use guidepost_core::{Section, StepBuilder};
///
/// let steps = ["a", "b", "c"]
///     .iter()
///     .map(|id| StepBuilder::default().id(*id).title(*id).build().unwrap())
///     .collect();
/// let section = Section::new("demo", "Demo", steps);
/// assert_eq!(section.index_of("c"), Some(2));
/// assert_eq!(section.last_index(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Section {
    /// Unique section id
    id: SectionId,
    /// Display title
    title: String,
    /// Display subtitle
    subtitle: String,
    /// Accent color (hex), opaque to navigation
    accent: String,
    /// Presentational icon
    icon: Icon,
    /// Steps in ordinal order
    steps: Vec<Step>,
    #[getter(skip)]
    index: HashMap<StepId, usize>,
}

impl Section {
    /// Creates a section and indexes its steps by id.
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>, steps: Vec<Step>) -> Self {
        let mut index = HashMap::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            index.entry(step.id().clone()).or_insert(i);
        }
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            accent: String::new(),
            icon: Icon::default(),
            steps,
            index,
        }
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the accent color.
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = accent.into();
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Resolves a step id to its ordinal index.
    pub fn index_of(&self, step_id: &str) -> Option<usize> {
        self.index.get(step_id).copied()
    }

    /// Returns the step at `index`.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns the step with the given id.
    pub fn step_by_id(&self, step_id: &str) -> Option<&Step> {
        self.index_of(step_id).and_then(|i| self.steps.get(i))
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the section has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step, or `None` for an empty section.
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }
}
