//! On-disk guide format and its conversion into the core model.

use guidepost_core::{
    Choice, CodeBlock, CommandEntry, Feature, Guide, GuideKind, Icon, InfoPanel, PromptTab,
    ResourceLink, Section, Step, StepBuilder,
};
use guidepost_error::{ContentError, ContentErrorKind};
use serde::Deserialize;

/// A guide file as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GuideFile {
    pub guide: GuideHeader,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

/// The `[guide]` table.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GuideHeader {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub kind: GuideKind,
    #[serde(default)]
    pub hub_hint: Option<String>,
}

/// One `[[sections]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SectionEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub steps: Vec<StepEntry>,
}

/// One `[[sections.steps]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StepEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub code: Option<CodeBlock>,
    #[serde(default)]
    pub secondary_code: Option<CodeBlock>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub prompt_tabs: Vec<PromptTab>,
    #[serde(default)]
    pub command_list: Vec<CommandEntry>,
    #[serde(default)]
    pub terminal_mockup: bool,
    #[serde(default)]
    pub info_panel: Option<InfoPanel>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub next_step_id: Option<String>,
    #[serde(default)]
    pub show_resources: bool,
}

impl GuideFile {
    /// Converts the parsed file into an immutable guide.
    pub(crate) fn into_guide(self) -> Result<Guide, ContentError> {
        let sections = self
            .sections
            .into_iter()
            .map(SectionEntry::into_section)
            .collect::<Result<Vec<_>, _>>()?;

        let mut guide = Guide::new(self.guide.title, sections)
            .with_kind(self.guide.kind)
            .with_resources(self.resources);
        if let Some(subtitle) = self.guide.subtitle {
            guide = guide.with_subtitle(subtitle);
        }
        if let Some(hint) = self.guide.hub_hint {
            guide = guide.with_hub_hint(hint);
        }
        Ok(guide)
    }
}

impl SectionEntry {
    fn into_section(self) -> Result<Section, ContentError> {
        let steps = self
            .steps
            .into_iter()
            .map(StepEntry::into_step)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Section::new(self.id, self.title, steps)
            .with_subtitle(self.subtitle)
            .with_accent(self.accent)
            .with_icon(self.icon))
    }
}

impl StepEntry {
    fn into_step(self) -> Result<Step, ContentError> {
        let mut builder = StepBuilder::default();
        builder
            .id(self.id.as_str())
            .title(self.title)
            .content(self.content)
            .bullet_points(self.bullet_points)
            .features(self.features)
            .prompt_tabs(self.prompt_tabs)
            .command_list(self.command_list)
            .terminal_mockup(self.terminal_mockup)
            .choices(self.choices)
            .show_resources(self.show_resources);

        if let Some(subtitle) = self.subtitle {
            builder.subtitle(subtitle);
        }
        if let Some(code) = self.code {
            builder.code(code);
        }
        if let Some(code) = self.secondary_code {
            builder.secondary_code(code);
        }
        if let Some(panel) = self.info_panel {
            builder.info_panel(panel);
        }
        if let Some(next) = self.next_step_id {
            builder.next_step_id(next.as_str());
        }

        builder.build().map_err(|e| {
            ContentError::new(ContentErrorKind::Invalid(vec![format!(
                "Step '{}' could not be built: {}",
                self.id, e
            )]))
        })
    }
}
