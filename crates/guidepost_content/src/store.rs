//! Loading guides from TOML files into an in-memory store.

use crate::raw::GuideFile;
use crate::validator::{ValidationConfig, validate_guide_toml_with_config};
use guidepost_core::Guide;
use guidepost_error::{ContentError, ContentErrorKind};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Parses and validates a guide from a TOML string.
///
/// Validation errors are returned together as [`ContentErrorKind::Invalid`];
/// warnings are logged and do not fail the load.
///
/// # Examples
///
/// ```
/// use guidepost_content::load_guide_str;
///
/// let guide = load_guide_str(r#"
///     [guide]
///     title = "Demo"
///
///     [[sections]]
///     id = "demo"
///     title = "Demo"
///
///     [[sections.steps]]
///     id = "a"
///     title = "First"
/// "#).unwrap();
/// assert_eq!(guide.sections().len(), 1);
/// ```
pub fn load_guide_str(toml: &str) -> Result<Guide, ContentError> {
    load_guide_str_with_config(toml, &ValidationConfig::default())
}

/// Parses and validates a guide with custom validation settings.
#[instrument(skip_all)]
pub fn load_guide_str_with_config(
    toml: &str,
    config: &ValidationConfig,
) -> Result<Guide, ContentError> {
    let validation = validate_guide_toml_with_config(toml, config);
    for warning in &validation.warnings {
        warn!(kind = ?warning.kind, "{}", warning.message);
    }
    if !validation.is_valid() {
        let problems = validation
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect();
        return Err(ContentError::new(ContentErrorKind::Invalid(problems)));
    }

    let file: GuideFile = toml::from_str(toml)
        .map_err(|e| ContentError::new(ContentErrorKind::TomlParse(e.to_string())))?;
    let guide = file.into_guide()?;

    debug!(
        title = %guide.title(),
        sections = guide.sections().len(),
        steps = guide.step_count(),
        "Loaded guide"
    );
    Ok(guide)
}

/// Reads, parses and validates a guide file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_guide_file(path: impl AsRef<Path>) -> Result<Guide, ContentError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ContentError::new(ContentErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    load_guide_str(&content)
}

/// A set of loaded guides keyed by id.
///
/// A guide's id is its file stem, so `guides/claude-code-guide.toml` is
/// stored as `claude-code-guide`. Guides are shared behind [`Arc`] so each
/// navigator can hold its own handle.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    guides: BTreeMap<String, Arc<Guide>>,
}

impl ContentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store holding the single guide at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let mut store = Self::new();
        store.load_file(path)?;
        Ok(store)
    }

    /// Loads every `*.toml` file in `dir`.
    ///
    /// Files are loaded in name order. Any invalid file fails the whole load.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            ContentError::new(ContentErrorKind::FileRead(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ContentError::new(ContentErrorKind::FileRead(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )))
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(ContentError::new(ContentErrorKind::NoGuides(
                dir.display().to_string(),
            )));
        }

        let mut store = Self::new();
        for path in &paths {
            store.load_file(path)?;
        }
        info!(count = store.len(), "Loaded guides");
        Ok(store)
    }

    /// Loads one guide file into the store, returning its id.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<String, ContentError> {
        let path = path.as_ref();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ContentError::new(ContentErrorKind::FileRead(format!(
                    "{}: not a file path",
                    path.display()
                )))
            })?;
        let guide = load_guide_file(path)?;
        self.insert(id.clone(), guide)?;
        Ok(id)
    }

    /// Adds a guide under `id`.
    pub fn insert(&mut self, id: impl Into<String>, guide: Guide) -> Result<(), ContentError> {
        let id = id.into();
        if self.guides.contains_key(&id) {
            return Err(ContentError::new(ContentErrorKind::DuplicateGuide(id)));
        }
        self.guides.insert(id, Arc::new(guide));
        Ok(())
    }

    /// Returns the guide with this id.
    pub fn get(&self, id: &str) -> Option<Arc<Guide>> {
        self.guides.get(id).cloned()
    }

    /// Guide ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.guides.keys().map(String::as_str)
    }

    /// Returns the only guide, if the store holds exactly one.
    pub fn single(&self) -> Option<Arc<Guide>> {
        if self.guides.len() == 1 {
            self.guides.values().next().cloned()
        } else {
            None
        }
    }

    /// Number of guides loaded.
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Returns true if no guides are loaded.
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}
