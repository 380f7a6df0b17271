//! Guide TOML validation with actionable error messages.
//!
//! Validation works on the raw TOML tree rather than the typed model so it
//! can report every problem in a file at once, including shapes serde would
//! reject outright, and attach a fix suggestion to each.

use guidepost_core::Icon;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use toml::Value;
use toml::map::Map;

/// Result of validating a guide TOML file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationError>,
    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a new validation result with no errors or warnings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats errors as a human-readable string.
    pub fn format_errors(&self) -> String {
        let mut output = String::new();

        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                output.push_str("\n\n");
            }
            output.push_str(&format!("Error {}: {}", i + 1, error.message));

            if let Some(suggestion) = &error.suggestion {
                output.push_str(&format!("\n\n  Suggestion: {}", suggestion));
            }
        }

        output
    }

    /// Formats warnings as a human-readable string.
    pub fn format_warnings(&self) -> String {
        let mut output = String::new();

        for (i, warning) in self.warnings.iter().enumerate() {
            if i > 0 {
                output.push_str("\n\n");
            }
            output.push_str(&format!("Warning {}: {}", i + 1, warning.message));
        }

        output
    }
}

/// A validation error with location and fix suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Section and step the error belongs to (if any)
    pub location: Option<ValidationLocation>,
    /// Human-readable error message
    pub message: String,
    /// Suggestion on how to fix the error
    pub suggestion: Option<String>,
}

/// A validation warning that should be reviewed.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationWarning {
    /// Type of validation warning
    pub kind: ValidationWarningKind,
    /// Section and step the warning belongs to (if any)
    pub location: Option<ValidationLocation>,
    /// Human-readable warning message
    pub message: String,
}

/// Location information for validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationLocation {
    /// Section id
    pub section: Option<String>,
    /// Step id
    pub step: Option<String>,
}

impl ValidationLocation {
    fn section(section: &str) -> Option<Self> {
        Some(Self {
            section: Some(section.to_string()),
            step: None,
        })
    }

    fn step(section: &str, step: &str) -> Option<Self> {
        Some(Self {
            section: Some(section.to_string()),
            step: Some(step.to_string()),
        })
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// Invalid TOML syntax or shape
    InvalidSyntax,
    /// Missing required table
    MissingSection,
    /// Missing required field
    MissingField,
    /// Guide declares no sections
    EmptyGuide,
    /// Section declares no steps
    EmptySection,
    /// Section or step id used twice
    DuplicateId,
    /// Choice or next_step_id target not in the section
    UndefinedReference,
    /// Step declares both choices and next_step_id
    ConflictingNavigation,
    /// Deck guide with more than one section
    InvalidDeck,
    /// File not found or unreadable
    FileNotFound,
}

/// Types of validation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationWarningKind {
    /// Step cannot be reached from the first step of its section
    UnreachableStep,
    /// Info panel trigger word does not appear in the content
    UnmatchedTrigger,
    /// Step lists resources but the guide defines none
    MissingResources,
    /// Unknown icon name (possible typo)
    UnknownIcon,
}

/// Configuration for validation behavior.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Warn on steps unreachable from their section's first step
    pub warn_unreachable: bool,
    /// Warn on info panel trigger words missing from content
    pub warn_unmatched_triggers: bool,
    /// Warn on unknown icon names
    pub warn_unknown_icons: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            warn_unreachable: true,
            warn_unmatched_triggers: true,
            warn_unknown_icons: true,
        }
    }
}

/// Validates a guide TOML string.
///
/// # Examples
///
/// ```
/// use guidepost_content::validator::validate_guide_toml;
///
/// let toml = r#"
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
/// "#;
///
/// let result = validate_guide_toml(toml);
/// assert!(result.is_valid());
/// ```
pub fn validate_guide_toml(toml: &str) -> ValidationResult {
    validate_guide_toml_with_config(toml, &ValidationConfig::default())
}

/// Validates a guide TOML string with custom configuration.
#[tracing::instrument(skip_all)]
pub fn validate_guide_toml_with_config(toml: &str, config: &ValidationConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Phase 1: Parse TOML to detect syntax issues
    let parsed = match toml::from_str::<Value>(toml) {
        Ok(value) => value,
        Err(e) => {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::InvalidSyntax,
                location: None,
                message: format!("Failed to parse TOML: {}", e),
                suggestion: Some("Check for syntax errors like missing quotes, unmatched brackets, or invalid escape sequences.".to_string()),
            });
            return result;
        }
    };

    // Phase 2: Check for common shape mistakes
    detect_syntax_patterns(&parsed, &mut result);
    if !result.is_valid() {
        return result;
    }

    // Phase 3: Validate structure and references
    validate_structure(&parsed, config, &mut result);

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated guide"
    );
    result
}

/// Validates a guide file.
pub fn validate_guide_file(path: impl AsRef<Path>) -> ValidationResult {
    validate_guide_file_with_config(path, &ValidationConfig::default())
}

/// Validates a guide file with custom configuration.
pub fn validate_guide_file_with_config(
    path: impl AsRef<Path>,
    config: &ValidationConfig,
) -> ValidationResult {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(content) => validate_guide_toml_with_config(&content, config),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.add_error(ValidationError {
                kind: ValidationErrorKind::FileNotFound,
                location: None,
                message: format!("Failed to read file '{}': {}", path.display(), e),
                suggestion: Some("Check that the file exists and is readable.".to_string()),
            });
            result
        }
    }
}

/// Detects TOML table-vs-array mistakes.
fn detect_syntax_patterns(parsed: &Value, result: &mut ValidationResult) {
    let Some(table) = parsed.as_table() else {
        return;
    };

    if table.get("guide").is_some_and(Value::is_array) {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::InvalidSyntax,
            location: None,
            message: "Found [[guide]] but only a single [guide] table is allowed".to_string(),
            suggestion: Some("Use a single table:\n\n[guide]\ntitle = \"My Guide\"".to_string()),
        });
    }

    if table.get("sections").is_some_and(Value::is_table) {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::InvalidSyntax,
            location: None,
            message: "Found [sections] but sections should be an array of tables".to_string(),
            suggestion: Some(
                "Declare each section with double brackets so their order is kept:\n\n\
                [[sections]]\n\
                id = \"getting-started\"\n\
                title = \"Getting Started\""
                    .to_string(),
            ),
        });
        return;
    }

    for section in sections_of(table) {
        if section.get("steps").is_some_and(Value::is_table) {
            let id = str_field(section, "id").unwrap_or("?");
            result.add_error(ValidationError {
                kind: ValidationErrorKind::InvalidSyntax,
                location: ValidationLocation::section(id),
                message: format!(
                    "Section '{}' has [sections.steps] but steps should be an array of tables",
                    id
                ),
                suggestion: Some(
                    "Declare each step with double brackets:\n\n\
                    [[sections.steps]]\n\
                    id = \"intro\"\n\
                    title = \"Introduction\""
                        .to_string(),
                ),
            });
        }
    }
}

/// Validates guide structure (tables, ids, references).
fn validate_structure(parsed: &Value, config: &ValidationConfig, result: &mut ValidationResult) {
    let Some(table) = parsed.as_table() else {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::InvalidSyntax,
            location: None,
            message: "TOML root must be a table".to_string(),
            suggestion: None,
        });
        return;
    };

    let Some(guide) = table.get("guide").and_then(Value::as_table) else {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::MissingSection,
            location: None,
            message: "Missing [guide] table".to_string(),
            suggestion: Some("Add a [guide] table:\n\n[guide]\ntitle = \"My Guide\"".to_string()),
        });
        return;
    };

    if str_field(guide, "title").is_none() {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::MissingField,
            location: None,
            message: "[guide] is missing a title".to_string(),
            suggestion: Some("Add: title = \"My Guide\"".to_string()),
        });
    }

    let sections = sections_of(table);
    if sections.is_empty() {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::EmptyGuide,
            location: None,
            message: "Guide has no sections".to_string(),
            suggestion: Some(
                "Add at least one section:\n\n[[sections]]\nid = \"intro\"\ntitle = \"Intro\""
                    .to_string(),
            ),
        });
        return;
    }

    if str_field(guide, "kind") == Some("deck") && sections.len() > 1 {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::InvalidDeck,
            location: None,
            message: format!(
                "Deck guides have exactly one section, found {}",
                sections.len()
            ),
            suggestion: Some(
                "Merge the slides into one section, or set kind = \"guide\" to get a hub menu."
                    .to_string(),
            ),
        });
    }

    let has_resources = table
        .get("resources")
        .and_then(Value::as_array)
        .is_some_and(|r| !r.is_empty());

    let mut section_ids = HashSet::new();
    for (position, section) in sections.iter().enumerate() {
        let Some(section_id) = str_field(section, "id") else {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::MissingField,
                location: None,
                message: format!("Section #{} is missing an id", position + 1),
                suggestion: Some("Add: id = \"my-section\"".to_string()),
            });
            continue;
        };

        if !section_ids.insert(section_id) {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::DuplicateId,
                location: ValidationLocation::section(section_id),
                message: format!("Section id '{}' is used more than once", section_id),
                suggestion: Some("Give every section a unique id.".to_string()),
            });
        }

        if str_field(section, "title").is_none() {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::MissingField,
                location: ValidationLocation::section(section_id),
                message: format!("Section '{}' is missing a title", section_id),
                suggestion: None,
            });
        }

        if config.warn_unknown_icons {
            check_icon(section, section_id, None, result);
        }

        validate_section(section_id, section, config, has_resources, result);
    }
}

/// Validates the steps of one section.
fn validate_section(
    section_id: &str,
    section: &Map<String, Value>,
    config: &ValidationConfig,
    has_resources: bool,
    result: &mut ValidationResult,
) {
    let steps = tables_in(section.get("steps"));
    if steps.is_empty() {
        result.add_error(ValidationError {
            kind: ValidationErrorKind::EmptySection,
            location: ValidationLocation::section(section_id),
            message: format!("Section '{}' has no steps", section_id),
            suggestion: Some(format!(
                "Add a step:\n\n[[sections.steps]]\nid = \"{}-intro\"\ntitle = \"...\"",
                section_id
            )),
        });
        return;
    }

    // First pass: collect step ids so forward references resolve
    let mut step_ids: HashMap<&str, usize> = HashMap::new();
    for (index, step) in steps.iter().enumerate() {
        let Some(step_id) = str_field(step, "id") else {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::MissingField,
                location: ValidationLocation::section(section_id),
                message: format!(
                    "Step #{} of section '{}' is missing an id",
                    index + 1,
                    section_id
                ),
                suggestion: Some("Add: id = \"my-step\"".to_string()),
            });
            continue;
        };
        if step_ids.contains_key(step_id) {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::DuplicateId,
                location: ValidationLocation::step(section_id, step_id),
                message: format!(
                    "Step id '{}' is used more than once in section '{}'",
                    step_id, section_id
                ),
                suggestion: Some("Step ids must be unique within their section.".to_string()),
            });
        } else {
            step_ids.insert(step_id, index);
        }
    }

    // Second pass: references and per-step checks
    for step in &steps {
        let Some(step_id) = str_field(step, "id") else {
            continue;
        };

        if str_field(step, "title").is_none() {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::MissingField,
                location: ValidationLocation::step(section_id, step_id),
                message: format!("Step '{}' is missing a title", step_id),
                suggestion: None,
            });
        }

        let choices = tables_in(step.get("choices"));
        let next_step_id = str_field(step, "next_step_id");

        if !choices.is_empty() && next_step_id.is_some() {
            result.add_error(ValidationError {
                kind: ValidationErrorKind::ConflictingNavigation,
                location: ValidationLocation::step(section_id, step_id),
                message: format!(
                    "Step '{}' declares both choices and next_step_id",
                    step_id
                ),
                suggestion: Some(
                    "A branch point moves on through its choices only. Remove next_step_id, \
                    or move the choices to their own step."
                        .to_string(),
                ),
            });
        }

        if let Some(next) = next_step_id
            && !step_ids.contains_key(next)
        {
            result.add_error(undefined_reference(section_id, step_id, "next_step_id", next));
        }

        for choice in &choices {
            match str_field(choice, "go_to") {
                Some(target) if !step_ids.contains_key(target) => {
                    result.add_error(undefined_reference(section_id, step_id, "go_to", target));
                }
                Some(_) => {}
                None => result.add_error(ValidationError {
                    kind: ValidationErrorKind::MissingField,
                    location: ValidationLocation::step(section_id, step_id),
                    message: format!("A choice on step '{}' is missing go_to", step_id),
                    suggestion: Some("Add: go_to = \"target-step-id\"".to_string()),
                }),
            }
            if config.warn_unknown_icons {
                check_icon(choice, section_id, Some(step_id), result);
            }
        }

        if config.warn_unmatched_triggers {
            check_info_panel(step, section_id, step_id, result);
        }

        if step.get("show_resources").and_then(Value::as_bool) == Some(true) && !has_resources {
            result.add_warning(ValidationWarning {
                kind: ValidationWarningKind::MissingResources,
                location: ValidationLocation::step(section_id, step_id),
                message: format!(
                    "Step '{}' shows resources but the guide has no [[resources]]",
                    step_id
                ),
            });
        }
    }

    if config.warn_unreachable {
        check_reachability(section_id, &steps, &step_ids, result);
    }
}

/// Warns on steps no navigation path reaches from the first step.
///
/// Edges follow what a host offers: choice steps move only through their
/// choices; other steps move to their resolving `next_step_id`, else to the
/// next ordinal step.
fn check_reachability(
    section_id: &str,
    steps: &[&Map<String, Value>],
    step_ids: &HashMap<&str, usize>,
    result: &mut ValidationResult,
) {
    let mut graph = DiGraph::<usize, ()>::new();
    let nodes: Vec<NodeIndex> = (0..steps.len()).map(|i| graph.add_node(i)).collect();

    for (index, step) in steps.iter().enumerate() {
        let choices = tables_in(step.get("choices"));
        if choices.is_empty() {
            let redirect = str_field(step, "next_step_id").and_then(|id| step_ids.get(id));
            match redirect {
                Some(&target) => {
                    graph.add_edge(nodes[index], nodes[target], ());
                }
                None if index + 1 < steps.len() => {
                    graph.add_edge(nodes[index], nodes[index + 1], ());
                }
                None => {}
            }
        } else {
            for target in choices
                .iter()
                .filter_map(|c| str_field(c, "go_to"))
                .filter_map(|id| step_ids.get(id))
            {
                graph.add_edge(nodes[index], nodes[*target], ());
            }
        }
    }

    let mut reached = vec![false; steps.len()];
    let mut dfs = Dfs::new(&graph, nodes[0]);
    while let Some(node) = dfs.next(&graph) {
        reached[graph[node]] = true;
    }

    for (index, step) in steps.iter().enumerate() {
        if reached[index] {
            continue;
        }
        let step_id = str_field(step, "id").unwrap_or("?");
        result.add_warning(ValidationWarning {
            kind: ValidationWarningKind::UnreachableStep,
            location: ValidationLocation::step(section_id, step_id),
            message: format!(
                "Step '{}' cannot be reached from the start of section '{}'",
                step_id, section_id
            ),
        });
    }
}

/// Warns when an info panel's trigger word is not marked in the content.
fn check_info_panel(
    step: &Map<String, Value>,
    section_id: &str,
    step_id: &str,
    result: &mut ValidationResult,
) {
    let Some(trigger) = step
        .get("info_panel")
        .and_then(Value::as_table)
        .and_then(|panel| str_field(panel, "trigger_word"))
    else {
        return;
    };

    let content = str_field(step, "content").unwrap_or_default();
    if !content.contains(&format!("{{{}}}", trigger)) {
        result.add_warning(ValidationWarning {
            kind: ValidationWarningKind::UnmatchedTrigger,
            location: ValidationLocation::step(section_id, step_id),
            message: format!(
                "Info panel trigger '{}' does not appear as {{{}}} in the content of step '{}'",
                trigger, trigger, step_id
            ),
        });
    }
}

/// Warns on icon names that fall back to [`Icon::Other`].
fn check_icon(
    table: &Map<String, Value>,
    section_id: &str,
    step_id: Option<&str>,
    result: &mut ValidationResult,
) {
    let Some(name) = str_field(table, "icon") else {
        return;
    };
    if let Icon::Other(name) = Icon::parse(name) {
        let location = match step_id {
            Some(step_id) => ValidationLocation::step(section_id, step_id),
            None => ValidationLocation::section(section_id),
        };
        result.add_warning(ValidationWarning {
            kind: ValidationWarningKind::UnknownIcon,
            location,
            message: format!("Unknown icon '{}' will render as a generic marker", name),
        });
    }
}

fn undefined_reference(section_id: &str, step_id: &str, field: &str, target: &str) -> ValidationError {
    ValidationError {
        kind: ValidationErrorKind::UndefinedReference,
        location: ValidationLocation::step(section_id, step_id),
        message: format!(
            "Step '{}' has {} = \"{}\" but section '{}' has no such step",
            step_id, field, target, section_id
        ),
        suggestion: Some(
            "Targets must name a step in the same section; use the hub to move between sections."
                .to_string(),
        ),
    }
}

fn sections_of(table: &Map<String, Value>) -> Vec<&Map<String, Value>> {
    tables_in(table.get("sections"))
}

fn tables_in(value: Option<&Value>) -> Vec<&Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_table).collect())
        .unwrap_or_default()
}

fn str_field<'a>(table: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    table.get(key).and_then(Value::as_str)
}
