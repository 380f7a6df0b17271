//! Tests for guide TOML validation.

use guidepost_content::validator::{
    ValidationConfig, ValidationErrorKind, ValidationWarningKind, validate_guide_file,
    validate_guide_toml, validate_guide_toml_with_config,
};

const HEADER: &str = r#"
    [guide]
    title = "Test"
"#;

fn with_header(body: &str) -> String {
    format!("{}\n{}", HEADER, body)
}

#[test]
fn test_valid_guide() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "First"

        [[sections.steps]]
        id = "b"
        title = "Second"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(
        result.is_valid(),
        "Expected valid guide, got errors: {:?}",
        result.errors
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn test_syntax_error() {
    let result = validate_guide_toml("[guide\ntitle = ");
    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::InvalidSyntax);
    assert!(result.errors[0].suggestion.is_some());
}

#[test]
fn test_missing_guide_table() {
    let toml = r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "First"
    "#;

    let result = validate_guide_toml(toml);
    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::MissingSection);
    assert!(result.errors[0].message.contains("[guide]"));
}

#[test]
fn test_sections_as_table_error() {
    let toml = with_header(
        r#"
        [sections]
        id = "demo"
        title = "Demo"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(!result.is_valid());
    let syntax_error = result.errors.iter().find(|e| {
        e.kind == ValidationErrorKind::InvalidSyntax && e.message.contains("[sections]")
    });
    assert!(
        syntax_error.is_some(),
        "Expected InvalidSyntax error for [sections], got: {:?}",
        result.errors
    );
}

#[test]
fn test_no_sections() {
    let result = validate_guide_toml(HEADER);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].kind, ValidationErrorKind::EmptyGuide);
}

#[test]
fn test_duplicate_section_id() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "One"

        [[sections.steps]]
        id = "a"
        title = "A"

        [[sections]]
        id = "demo"
        title = "Two"

        [[sections.steps]]
        id = "b"
        title = "B"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::DuplicateId);
    assert!(result.errors[0].message.contains("demo"));
}

#[test]
fn test_empty_section() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "empty"
        title = "Empty"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::EmptySection);
    let location = result.errors[0].location.as_ref().unwrap();
    assert_eq!(location.section.as_deref(), Some("empty"));
}

#[test]
fn test_duplicate_step_id() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"

        [[sections.steps]]
        id = "a"
        title = "Again"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::DuplicateId);
    let location = result.errors[0].location.as_ref().unwrap();
    assert_eq!(location.step.as_deref(), Some("a"));
}

#[test]
fn test_choice_target_must_exist() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "branch"
        title = "Branch"

        [[sections.steps]]
        id = "pick"
        title = "Pick one"

        [[sections.steps.choices]]
        label = "Left"
        go_to = "left"

        [[sections.steps.choices]]
        label = "Nowhere"
        go_to = "missing"

        [[sections.steps]]
        id = "left"
        title = "Left"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::UndefinedReference);
    assert!(result.errors[0].message.contains("missing"));
}

#[test]
fn test_next_step_id_must_exist() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        next_step_id = "zzz"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::UndefinedReference);
    assert!(result.errors[0].message.contains("next_step_id"));
}

#[test]
fn test_cross_section_target_rejected() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "one"
        title = "One"

        [[sections.steps]]
        id = "a"
        title = "A"
        next_step_id = "b"

        [[sections]]
        id = "two"
        title = "Two"

        [[sections.steps]]
        id = "b"
        title = "B"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].kind, ValidationErrorKind::UndefinedReference);
}

#[test]
fn test_choices_with_next_step_id_rejected() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        next_step_id = "b"

        [[sections.steps.choices]]
        label = "B"
        go_to = "b"

        [[sections.steps]]
        id = "b"
        title = "B"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind,
        ValidationErrorKind::ConflictingNavigation
    );
}

#[test]
fn test_deck_with_two_sections_rejected() {
    let toml = r#"
        [guide]
        title = "Slides"
        kind = "deck"

        [[sections]]
        id = "one"
        title = "One"

        [[sections.steps]]
        id = "a"
        title = "A"

        [[sections]]
        id = "two"
        title = "Two"

        [[sections.steps]]
        id = "b"
        title = "B"
    "#;

    let result = validate_guide_toml(toml);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::InvalidDeck);
}

#[test]
fn test_reports_every_error_at_once() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        next_step_id = "nope"

        [[sections.steps]]
        id = "a"
        title = "Duplicate"

        [[sections]]
        id = "empty"
        title = "Empty"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert_eq!(result.errors.len(), 3, "got: {:?}", result.errors);
    let formatted = result.format_errors();
    assert!(formatted.contains("Error 1:"));
    assert!(formatted.contains("Error 3:"));
}

#[test]
fn test_unreachable_step_warning() {
    // "orphan" sits after a step that redirects away and has no choice into it
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        next_step_id = "c"

        [[sections.steps]]
        id = "orphan"
        title = "Orphan"

        [[sections.steps]]
        id = "c"
        title = "C"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.warnings[0].kind,
        ValidationWarningKind::UnreachableStep
    );
    assert!(result.warnings[0].message.contains("orphan"));
}

#[test]
fn test_choice_step_only_reaches_its_choices() {
    // "skipped" follows the choice step ordinally but no choice targets it
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "pick"
        title = "Pick"

        [[sections.steps.choices]]
        label = "End"
        go_to = "end"

        [[sections.steps]]
        id = "skipped"
        title = "Skipped"

        [[sections.steps]]
        id = "end"
        title = "End"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(result.is_valid());
    let unreachable: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.kind == ValidationWarningKind::UnreachableStep)
        .collect();
    assert_eq!(unreachable.len(), 1);
    assert_eq!(
        unreachable[0].location.as_ref().unwrap().step.as_deref(),
        Some("skipped")
    );
}

#[test]
fn test_unreachable_warning_can_be_disabled() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        next_step_id = "c"

        [[sections.steps]]
        id = "orphan"
        title = "Orphan"

        [[sections.steps]]
        id = "c"
        title = "C"
    "#,
    );

    let config = ValidationConfig {
        warn_unreachable: false,
        ..ValidationConfig::default()
    };
    let result = validate_guide_toml_with_config(&toml, &config);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unmatched_trigger_warning() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        content = "Made by Anthropic, without braces."

        [sections.steps.info_panel]
        trigger_word = "Anthropic"
        title = "About"
        paragraphs = ["..."]
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.warnings[0].kind,
        ValidationWarningKind::UnmatchedTrigger
    );
}

#[test]
fn test_matched_trigger_is_quiet() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"

        [[sections.steps]]
        id = "a"
        title = "A"
        content = "Made by {Anthropic}."

        [sections.steps.info_panel]
        trigger_word = "Anthropic"
        title = "About"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

#[test]
fn test_show_resources_without_resources_warning() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "res"
        title = "Resources"

        [[sections.steps]]
        id = "res-all"
        title = "All"
        show_resources = true
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.warnings[0].kind,
        ValidationWarningKind::MissingResources
    );
}

#[test]
fn test_unknown_icon_warning() {
    let toml = with_header(
        r#"
        [[sections]]
        id = "demo"
        title = "Demo"
        icon = "rocket"

        [[sections.steps]]
        id = "a"
        title = "A"
    "#,
    );

    let result = validate_guide_toml(&toml);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, ValidationWarningKind::UnknownIcon);
    assert!(result.format_warnings().contains("rocket"));
}

#[test]
fn test_missing_file() {
    let result = validate_guide_file("/nonexistent/guide.toml");
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].kind, ValidationErrorKind::FileNotFound);
}
