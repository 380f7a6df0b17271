//! Tests for the guide content model.

use guidepost_core::{
    Choice, CodeBlock, Guide, GuideKind, Icon, InfoPanel, ResourceLink, Section, Step,
    StepBuilder,
};

fn step(id: &str) -> Step {
    StepBuilder::default().id(id).title(id).build().unwrap()
}

#[test]
fn test_section_indexes_steps_by_id() {
    let section = Section::new("demo", "Demo", vec![step("a"), step("b"), step("c")]);

    assert_eq!(section.len(), 3);
    assert_eq!(section.index_of("a"), Some(0));
    assert_eq!(section.index_of("b"), Some(1));
    assert_eq!(section.index_of("c"), Some(2));
    assert_eq!(section.index_of("missing"), None);
    assert_eq!(section.step_by_id("b").map(|s| s.id().as_str()), Some("b"));
}

#[test]
fn test_duplicate_step_id_resolves_to_first() {
    let section = Section::new("dup", "Dup", vec![step("a"), step("b"), step("a")]);
    assert_eq!(section.index_of("a"), Some(0));
}

#[test]
fn test_empty_section_has_no_last_index() {
    let section = Section::new("empty", "Empty", Vec::new());
    assert!(section.is_empty());
    assert_eq!(section.last_index(), None);
}

#[test]
fn test_step_choices_and_override() {
    let branch = StepBuilder::default()
        .id("x")
        .title("Pick one")
        .choices(vec![Choice::new("Y", "y"), Choice::new("Z", "z")])
        .build()
        .unwrap();
    assert!(branch.has_choices());
    assert_eq!(branch.choice(1).map(|c| c.go_to().as_str()), Some("z"));
    assert!(branch.choice(2).is_none());

    let redirect = StepBuilder::default()
        .id("mac")
        .title("Install on Mac")
        .next_step_id("after-install")
        .build()
        .unwrap();
    assert!(!redirect.has_choices());
    assert_eq!(
        redirect.next_step_id().as_ref().map(|id| id.as_str()),
        Some("after-install")
    );
}

#[test]
fn test_step_builder_requires_id_and_title() {
    assert!(StepBuilder::default().title("No id").build().is_err());
    assert!(StepBuilder::default().id("no-title").build().is_err());
}

#[test]
fn test_trigger_words_are_extracted_and_stripped() {
    let step = StepBuilder::default()
        .id("intro")
        .title("Intro")
        .content("Built by {Anthropic} for {Excel} users.")
        .info_panel(InfoPanel::new(
            "Anthropic",
            "About Anthropic",
            vec!["An AI safety company.".to_string()],
        ))
        .build()
        .unwrap();

    assert_eq!(step.trigger_words(), vec!["Anthropic", "Excel"]);
    assert_eq!(step.display_content(), "Built by Anthropic for Excel users.");
}

#[test]
fn test_icon_parsing_accepts_camel_and_kebab_case() {
    assert_eq!(Icon::parse("terminal"), Icon::Terminal);
    assert_eq!(Icon::parse("fileText"), Icon::FileText);
    assert_eq!(Icon::parse("file-text"), Icon::FileText);
    assert_eq!(Icon::parse("sparkles"), Icon::Other("sparkles".to_string()));
    assert_eq!(Icon::BookOpen.to_string(), "book-open");
}

#[test]
fn test_code_block_deserializes_with_defaults() {
    let block: CodeBlock = toml::from_str(r#"code = "claude --help""#).unwrap();
    assert!(*block.copyable());
    assert!(block.filename().is_none());
    assert_eq!(block.language(), "");

    let output: CodeBlock = toml::from_str(
        r#"
        language = "text"
        code = "Installation complete!"
        filename = "Expected output"
        copyable = false
        "#,
    )
    .unwrap();
    assert!(!*output.copyable());
    assert_eq!(
        output,
        CodeBlock::new("text", "Installation complete!")
            .with_filename("Expected output")
            .with_copyable(false)
    );
}

#[test]
fn test_guide_groups_resources_by_category() {
    let resources: Vec<ResourceLink> = toml::from_str::<Resources>(
        r#"
        [[resources]]
        title = "Docs"
        url = "https://example.com/docs"
        category = "Official Docs"

        [[resources]]
        title = "Tutorial"
        url = "https://example.com/tutorial"
        category = "Beginner Tutorials"

        [[resources]]
        title = "Quickstart"
        url = "https://example.com/quickstart"
        category = "Official Docs"
        "#,
    )
    .unwrap()
    .resources;

    let guide = Guide::new("Guide", vec![Section::new("a", "A", vec![step("a1")])])
        .with_resources(resources);

    assert_eq!(
        guide.resource_categories(),
        vec!["Official Docs", "Beginner Tutorials"]
    );
    let docs: Vec<&str> = guide
        .resources_in("Official Docs")
        .map(|r| r.title().as_str())
        .collect();
    assert_eq!(docs, vec!["Docs", "Quickstart"]);
    assert_eq!(*guide.kind(), GuideKind::Guide);
    assert_eq!(guide.step_count(), 1);
}

#[derive(serde::Deserialize)]
struct Resources {
    resources: Vec<ResourceLink>,
}
