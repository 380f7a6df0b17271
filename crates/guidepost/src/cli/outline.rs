//! Outline command: prints a guide's section and step tree.

use guidepost_content::load_guide_file;
use guidepost_core::Guide;
use std::fmt::Write;
use std::path::Path;

/// Handles the outline command.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_outline_command(path: &Path) -> anyhow::Result<()> {
    let guide = load_guide_file(path)?;
    print!("{}", outline(&guide));
    Ok(())
}

/// Renders the section and step tree with branch targets.
///
/// Choice steps list their options with `->` targets; steps whose forward
/// action is redirected show `=> target`.
pub fn outline(guide: &Guide) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {} sections, {} steps)",
        guide.title(),
        guide.kind(),
        guide.sections().len(),
        guide.step_count()
    );

    for (i, section) in guide.sections().iter().enumerate() {
        let _ = writeln!(out, "\n{}. {} [{}]", i + 1, section.title(), section.id());
        let width = section
            .steps()
            .iter()
            .map(|s| s.id().as_str().len())
            .max()
            .unwrap_or(0);

        for step in section.steps() {
            let _ = write!(
                out,
                "   {:width$}  {}",
                step.id().as_str(),
                step.title(),
                width = width
            );
            if let Some(next) = step.next_step_id() {
                let _ = write!(out, "  => {}", next);
            }
            if let Some(panel) = step.info_panel() {
                let _ = write!(out, "  [info: {}]", panel.trigger_word());
            }
            out.push('\n');

            for (n, choice) in step.choices().iter().enumerate() {
                let _ = writeln!(
                    out,
                    "   {:width$}    [{}] {} -> {}",
                    "",
                    n + 1,
                    choice.label(),
                    choice.go_to(),
                    width = width
                );
            }
        }
    }

    if !guide.resources().is_empty() {
        let _ = writeln!(out, "\nResources:");
        for category in guide.resource_categories() {
            let _ = writeln!(
                out,
                "   {} ({})",
                category,
                guide.resources_in(category).count()
            );
        }
    }

    out
}
