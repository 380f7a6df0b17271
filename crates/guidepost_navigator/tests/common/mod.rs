//! Shared guide fixtures for navigator tests.

#![allow(dead_code)]

use guidepost_core::{Choice, Guide, GuideKind, Section, Step, StepBuilder};
use guidepost_navigator::StepNavigator;
use std::sync::Arc;

pub fn step(id: &str) -> Step {
    StepBuilder::default().id(id).title(id).build().unwrap()
}

pub fn branch_step(id: &str, targets: &[&str]) -> Step {
    StepBuilder::default()
        .id(id)
        .title(id)
        .choices(
            targets
                .iter()
                .map(|t| Choice::new(t.to_uppercase(), *t))
                .collect::<Vec<_>>(),
        )
        .build()
        .unwrap()
}

pub fn redirect_step(id: &str, next: &str) -> Step {
    StepBuilder::default()
        .id(id)
        .title(id)
        .next_step_id(next)
        .build()
        .unwrap()
}

/// "demo": [a, b, c] with no overrides.
pub fn demo_section() -> Section {
    Section::new("demo", "Demo", vec![step("a"), step("b"), step("c")])
}

/// "branch": [x, y, z] where x offers choices to y and z.
pub fn branch_section() -> Section {
    Section::new(
        "branch",
        "Branch",
        vec![branch_step("x", &["y", "z"]), step("y"), step("z")],
    )
}

/// Mirrors the install flow: a profile choice, two platform steps that
/// converge on a shared step via `next_step_id`, and a closing step.
pub fn install_section() -> Section {
    Section::new(
        "install",
        "Install",
        vec![
            branch_step("profile", &["mac", "windows"]),
            redirect_step("mac", "after"),
            redirect_step("windows", "after"),
            step("after"),
            step("done"),
        ],
    )
}

/// "loop": [p, q, r] where r redirects backward to p.
pub fn loop_section() -> Section {
    Section::new(
        "loop",
        "Loop",
        vec![step("p"), step("q"), redirect_step("r", "p")],
    )
}

pub fn guide() -> Guide {
    Guide::new(
        "Test Guide",
        vec![
            demo_section(),
            branch_section(),
            install_section(),
            loop_section(),
            Section::new("empty", "Empty", Vec::new()),
        ],
    )
}

pub fn navigator() -> StepNavigator {
    StepNavigator::new(Arc::new(guide()))
}

pub fn deck_navigator() -> StepNavigator {
    let deck = Guide::new(
        "Challenge",
        vec![Section::new(
            "slides",
            "Slides",
            vec![step("title"), step("challenge"), step("results")],
        )],
    )
    .with_kind(GuideKind::Deck);
    StepNavigator::new(Arc::new(deck))
}

pub fn current_id(nav: &StepNavigator) -> Option<String> {
    nav.current_step().map(|s| s.id().to_string())
}
