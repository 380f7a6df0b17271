//! Tests for step navigation: linear traversal, overrides, branches and history.

mod common;

use common::{current_id, navigator};
use guidepost_error::NavigationErrorKind;
use guidepost_navigator::{Direction, Position};

#[test]
fn test_starts_at_hub() {
    let nav = navigator();
    assert!(nav.state().is_in_hub());
    assert!(nav.current_section().is_none());
    assert!(nav.current_step().is_none());
    assert!(!nav.has_choices());
    assert!(nav.progress().is_none());
}

#[test]
fn test_linear_walk_scenario() {
    let mut nav = navigator();

    nav.select_section("demo");
    assert_eq!(current_id(&nav).as_deref(), Some("a"));
    assert_eq!(nav.current_index(), Some(0));

    nav.go_next();
    assert_eq!(current_id(&nav).as_deref(), Some("b"));
    nav.go_next();
    assert_eq!(current_id(&nav).as_deref(), Some("c"));

    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("b"));
    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("a"));

    // Empty history at index 0: no-op, caller decides to leave
    assert!(nav.go_prev().is_none());
    assert_eq!(current_id(&nav).as_deref(), Some("a"));

    nav.reset_to_hub();
    assert!(nav.state().is_in_hub());
    assert!(nav.current_section().is_none());
}

#[test]
fn test_go_next_stops_at_last_step() {
    let mut nav = navigator();
    nav.select_section("demo");
    let total = nav.current_section().unwrap().len();

    for _ in 0..total - 1 {
        assert!(nav.go_next().is_some());
    }
    assert_eq!(nav.current_index(), Some(total - 1));
    assert!(nav.is_last_step());

    let before = nav.state().clone();
    assert!(nav.go_next().is_none());
    assert_eq!(nav.state(), &before);
}

#[test]
fn test_branch_then_back_returns_to_branch_point() {
    let mut nav = navigator();
    nav.select_section("branch");
    assert_eq!(current_id(&nav).as_deref(), Some("x"));
    assert!(nav.has_choices());

    nav.select_choice("z");
    assert_eq!(current_id(&nav).as_deref(), Some("z"));
    assert_eq!(
        nav.state().history(),
        &vec![Position::new("branch".into(), 0)]
    );

    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("x"));
    assert!(nav.state().history().is_empty());
}

#[test]
fn test_next_step_id_converges_branches() {
    let mut nav = navigator();
    nav.select_section("install");

    nav.select_choice("mac");
    assert_eq!(current_id(&nav).as_deref(), Some("mac"));

    // "mac" redirects past "windows" to "after"
    nav.go_next();
    assert_eq!(current_id(&nav).as_deref(), Some("after"));

    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("mac"));
    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("profile"));
}

#[test]
fn test_next_step_id_can_jump_backward() {
    let mut nav = navigator();
    nav.select_section("loop");
    nav.go_next();
    nav.go_next();
    assert_eq!(current_id(&nav).as_deref(), Some("r"));
    assert!(nav.is_last_step());

    // The override wins even on the last step
    assert!(nav.go_next().is_some());
    assert_eq!(current_id(&nav).as_deref(), Some("p"));
    assert_eq!(*nav.state().direction(), Direction::Forward);
    assert_eq!(nav.state().history().len(), 3);
}

#[test]
fn test_history_undoes_any_forward_sequence() {
    let mut nav = navigator();
    nav.select_section("install");
    nav.go_next(); // profile -> mac (sequential fallback on a choice step)
    nav.select_choice("windows");
    nav.go_next(); // windows -> after
    nav.select_choice("profile");
    nav.select_choice("mac");
    nav.go_next(); // mac -> after
    nav.go_next(); // after -> done

    let recorded: Vec<Position> = nav.state().history().clone();
    assert_eq!(recorded.len(), 7);

    for expected in recorded.iter().rev() {
        nav.go_prev();
        assert_eq!(nav.state().current().as_ref(), Some(expected));
        assert_eq!(*nav.state().direction(), Direction::Backward);
    }
    assert_eq!(nav.current_index(), Some(0));
    assert!(nav.state().history().is_empty());
}

#[test]
fn test_go_prev_without_history_steps_back_one() {
    let mut nav = navigator();
    nav.open_at("demo", "c");
    assert_eq!(current_id(&nav).as_deref(), Some("c"));
    assert!(nav.state().history().is_empty());
    assert!(nav.can_go_back());

    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("b"));
    nav.go_prev();
    assert_eq!(current_id(&nav).as_deref(), Some("a"));
    assert!(nav.go_prev().is_none());
    assert!(!nav.can_go_back());
}

#[test]
fn test_open_at_unknown_step_is_ignored() {
    let mut nav = navigator();
    assert!(nav.open_at("demo", "zz").is_none());
    assert!(nav.state().is_in_hub());
    assert!(matches!(
        nav.try_open_at("demo", "zz").unwrap_err().kind,
        NavigationErrorKind::UnknownStep { .. }
    ));
}

#[test]
fn test_select_section_clears_history() {
    let mut nav = navigator();
    nav.select_section("demo");
    nav.go_next();
    nav.go_next();
    assert_eq!(nav.state().history().len(), 2);

    nav.select_section("branch");
    assert!(nav.state().history().is_empty());
    assert_eq!(nav.current_index(), Some(0));
    assert_eq!(*nav.state().direction(), Direction::Forward);
}

#[test]
fn test_reset_to_hub_is_idempotent() {
    let mut nav = navigator();
    nav.select_section("demo");
    nav.go_next();

    let first = nav.reset_to_hub();
    assert!(first.is_some_and(|t| t.is_exit_to_hub()));
    let once = nav.state().clone();

    assert!(nav.reset_to_hub().is_none());
    assert_eq!(nav.state(), &once);
    assert!(nav.state().is_in_hub());
    assert_eq!(*nav.state().direction(), Direction::Backward);
}

#[test]
fn test_unknown_section_is_ignored() {
    let mut nav = navigator();
    nav.select_section("demo");
    nav.go_next();
    let before = nav.state().clone();

    assert!(nav.select_section("nope").is_none());
    assert_eq!(nav.state(), &before);

    let err = nav.try_select_section("nope").unwrap_err();
    assert_eq!(
        err.kind,
        NavigationErrorKind::UnknownSection("nope".to_string())
    );
}

#[test]
fn test_empty_section_is_rejected() {
    let mut nav = navigator();
    let err = nav.try_select_section("empty").unwrap_err();
    assert_eq!(err.kind, NavigationErrorKind::EmptySection("empty".to_string()));
    assert!(nav.state().is_in_hub());
}

#[test]
fn test_unknown_choice_target_is_ignored() {
    let mut nav = navigator();
    assert!(matches!(
        nav.try_select_choice("y").unwrap_err().kind,
        NavigationErrorKind::NoSection
    ));

    nav.select_section("branch");
    let before = nav.state().clone();
    assert!(nav.select_choice("nowhere").is_none());
    assert_eq!(nav.state(), &before);

    match nav.try_select_choice("nowhere").unwrap_err().kind {
        NavigationErrorKind::UnknownStep { section, step } => {
            assert_eq!(section, "branch");
            assert_eq!(step, "nowhere");
        }
        other => panic!("Expected UnknownStep, got {:?}", other),
    }
}

#[test]
fn test_choices_do_not_cross_sections() {
    let mut nav = navigator();
    nav.select_section("branch");
    // "a" lives in "demo", not "branch"
    assert!(nav.select_choice("a").is_none());
    assert_eq!(current_id(&nav).as_deref(), Some("x"));
}

#[test]
fn test_try_choose_by_index() {
    let mut nav = navigator();
    nav.select_section("branch");

    let err = nav.try_choose(5).unwrap_err();
    assert!(matches!(
        err.kind,
        NavigationErrorKind::NoSuchChoice { index: 5, .. }
    ));

    let transition = nav.try_choose(1).unwrap();
    assert_eq!(transition.to().as_ref().map(|p| *p.index()), Some(2));
    assert_eq!(current_id(&nav).as_deref(), Some("z"));
}

#[test]
fn test_transitions_report_direction() {
    let mut nav = navigator();
    let enter = nav.select_section("demo").unwrap();
    assert!(enter.from().is_none());
    assert_eq!(*enter.direction(), Direction::Forward);
    assert_eq!(enter.direction().as_sign(), 1);

    let next = nav.go_next().unwrap();
    assert_eq!(next.from().as_ref().map(|p| *p.index()), Some(0));
    assert_eq!(next.to().as_ref().map(|p| *p.index()), Some(1));

    let back = nav.go_prev().unwrap();
    assert_eq!(*back.direction(), Direction::Backward);
    assert_eq!(back.direction().as_sign(), -1);
}

#[test]
fn test_progress_tracks_position() {
    let mut nav = navigator();
    nav.select_section("install");
    let progress = nav.progress().unwrap();
    assert_eq!((progress.index, progress.total), (0, 5));
    assert!(nav.is_first_step());

    nav.select_choice("after");
    let progress = nav.progress().unwrap();
    assert_eq!((progress.index, progress.total), (3, 5));
    assert!((progress.fraction() - 0.8).abs() < f64::EPSILON);
}
