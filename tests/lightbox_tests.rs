// Host-side tests for overlay state and leaderboard content derivations.

use temcy_core::content::{distance_label, rank_label, status_label, GridShape, RunnerStatus};
use temcy_core::lightbox::{Click, Lightbox, LightboxState, LockChange, ScrollLock, Toggle, Transition};

#[test]
fn at_most_one_item_is_selected() {
    let mut lb: Lightbox<u32> = Lightbox::new();
    assert_eq!(lb.state(), LightboxState::Closed);

    assert_eq!(lb.handle(Click::Item(3)), Transition::Enter(3));
    assert_eq!(lb.handle(Click::Item(5)), Transition::Swap { from: 3, to: 5 });
    assert_eq!(lb.selected(), Some(5));
    assert_eq!(lb.handle(Click::Item(5)), Transition::None);
    assert_eq!(lb.state(), LightboxState::OpenFor(5));
}

#[test]
fn escape_backdrop_and_close_button_close() {
    let mut lb: Lightbox<u32> = Lightbox::new();
    lb.open(1);
    assert_eq!(lb.handle_key("Enter"), Transition::None);
    assert_eq!(lb.handle_key("Escape"), Transition::Exit(1));
    assert!(!lb.is_open());
    assert_eq!(lb.handle_key("Escape"), Transition::None);

    lb.open(2);
    assert_eq!(lb.handle(Click::Backdrop), Transition::Exit(2));
    lb.open(2);
    assert_eq!(lb.handle(Click::CloseButton), Transition::Exit(2));
}

#[test]
fn clicks_inside_content_keep_it_open() {
    let mut lb: Lightbox<u32> = Lightbox::new();
    lb.open(4);
    assert_eq!(lb.handle(Click::Content), Transition::None);
    assert_eq!(lb.selected(), Some(4));
}

#[test]
fn click_classification_prefers_close_button() {
    assert_eq!(Click::<u32>::in_overlay(true, true), Click::CloseButton);
    assert_eq!(Click::<u32>::in_overlay(false, true), Click::Content);
    assert_eq!(Click::<u32>::in_overlay(false, false), Click::Backdrop);
}

#[test]
fn missing_record_selects_nothing() {
    let items = [(1u32, "a"), (2, "b")];
    let mut lb: Lightbox<u32> = Lightbox::new();
    lb.open(2);
    assert_eq!(lb.selected_in(&items, |i| i.0), Some(&(2, "b")));
    lb.open(9);
    assert_eq!(lb.selected_in(&items, |i| i.0), None);
}

#[test]
fn toggle_reports_enter_and_exit_once() {
    let mut nav = Toggle::default();
    assert_eq!(nav.close(), Transition::None);
    assert_eq!(nav.toggle(), Transition::Enter(()));
    assert_eq!(nav.open(), Transition::None);
    assert!(nav.is_open());
    assert_eq!(nav.toggle(), Transition::Exit(()));
}

#[test]
fn scroll_lock_holds_while_any_overlay_is_open() {
    let mut lock = ScrollLock::default();
    assert_eq!(lock.apply(&Transition::Enter(1u32)), LockChange::Lock);
    assert_eq!(lock.apply(&Transition::Enter(())), LockChange::Unchanged);
    assert_eq!(lock.apply(&Transition::Swap { from: 1u32, to: 2 }), LockChange::Unchanged);
    assert_eq!(lock.apply(&Transition::Exit(2u32)), LockChange::Unchanged);
    assert!(lock.is_locked());
    assert_eq!(lock.apply(&Transition::Exit(())), LockChange::Unlock);
    assert_eq!(lock.apply(&Transition::Exit(())), LockChange::Unchanged);
    assert!(!lock.is_locked());
}

#[test]
fn status_thresholds() {
    assert_eq!(status_label(8.5), "MAGER");
    assert_eq!(status_label(64.2), "FULL GAS");
    assert_eq!(status_label(12.0), "ACTIVE");
    assert_eq!(status_label(10.0), "ACTIVE");
    assert_eq!(status_label(50.0), "ACTIVE");
    assert_eq!(RunnerStatus::from_distance(50.1), RunnerStatus::FullGas);
    assert_eq!(RunnerStatus::FullGas.to_string(), "FULL GAS");
    assert_eq!(RunnerStatus::Mager.css_class(), "status-mager");
}

#[test]
fn rank_and_distance_labels() {
    assert_eq!(rank_label(0), "01");
    assert_eq!(rank_label(9), "10");
    assert_eq!(distance_label(64.2), "64.2");
    assert_eq!(distance_label(12.0), "12.0");
}

#[test]
fn grid_shape_css() {
    assert_eq!(
        GridShape::new(8, 2).css(),
        "grid-column: span 8; grid-row: span 2;"
    );
}
