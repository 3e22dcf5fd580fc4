// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn pointer_maps_viewport_to_ndc() {
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_outside_viewport_is_clamped() {
    assert_eq!(pointer_ndc(-50.0, 900.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn wheel_modes_convert_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, DOM_DELTA_PIXEL, 800.0), 3.0);
    assert_eq!(wheel_delta_px(3.0, DOM_DELTA_LINE, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, DOM_DELTA_PAGE, 800.0), -800.0);
}

#[test]
fn touch_drag_up_scrolls_down() {
    let mut t = TouchTracker::default();
    assert_eq!(t.move_to(100.0), None, "move without start is ignored");
    t.end();
    t.start(500.0);
    assert!(t.is_active());
    assert_eq!(t.move_to(450.0), Some(50.0));
    assert_eq!(t.move_to(470.0), Some(-20.0));
    t.end();
    assert!(!t.is_active());
}

#[test]
fn anchors_resolve_to_element_ids() {
    assert_eq!(anchor_target("#leaderboard"), Some("leaderboard"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}

#[test]
fn escape_closes_overlays() {
    assert_eq!(key_action("Escape"), Some(KeyAction::CloseOverlays));
    assert_eq!(key_action("Esc"), Some(KeyAction::CloseOverlays));
    assert_eq!(key_action("a"), None);
}

#[test]
fn back_forward_cache_keeps_the_site_mounted() {
    assert_eq!(page_transition("pagehide", true), None);
    assert_eq!(page_transition("pageshow", true), Some(PageAction::Resume));
    assert_eq!(page_transition("pagehide", false), Some(PageAction::Teardown));
    assert_eq!(page_transition("pageshow", false), None);
}
