// Host-side tests for the scroll-trigger bridge.

use temcy_core::bridge::{
    Edge, ElementBounds, Marker, MarkerParseError, ScrollTriggerBridge, TriggerSpec,
};

const VH: f32 = 800.0;

fn spec(owner: u32, start: Marker, end: Option<Marker>) -> TriggerSpec {
    TriggerSpec { owner, start, end }
}

#[test]
fn markers_parse_keywords_percentages_and_pixels() {
    assert_eq!("top 80%".parse::<Marker>(), Ok(Marker::top_at(0.8)));
    assert_eq!("bottom center".parse::<Marker>(), Ok(Marker::BOTTOM_CENTER));
    assert_eq!("top top".parse::<Marker>(), Ok(Marker::TOP_TOP));
    assert_eq!(
        "10px 25%".parse::<Marker>(),
        Ok(Marker::new(Edge::Px(10.0), Edge::Fraction(0.25)))
    );
}

#[test]
fn malformed_markers_are_rejected() {
    assert_eq!(
        "top".parse::<Marker>(),
        Err(MarkerParseError::Arity("top".to_string()))
    );
    assert!(matches!(
        "top 80% extra".parse::<Marker>(),
        Err(MarkerParseError::Arity(_))
    ));
    assert_eq!(
        "middle 10%".parse::<Marker>(),
        Err(MarkerParseError::Edge("middle".to_string()))
    );
    assert!(matches!("top abc%".parse::<Marker>(), Err(MarkerParseError::Edge(_))));
}

#[test]
fn marker_scroll_position_matches_element_and_viewport_edges() {
    let bounds = ElementBounds::new(1000.0, 500.0);
    assert_eq!(Marker::top_at(0.8).scroll_position(bounds, VH), 360.0);
    assert_eq!(Marker::TOP_TOP.scroll_position(bounds, VH), 1000.0);
    assert_eq!(Marker::BOTTOM_CENTER.scroll_position(bounds, VH), 1100.0);
}

#[test]
fn one_shot_trigger_reports_enter_once() {
    let mut bridge = ScrollTriggerBridge::new();
    let id = bridge
        .register(spec(1, Marker::top_at(0.8), None), Some(ElementBounds::new(1000.0, 500.0)))
        .unwrap();

    let ev = bridge.update(300.0, VH)[0];
    assert_eq!(ev.id, id);
    assert!(!ev.entered);
    assert_eq!(ev.progress, 0.0);

    let ev = bridge.update(400.0, VH)[0];
    assert!(ev.entered);
    assert_eq!(ev.progress, 1.0);

    let ev = bridge.update(450.0, VH)[0];
    assert!(!ev.entered, "enter fires only on the crossing update");

    let ev = bridge.update(100.0, VH)[0];
    assert!(ev.left);
    assert_eq!(bridge.progress(id), Some(0.0));
}

#[test]
fn scrub_progress_spans_start_to_end() {
    let mut bridge = ScrollTriggerBridge::new();
    let id = bridge
        .register(
            spec(1, Marker::TOP_TOP, Some(Marker::BOTTOM_CENTER)),
            Some(ElementBounds::new(0.0, 800.0)),
        )
        .unwrap();
    // start = 0, end = 800 - 400 = 400
    bridge.update(200.0, VH);
    assert_eq!(bridge.progress(id), Some(0.5));
    bridge.update(1000.0, VH);
    assert_eq!(bridge.progress(id), Some(1.0));
    bridge.update(0.0, VH);
    assert_eq!(bridge.progress(id), Some(0.0));
    assert_eq!(bridge.last_scroll(), Some((0.0, VH)));
}

#[test]
fn detached_elements_are_not_registered() {
    let mut bridge = ScrollTriggerBridge::new();
    assert_eq!(bridge.register(spec(1, Marker::TOP_TOP, None), None), None);
    assert_eq!(
        bridge.register(
            spec(1, Marker::TOP_TOP, None),
            Some(ElementBounds::new(f32::NAN, 10.0))
        ),
        None
    );
    assert!(bridge.is_empty());
}

#[test]
fn release_owner_is_idempotent_and_scoped() {
    let mut bridge = ScrollTriggerBridge::new();
    let b = Some(ElementBounds::new(100.0, 100.0));
    bridge.register(spec(1, Marker::TOP_TOP, None), b);
    bridge.register(spec(1, Marker::TOP_BOTTOM, None), b);
    let keep = bridge.register(spec(2, Marker::TOP_TOP, None), b).unwrap();
    bridge.update(0.0, VH);

    assert_eq!(bridge.release_owner(1), 2);
    assert_eq!(bridge.release_owner(1), 0);
    assert_eq!(bridge.len(), 1);
    assert_eq!(bridge.owner_len(2), 1);
    assert!(bridge.events().iter().all(|e| e.id == keep));
}

#[test]
fn refresh_moves_markers_with_layout() {
    let mut bridge = ScrollTriggerBridge::new();
    let id = bridge
        .register(spec(1, Marker::TOP_TOP, None), Some(ElementBounds::new(500.0, 100.0)))
        .unwrap();
    bridge.update(600.0, VH);
    assert_eq!(bridge.progress(id), Some(1.0));

    assert!(bridge.refresh(id, ElementBounds::new(900.0, 100.0)));
    bridge.update(600.0, VH);
    assert_eq!(bridge.progress(id), Some(0.0));

    assert!(bridge.release(id));
    assert!(!bridge.refresh(id, ElementBounds::new(0.0, 0.0)));
}

#[test]
fn rendered_rect_maps_back_to_layout_box() {
    // A 400px box at 1000 drawn with translateY(50px) scale(0.95).
    let rendered = ElementBounds::new(1060.0, 380.0);
    let layout = rendered.without_transform(50.0, 0.95);
    assert!((layout.top - 1000.0).abs() < 1e-3, "{:?}", layout);
    assert!((layout.height - 400.0).abs() < 1e-3, "{:?}", layout);

    let untouched = ElementBounds::new(300.0, 20.0).without_transform(0.0, 1.0);
    assert_eq!(untouched, ElementBounds::new(300.0, 20.0));
    let degenerate = ElementBounds::new(300.0, 20.0).without_transform(f32::NAN, 0.0);
    assert_eq!(degenerate, ElementBounds::new(300.0, 20.0));
}

#[test]
fn invalid_viewport_produces_no_events() {
    let mut bridge = ScrollTriggerBridge::new();
    bridge.register(spec(1, Marker::TOP_TOP, None), Some(ElementBounds::new(0.0, 10.0)));
    assert!(bridge.update(0.0, 0.0).is_empty());
    assert!(bridge.update(f32::NAN, VH).is_empty());
}
