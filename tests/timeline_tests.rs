// Host-side tests for timelines and section choreography.

use temcy_core::bridge::{ElementBounds, Marker, ScrollTriggerBridge, TriggerSpec};
use temcy_core::choreo::{self, Choreography, Playback, SequenceTrigger, StyleWrite};
use temcy_core::timeline::{
    stagger_offsets, Ease, Position, PropSet, Timeline, TweenConfig, VisualState,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn state_of(samples: &[(u32, VisualState)], id: u32) -> VisualState {
    samples.iter().find(|(t, _)| *t == id).map(|(_, s)| *s).unwrap()
}

#[test]
fn stagger_of_five_items() {
    let offsets = stagger_offsets(5, 0.1);
    let expected = [0.0, 0.1, 0.2, 0.3, 0.4];
    assert_eq!(offsets.len(), 5);
    for (o, e) in offsets.iter().zip(expected) {
        assert!(approx(*o, e), "{:?}", offsets);
    }

    let tl = Timeline::new().from_to(
        &[100, 101, 102, 103, 104],
        PropSet::new().opacity(0.0).x(-20.0),
        PropSet::new().opacity(1.0).x(0.0),
        TweenConfig::new(0.5, Ease::PowerOut(2)).stagger(0.1),
        Position::Sequential,
    );
    let starts = tl.tweens()[0].element_starts();
    for (s, e) in starts.iter().zip(expected) {
        assert!(approx(*s, e));
    }
    assert!(approx(tl.duration(), 0.9));
}

#[test]
fn negative_offset_overlaps_previous_tween() {
    // Two title lines with a 0.5 s delay and 0.2 s stagger, then the bio
    // starting one second before they finish.
    let tl = Timeline::new()
        .set(&[1, 2, 3], PropSet::new().y(100.0).opacity(0.0))
        .to(
            &[1, 2],
            PropSet::new().y(0.0).opacity(1.0),
            TweenConfig::new(1.5, Ease::PowerOut(4)).stagger(0.2).delay(0.5),
            Position::Sequential,
        )
        .to(
            &[3],
            PropSet::new().y(0.0).opacity(1.0),
            TweenConfig::new(1.0, Ease::PowerOut(3)),
            Position::Offset(-1.0),
        );
    assert!(approx(tl.tweens()[1].start, 1.2));
    assert!(approx(tl.duration(), 2.2));

    let before = tl.sample(1.1);
    assert_eq!(state_of(&before, 3).opacity, 0.0);
    assert_eq!(state_of(&before, 3).y, 100.0);
    assert!(state_of(&tl.sample(1.5), 3).opacity > 0.0);

    let end = tl.sample(tl.duration());
    for id in [1, 2, 3] {
        assert_eq!(state_of(&end, id), VisualState::IDENTITY);
    }
}

#[test]
fn from_state_renders_before_tween_starts() {
    let tl = Timeline::new().from_to(
        &[7],
        PropSet::new().opacity(0.0).y(50.0),
        PropSet::new().opacity(1.0).y(0.0),
        TweenConfig::new(1.0, Ease::Linear).delay(0.5),
        Position::Sequential,
    );
    let s = state_of(&tl.sample(0.0), 7);
    assert_eq!((s.opacity, s.y), (0.0, 50.0));
    let s = state_of(&tl.sample(1.0), 7);
    assert!(approx(s.opacity, 0.5) && approx(s.y, 25.0));
}

#[test]
fn scrub_sampling_is_reversible() {
    let tl = Timeline::new().to(
        &[2],
        PropSet::new().x(-200.0).y(-100.0).opacity(0.0).scale(1.2),
        TweenConfig::new(0.5, Ease::PowerIn(1)),
        Position::At(0.0),
    );
    let a = tl.sample_progress(0.3);
    let _ = tl.sample_progress(0.9);
    let b = tl.sample_progress(0.3);
    assert_eq!(a, b);
    assert_eq!(state_of(&tl.sample_progress(0.0), 2), VisualState::IDENTITY);
    let out = state_of(&tl.sample_progress(1.0), 2);
    assert!(approx(out.x, -200.0) && approx(out.scale, 1.2) && approx(out.opacity, 0.0));
}

#[test]
fn eases_hit_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::PowerIn(1),
        Ease::PowerOut(3),
        Ease::PowerInOut(2),
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert!(ease.apply(0.5) > 0.0 && ease.apply(0.5) < 1.0);
    }
    assert!(Ease::PowerOut(4).apply(0.2) > Ease::PowerIn(4).apply(0.2));
}

#[test]
fn css_transform_reflects_state() {
    let s = VisualState {
        opacity: 1.0,
        x: -200.0,
        y: 100.0,
        scale: 1.2,
    };
    let css = s.css_transform();
    assert!(css.contains("-200"));
    assert!(css.contains("100"));
    assert!(css.contains("scale(1.2"));
}

fn reveal(target: u32) -> Choreography {
    Choreography::new("reveal").sequence(
        SequenceTrigger::OnEnter {
            target,
            start: Marker::top_at(0.8),
        },
        Timeline::new().from_to(
            &[target],
            PropSet::new().opacity(0.0).y(30.0),
            PropSet::new().opacity(1.0).y(0.0),
            TweenConfig::new(0.8, Ease::default()),
            Position::Sequential,
        ),
    )
}

#[test]
fn mount_and_unmount_leave_bridge_count_unchanged() {
    let mut bridge = ScrollTriggerBridge::new();
    bridge.register(
        TriggerSpec {
            owner: 99,
            start: Marker::TOP_TOP,
            end: None,
        },
        Some(ElementBounds::new(0.0, 10.0)),
    );
    let before = bridge.len();

    let choreography = reveal(20).sequence(
        SequenceTrigger::Scrub {
            target: 20,
            start: Marker::TOP_TOP,
            end: Marker::BOTTOM_CENTER,
            smoothing: 0.0,
        },
        Timeline::new(),
    );
    let section = choreo::mount(3, choreography, |_| Some(ElementBounds::new(1000.0, 400.0)), &mut bridge);
    assert_eq!(bridge.len(), before + 2);
    assert_eq!(bridge.owner_len(3), 2);

    let writes = section.unmount(&mut bridge);
    assert_eq!(bridge.len(), before);
    assert_eq!(writes, vec![StyleWrite::Clear(20)]);
}

#[test]
fn on_enter_sequence_plays_once_triggered() {
    let mut bridge = ScrollTriggerBridge::new();
    let mut section = choreo::mount(3, reveal(20), |_| Some(ElementBounds::new(1000.0, 400.0)), &mut bridge);
    assert_eq!(section.playback(), vec![Playback::Armed]);

    // Initial render shows the from state.
    let writes = section.advance(0.016, bridge.update(0.0, 800.0));
    assert_eq!(writes.len(), 1);
    match writes[0] {
        StyleWrite::Set(20, s) => assert_eq!((s.opacity, s.y), (0.0, 30.0)),
        other => panic!("unexpected write {:?}", other),
    }
    assert!(section.advance(0.016, bridge.update(0.0, 800.0)).is_empty());
    assert!(section.is_settled());

    // start marker: 1000 - 640 = 360
    section.advance(0.016, bridge.update(400.0, 800.0));
    assert!(matches!(section.playback()[0], Playback::Playing { .. }));
    for _ in 0..60 {
        section.advance(0.016, bridge.update(400.0, 800.0));
    }
    assert_eq!(section.playback(), vec![Playback::Finished]);

    // Scrolling back up does not replay it.
    section.advance(0.016, bridge.update(0.0, 800.0));
    section.advance(0.016, bridge.update(400.0, 800.0));
    assert_eq!(section.playback(), vec![Playback::Finished]);
}

#[test]
fn refresh_ignores_the_transform_the_section_wrote() {
    let mut bridge = ScrollTriggerBridge::new();
    let mut section = choreo::mount(3, reveal(20), |_| Some(ElementBounds::new(1000.0, 400.0)), &mut bridge);
    section.advance(0.016, bridge.update(0.0, 800.0));

    // The armed element renders 30px lower than its layout box.
    section.refresh(|_| Some(ElementBounds::new(1030.0, 400.0)), &mut bridge);

    // start marker is still 1000 - 640 = 360
    let events = bridge.update(365.0, 800.0);
    assert!(events.iter().any(|e| e.entered));
    section.advance(0.016, events);
    assert!(matches!(section.playback()[0], Playback::Playing { .. }));
}

#[test]
fn detached_on_enter_target_shows_end_state() {
    let mut bridge = ScrollTriggerBridge::new();
    let mut section = choreo::mount(3, reveal(20), |_| None, &mut bridge);
    assert!(bridge.is_empty());
    assert_eq!(section.playback(), vec![Playback::Finished]);
    let writes = section.advance(0.016, &[]);
    assert_eq!(writes.as_slice(), &[StyleWrite::Set(20, VisualState::IDENTITY)]);
}

#[test]
fn scrub_follows_progress_in_both_directions() {
    let mut bridge = ScrollTriggerBridge::new();
    let choreography = Choreography::new("scrub").sequence(
        SequenceTrigger::Scrub {
            target: 1,
            start: Marker::TOP_TOP,
            end: Marker::BOTTOM_CENTER,
            smoothing: 0.0,
        },
        Timeline::new().to(
            &[2],
            PropSet::new().opacity(0.0),
            TweenConfig::new(0.5, Ease::Linear),
            Position::At(0.0),
        ),
    );
    let mut section = choreo::mount(1, choreography, |_| Some(ElementBounds::new(0.0, 800.0)), &mut bridge);
    let opacity = |w: &[StyleWrite]| match w.last() {
        Some(StyleWrite::Set(_, s)) => s.opacity,
        _ => f32::NAN,
    };

    // end marker: 800 - 400 = 400
    let w = section.advance(0.016, bridge.update(200.0, 800.0));
    assert!(approx(opacity(w.as_slice()), 0.5));
    let w = section.advance(0.016, bridge.update(400.0, 800.0));
    assert!(approx(opacity(w.as_slice()), 0.0));
    let w = section.advance(0.016, bridge.update(200.0, 800.0));
    assert!(approx(opacity(w.as_slice()), 0.5));
}

#[test]
fn smoothed_scrub_lags_then_catches_up() {
    let mut bridge = ScrollTriggerBridge::new();
    let choreography = Choreography::new("scrub").sequence(
        SequenceTrigger::Scrub {
            target: 1,
            start: Marker::TOP_TOP,
            end: Marker::BOTTOM_CENTER,
            smoothing: 1.0,
        },
        Timeline::new().to(&[2], PropSet::new().x(100.0), TweenConfig::new(1.0, Ease::Linear), Position::At(0.0)),
    );
    let mut section = choreo::mount(1, choreography, |_| Some(ElementBounds::new(0.0, 800.0)), &mut bridge);
    section.advance(0.0, bridge.update(400.0, 800.0));
    match section.playback()[0] {
        Playback::Scrub { shown, target } => {
            assert_eq!(target, 1.0);
            assert!(shown < 0.1);
        }
        other => panic!("unexpected playback {:?}", other),
    }
    for _ in 0..600 {
        section.advance(0.016, bridge.events());
    }
    assert!(section.is_settled());
}
