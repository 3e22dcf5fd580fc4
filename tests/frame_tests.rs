// Host-side tests for the frame scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use temcy_core::frame::{FramePhase, FrameScheduler, TaskHandle};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn record(log: &Log, name: &'static str) -> impl FnMut(&temcy_core::FrameTick) + 'static {
    let log = log.clone();
    move |_| log.borrow_mut().push(name)
}

#[test]
fn tasks_run_in_phase_order_regardless_of_registration() {
    let scheduler = FrameScheduler::new();
    let log: Log = Rc::default();
    let _r = scheduler.add(FramePhase::Render, record(&log, "render"));
    let _s = scheduler.add(FramePhase::Sections, record(&log, "sections"));
    let _t = scheduler.add(FramePhase::Triggers, record(&log, "triggers"));
    let _d = scheduler.add(FramePhase::Scroll, record(&log, "scroll"));
    let _s2 = scheduler.add(FramePhase::Sections, record(&log, "sections-2"));

    assert_eq!(scheduler.run_frame(0.0), 5);
    assert_eq!(
        *log.borrow(),
        ["scroll", "triggers", "sections", "sections-2", "render"]
    );
}

#[test]
fn tick_reports_delta_and_elapsed_time() {
    let scheduler = FrameScheduler::new();
    let ticks = Rc::new(RefCell::new(Vec::new()));
    let t = ticks.clone();
    let _h = scheduler.add(FramePhase::Render, move |tick| t.borrow_mut().push(*tick));

    scheduler.run_frame(10.0);
    scheduler.run_frame(10.5);
    scheduler.run_frame(11.0);

    let ticks = ticks.borrow();
    assert_eq!(ticks[0].dt_sec, 0.0);
    assert_eq!(ticks[1].dt_sec, 0.5);
    assert_eq!(ticks[2].elapsed_sec, 1.0);
    assert_eq!(ticks[2].frame, 2);
}

#[test]
fn cancelled_task_never_runs_again() {
    let scheduler = FrameScheduler::new();
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let handle = scheduler.add(FramePhase::Scroll, move |_| c.set(c.get() + 1));

    scheduler.run_frame(0.0);
    assert!(handle.is_active());
    assert!(handle.cancel());
    scheduler.run_frame(0.016);
    scheduler.run_frame(0.032);
    assert_eq!(count.get(), 1);
    assert!(scheduler.is_empty());
}

#[test]
fn cancel_from_an_earlier_task_in_the_same_frame() {
    let scheduler = FrameScheduler::new();
    let render_runs = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::default();

    let s = slot.clone();
    let _scroll = scheduler.add(FramePhase::Scroll, move |_| {
        if let Some(h) = s.borrow_mut().take() {
            assert!(h.cancel());
        }
    });
    let r = render_runs.clone();
    *slot.borrow_mut() = Some(scheduler.add(FramePhase::Render, move |_| r.set(r.get() + 1)));

    assert_eq!(scheduler.run_frame(0.0), 1);
    scheduler.run_frame(0.016);
    assert_eq!(render_runs.get(), 0);
    assert_eq!(scheduler.len(), 1);
}

#[test]
fn task_added_mid_frame_starts_next_frame() {
    let scheduler = FrameScheduler::new();
    let log: Log = Rc::default();
    let added: Rc<RefCell<Vec<TaskHandle>>> = Rc::default();

    let (sch, l, a) = (scheduler.clone(), log.clone(), added.clone());
    let _h = scheduler.add(FramePhase::Render, move |_| {
        if a.borrow().is_empty() {
            a.borrow_mut().push(sch.add(FramePhase::Scroll, record(&l, "late")));
        }
    });

    scheduler.run_frame(0.0);
    assert!(log.borrow().is_empty());
    scheduler.run_frame(0.016);
    assert_eq!(*log.borrow(), ["late"]);
}

#[test]
fn clear_inside_a_frame_stops_remaining_tasks() {
    let scheduler = FrameScheduler::new();
    let log: Log = Rc::default();
    let sch = scheduler.clone();
    let first = scheduler.add(FramePhase::Scroll, move |_| sch.clear());
    let second = scheduler.add(FramePhase::Render, record(&log, "render"));

    assert_eq!(scheduler.run_frame(0.0), 1);
    assert!(log.borrow().is_empty());
    assert!(!first.is_active());
    assert!(!second.cancel(), "cleared tasks are already cancelled");
    assert!(scheduler.is_empty());
    assert_eq!(scheduler.run_frame(0.016), 0);
}
