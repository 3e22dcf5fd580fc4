//! Central per-frame task scheduler.
//!
//! The host owns a single animation-frame loop and calls
//! [`FrameScheduler::run_frame`] once per tick. Tasks run in [`FramePhase`]
//! order, then insertion order, so the scroll driver always publishes its
//! offset before triggers and sections read it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FramePhase {
    Scroll,
    Triggers,
    Sections,
    Render,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTick {
    pub now_sec: f64,
    pub dt_sec: f32,
    /// Seconds since the first frame the scheduler ran.
    pub elapsed_sec: f32,
    pub frame: u64,
}

type TaskFn = Box<dyn FnMut(&FrameTick)>;

struct Task {
    phase: FramePhase,
    alive: Rc<Cell<bool>>,
    run: TaskFn,
}

#[derive(Default)]
struct SchedulerInner {
    tasks: Vec<Task>,
    // Registered while a frame was running; merged once it ends.
    incoming: Vec<Task>,
    running: bool,
    clear_requested: bool,
    first_sec: Option<f64>,
    last_sec: Option<f64>,
    frame: u64,
    next_id: u64,
}

/// Cheaply cloneable handle to the shared scheduler.
///
/// Tasks may register or cancel other tasks from inside a frame; the new
/// task first runs on the following frame.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

/// Cancellation handle returned by [`FrameScheduler::add`].
///
/// `cancel` consumes the handle, so a task is cancelled at most once.
#[must_use = "dropping the handle leaves the task running with no way to cancel it"]
#[derive(Debug)]
pub struct TaskHandle {
    id: u64,
    alive: Rc<Cell<bool>>,
}

impl TaskHandle {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.alive.get()
    }

    /// Stop the task. Returns false if the scheduler had already dropped it
    /// (for example through [`FrameScheduler::clear`]).
    pub fn cancel(self) -> bool {
        self.alive.replace(false)
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, phase: FramePhase, run: impl FnMut(&FrameTick) + 'static) -> TaskHandle {
        let alive = Rc::new(Cell::new(true));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let task = Task {
            phase,
            alive: alive.clone(),
            run: Box::new(run),
        };
        if inner.running {
            inner.incoming.push(task);
        } else {
            insert_by_phase(&mut inner.tasks, task);
        }
        TaskHandle { id, alive }
    }

    /// Number of live tasks, including ones registered mid-frame.
    pub fn len(&self) -> usize {
        let inner = self.inner.borrow();
        inner
            .tasks
            .iter()
            .chain(inner.incoming.iter())
            .filter(|t| t.alive.get())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cancel every task. Outstanding handles report inactive afterwards.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        for t in inner.tasks.iter().chain(inner.incoming.iter()) {
            t.alive.set(false);
        }
        inner.tasks.clear();
        inner.incoming.clear();
        // Tasks of the frame in flight are owned by run_frame right now.
        if inner.running {
            inner.clear_requested = true;
        }
    }

    /// Run one frame at host timestamp `now_sec`. Returns how many tasks ran.
    pub fn run_frame(&self, now_sec: f64) -> usize {
        let (mut tasks, tick) = {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                log::warn!("[frame] re-entrant run_frame ignored");
                return 0;
            }
            inner.running = true;
            let first = *inner.first_sec.get_or_insert(now_sec);
            let dt = inner
                .last_sec
                .map(|last| (now_sec - last).max(0.0) as f32)
                .unwrap_or(0.0);
            inner.last_sec = Some(now_sec);
            let tick = FrameTick {
                now_sec,
                dt_sec: dt,
                elapsed_sec: (now_sec - first).max(0.0) as f32,
                frame: inner.frame,
            };
            inner.frame += 1;
            (std::mem::take(&mut inner.tasks), tick)
        };

        let mut ran = 0;
        for task in tasks.iter_mut() {
            if self.inner.borrow().clear_requested {
                task.alive.set(false);
            }
            // Checked per task: an earlier task may cancel a later one.
            if task.alive.get() {
                (task.run)(&tick);
                ran += 1;
            }
        }

        let mut inner = self.inner.borrow_mut();
        if std::mem::take(&mut inner.clear_requested) {
            for t in &tasks {
                t.alive.set(false);
            }
        }
        tasks.retain(|t| t.alive.get());
        for task in std::mem::take(&mut inner.incoming) {
            if task.alive.get() {
                insert_by_phase(&mut tasks, task);
            }
        }
        inner.tasks = tasks;
        inner.running = false;
        ran
    }
}

fn insert_by_phase(tasks: &mut Vec<Task>, task: Task) {
    let at = tasks.partition_point(|t| t.phase <= task.phase);
    tasks.insert(at, task);
}
