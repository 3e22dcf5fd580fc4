use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use temcy_core::frame::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page's single `requestAnimationFrame` loop.
///
/// Every tick runs one scheduler frame; subsystems never request frames of
/// their own. `cancel` stops the loop and releases the callback.
pub struct RafLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(scheduler: FrameScheduler) -> RafLoop {
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let origin = Instant::now();

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        scheduler.run_frame(origin.elapsed().as_secs_f64());
        // A task may have cancelled the loop during this frame.
        if running_tick.get() {
            pending_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));
    log::info!("[frame] loop started");

    RafLoop {
        running,
        pending,
        tick,
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let cb = guard.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl RafLoop {
    pub fn cancel(self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop cancelled");
    }
}
