#![cfg(target_arch = "wasm32")]
use dom::Listener;
use modals::Overlays;
use page::PageState;
use render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use temcy_core::frame::{FramePhase, FrameScheduler, TaskHandle};
use temcy_core::terrain::{TerrainAnimator, TerrainMesh};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod input;
mod modals;
mod overlay;
mod page;
mod render;
mod scroll;
mod sections;
mod ui;

type SharedGpu = Rc<RefCell<Option<GpuState<'static>>>>;

/// Everything the page keeps alive between `init` and `pagehide`.
struct Site {
    page: Rc<PageState>,
    scheduler: FrameScheduler,
    tasks: Vec<TaskHandle>,
    raf: frame::RafLoop,
    listeners: Vec<Listener>,
    terrain: Rc<RefCell<TerrainAnimator>>,
    gpu: SharedGpu,
}

impl Site {
    /// Stop the loop, release every trigger and listener, and give
    /// scrolling back to the browser.
    fn teardown(self) {
        let Site {
            page,
            scheduler,
            tasks,
            raf,
            listeners,
            terrain,
            gpu,
        } = self;
        raf.cancel();
        let cancelled = tasks.into_iter().map(TaskHandle::cancel).filter(|&c| c).count();
        scheduler.clear();
        page.unmount_all();
        terrain.borrow_mut().unmount();
        gpu.borrow_mut().take();
        drop(listeners);
        page.restore_native_scroll();
        log::info!(
            "[site] torn down: {} tasks, {} triggers left",
            cancelled,
            page.bridge.borrow().len()
        );
    }
}

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Option<Listener> {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    Listener::new(window, "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas);
    })
}

/// Scroll, trigger, section and terrain tasks, in frame order.
fn add_frame_tasks(
    window: &web::Window,
    scheduler: &FrameScheduler,
    page: &Rc<PageState>,
    terrain: &Rc<RefCell<TerrainAnimator>>,
    gpu: &SharedGpu,
    canvas: Option<web::HtmlCanvasElement>,
) -> Vec<TaskHandle> {
    let moved = Rc::new(Cell::new(false));

    let (p, m, win) = (page.clone(), moved.clone(), window.clone());
    let scroll = scheduler.add(FramePhase::Scroll, move |tick| {
        let next = p.scroll.borrow_mut().step(tick.dt_sec);
        if let Some(y) = next {
            scroll::write_document_scroll(&win, y);
        }
        m.set(next.is_some());
    });

    let (p, m) = (page.clone(), moved);
    let triggers = scheduler.add(FramePhase::Triggers, move |_| {
        let dirty = p.take_layout_dirty();
        let mut events = p.frame_events.borrow_mut();
        if !m.get() && !dirty {
            events.clear();
            return;
        }
        let (y, vh) = {
            let s = p.scroll.borrow();
            (s.state().virtual_offset, s.viewport_height())
        };
        let mut bridge = p.bridge.borrow_mut();
        events.clear();
        events.extend_from_slice(bridge.update(y, vh));
    });

    let p = page.clone();
    let sections = scheduler.add(FramePhase::Sections, move |tick| {
        p.advance_sections(tick.dt_sec);
    });

    let (p, t, g) = (page.clone(), terrain.clone(), gpu.clone());
    let mut mounted_at: Option<f32> = None;
    let render = scheduler.add(FramePhase::Render, move |tick| {
        let orientation = {
            let mut terrain = t.borrow_mut();
            if terrain.mesh().is_none() {
                return;
            }
            let t0 = *mounted_at.get_or_insert(tick.elapsed_sec);
            match terrain.step(tick.elapsed_sec - t0, p.pointer.get()) {
                Some(o) => o,
                None => return,
            }
        };
        if let (Some(gpu), Some(canvas)) = (g.borrow_mut().as_mut(), canvas.as_ref()) {
            gpu.resize_if_needed(canvas.width(), canvas.height());
            if let Err(e) = gpu.render(&orientation) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
    });

    vec![scroll, triggers, sections, render]
}

/// Generate the terrain, bring up WebGPU on the hero canvas and hand the
/// mesh to the animator once the renderer exists.
fn spawn_terrain(
    canvas: web::HtmlCanvasElement,
    terrain: Rc<RefCell<TerrainAnimator>>,
    gpu: SharedGpu,
) {
    spawn_local(async move {
        let mesh = TerrainMesh::with_seed(rand::random::<u64>());
        let Some(state) = render::init_gpu(&canvas, &mesh).await else {
            log::warn!("[terrain] no renderer; hero stays static");
            return;
        };
        if terrain.borrow_mut().mount(mesh) {
            *gpu.borrow_mut() = Some(state);
            log::info!("[terrain] mounted");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("temcy-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    ui::render_content(&document)?;

    let page = Rc::new(PageState::new(document.clone()));
    dom::set_root_class(&document, constants::SMOOTH_SCROLL_CLASS, true);
    page.measure_layout();
    page.scroll.borrow_mut().on_native_scroll(dom::scroll_y());
    for plan in sections::page_sections(&content::RUNNERS, &content::PROJECTS) {
        page.mount_section(plan);
    }

    let overlays = Rc::new(Overlays::new(page.clone()));
    let mut listeners = modals::wire_overlays(&document, &overlays);
    let o = overlays.clone();
    listeners.extend(scroll::wire_anchor_links(
        &document,
        &page,
        Rc::new(move || o.close_all()),
    ));
    let o = overlays.clone();
    listeners.extend(events::keyboard::wire_global_keydown(&document, move |action| {
        match action {
            input::KeyAction::CloseOverlays => o.close_all(),
        }
    }));
    listeners.extend(events::pointer::wire_pointer_tracking(&window, &page));
    listeners.extend(scroll::wire_scroll_input(&window, &page));
    let p = page.clone();
    listeners.extend(Listener::new(&window, "load", move |_| p.measure_layout()));

    let canvas = document
        .get_element_by_id(constants::HERO_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let terrain = Rc::new(RefCell::new(TerrainAnimator::new()));
    let gpu: SharedGpu = Rc::new(RefCell::new(None));
    match &canvas {
        Some(c) => {
            listeners.extend(wire_canvas_resize(&window, c));
            spawn_terrain(c.clone(), terrain.clone(), gpu.clone());
        }
        None => log::warn!("[terrain] missing #{}", constants::HERO_CANVAS_ID),
    }

    let scheduler = FrameScheduler::new();
    let tasks = add_frame_tasks(&window, &scheduler, &page, &terrain, &gpu, canvas);
    let raf = frame::start_loop(scheduler.clone());

    let site = Rc::new(RefCell::new(Some(Site {
        page,
        scheduler,
        tasks,
        raf,
        listeners,
        terrain,
        gpu,
    })));
    wire_teardown(&window, site);
    log::info!("[site] ready");
    Ok(())
}

/// `pagehide` tears the site down unless the page is entering the
/// back/forward cache; a cached page re-measures when it is shown again.
fn wire_teardown(window: &web::Window, site: Rc<RefCell<Option<Site>>>) {
    for event in ["pagehide", "pageshow"] {
        let site = site.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .is_some_and(|e| e.persisted());
            match input::page_transition(event, persisted) {
                Some(input::PageAction::Teardown) => {
                    if let Some(site) = site.borrow_mut().take() {
                        site.teardown();
                    }
                }
                Some(input::PageAction::Resume) => {
                    if let Some(site) = site.borrow().as_ref() {
                        site.page.measure_layout();
                        site.page.scroll.borrow_mut().on_native_scroll(dom::scroll_y());
                        log::info!("[site] resumed from back/forward cache");
                    }
                }
                None => log::debug!("[site] {} (persisted={}) ignored", event, persisted),
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
