use crate::constants::ANCHOR_LINK_SELECTOR;
use crate::dom::{self, Listener};
use crate::input::{self, TouchTracker};
use crate::page::PageState;
use std::cell::Cell;
use std::rc::Rc;
use temcy_core::scroll::ScrollToOptions;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed wheel, touch, native scroll and resize into the driver.
pub fn wire_scroll_input(window: &web::Window, page: &Rc<PageState>) -> Vec<Listener> {
    let mut out = Vec::new();

    let p = page.clone();
    out.extend(Listener::with_passive(window, "wheel", false, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        if ev.ctrl_key() {
            // Pinch-zoom gestures arrive as ctrl+wheel.
            return;
        }
        let vh = dom::viewport_height();
        let dy = input::wheel_delta_px(ev.delta_y() as f32, ev.delta_mode(), vh);
        let mut scroll = p.scroll.borrow_mut();
        if scroll.on_wheel(dy) || scroll.is_stopped() {
            ev.prevent_default();
        }
    }));

    let touch = Rc::new(Cell::new(TouchTracker::default()));
    let t = touch.clone();
    out.extend(Listener::new(window, "touchstart", move |ev| {
        if let Some(y) = first_touch_y(&ev) {
            let mut tracker = t.get();
            tracker.start(y);
            t.set(tracker);
        }
    }));
    let (t, p) = (touch.clone(), page.clone());
    out.extend(Listener::with_passive(window, "touchmove", false, move |ev| {
        let Some(y) = first_touch_y(&ev) else {
            return;
        };
        let mut tracker = t.get();
        let delta = tracker.move_to(y);
        t.set(tracker);
        if let Some(dy) = delta {
            if p.scroll.borrow_mut().on_touch_move(dy) {
                ev.prevent_default();
            }
        }
    }));
    for event in ["touchend", "touchcancel"] {
        let t = touch.clone();
        out.extend(Listener::new(window, event, move |_| {
            let mut tracker = t.get();
            tracker.end();
            t.set(tracker);
        }));
    }

    let p = page.clone();
    out.extend(Listener::new(window, "scroll", move |_| {
        p.scroll.borrow_mut().on_native_scroll(dom::scroll_y());
    }));

    let p = page.clone();
    out.extend(Listener::new(window, "resize", move |_| {
        p.measure_layout();
    }));

    out
}

fn first_touch_y(ev: &web::Event) -> Option<f32> {
    let ev = ev.dyn_ref::<web::TouchEvent>()?;
    let touch = ev.touches().get(0)?;
    Some(touch.client_y() as f32)
}

/// Route in-page links through the driver. `before` runs first so overlays
/// can release the scroll lock before the driver accepts the jump.
pub fn wire_anchor_links(
    document: &web::Document,
    page: &Rc<PageState>,
    before: Rc<dyn Fn()>,
) -> Vec<Listener> {
    let Ok(links) = document.query_selector_all(ANCHOR_LINK_SELECTOR) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for i in 0..links.length() {
        let Some(link) = links
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlAnchorElement>().ok())
        else {
            continue;
        };
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let (p, before) = (page.clone(), before.clone());
        out.extend(Listener::with_passive(&link, "click", false, move |ev| {
            let Some(id) = input::anchor_target(&href) else {
                return;
            };
            let Some(bounds) = p
                .document
                .get_element_by_id(id)
                .and_then(|el| dom::element_bounds(&el))
            else {
                return;
            };
            ev.prevent_default();
            before();
            p.scroll
                .borrow_mut()
                .scroll_to(bounds.top, ScrollToOptions::default());
            log::debug!("[scroll] anchor #{} -> {:.0}", id, bounds.top);
        }));
    }
    out
}

/// Write the driver's displayed offset to the document.
#[inline]
pub fn write_document_scroll(window: &web::Window, y: f32) {
    window.scroll_to_with_x_and_y(0.0, y as f64);
}
