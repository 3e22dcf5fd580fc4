use crate::sections::Selector;
use temcy_core::bridge::ElementBounds;
use temcy_core::timeline::VisualState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        Self::with_passive(target, event, true, handler)
    }

    /// Non-passive listeners may call `prevent_default` (wheel, touchmove).
    pub fn with_passive(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[dom] add '{}' listener failed: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Click listener on an element looked up by id. Missing elements are
/// skipped.
pub fn on_click_id(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    Listener::new(&el, "click", handler)
}

pub fn resolve(document: &web::Document, selector: Selector) -> Option<web::HtmlElement> {
    let el = match selector.item_css() {
        None => match selector {
            Selector::Id(id) => document.get_element_by_id(id),
            Selector::Item { .. } => None,
        },
        Some(css) => document.query_selector(&css).ok().flatten(),
    }?;
    el.dyn_into::<web::HtmlElement>().ok()
}

pub fn query_one(root: &web::Element, css: &str) -> Option<web::HtmlElement> {
    root.query_selector(css)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn content_height(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0)
}

/// Document-space bounds. Detached elements report `None`.
pub fn element_bounds(el: &web::Element) -> Option<ElementBounds> {
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    Some(ElementBounds::new(
        rect.top() as f32 + scroll_y(),
        rect.height() as f32,
    ))
}

pub fn write_visual_state(el: &web::HtmlElement, state: &VisualState) {
    let style = el.style();
    _ = style.set_property("opacity", &format!("{:.4}", state.opacity));
    _ = style.set_property("transform", &state.css_transform());
}

/// Drop inline animation styles so the stylesheet applies again.
pub fn clear_visual_state(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.remove_property("opacity");
    _ = style.remove_property("transform");
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn set_root_class(document: &web::Document, class: &str, on: bool) {
    if let Some(root) = document.document_element() {
        let cl = root.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}

/// Numeric `data-*` attribute of the closest ancestor carrying it.
pub fn closest_item_id(target: &web::EventTarget, attr: &str) -> Option<u32> {
    let el = target.dyn_ref::<web::Element>()?;
    let holder = el.closest(&format!("[{}]", attr)).ok()??;
    holder.get_attribute(attr)?.parse().ok()
}

/// Whether the event target is, or sits inside, an element matching `css`.
pub fn target_within(ev: &web::Event, css: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(css).ok().flatten())
        .is_some()
}
