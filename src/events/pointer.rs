use crate::dom::Listener;
use crate::input;
use crate::page::PageState;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window in normalized device
/// coordinates. The terrain reads the latest value once per frame.
pub fn wire_pointer_tracking(window: &web::Window, page: &Rc<PageState>) -> Option<Listener> {
    let win = window.clone();
    let page = page.clone();
    Listener::new(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let size = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        page.pointer.set(input::pointer_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            size(win.inner_width()),
            size(win.inner_height()),
        ));
    })
}
