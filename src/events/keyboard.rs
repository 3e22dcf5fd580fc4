use crate::dom::Listener;
use crate::input::{self, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global keydown handling. Only keys with a [`KeyAction`] reach `handler`.
pub fn wire_global_keydown(
    document: &web::Document,
    mut handler: impl FnMut(KeyAction) + 'static,
) -> Option<Listener> {
    Listener::new(document, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(action) = input::key_action(&ev.key()) {
            log::debug!("[keys] {:?}", action);
            handler(action);
        }
    })
}
