use glam::Vec2;

/// `WheelEvent.deltaMode` values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

// Pixel size of one wheel "line" when the browser reports line deltas.
pub const WHEEL_LINE_PX: f32 = 16.0;

/// Pointer position in normalized device coordinates: x right, y up, both in
/// [-1, 1] across the viewport. A zero-sized viewport maps to the center.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Wheel delta converted to pixels.
#[inline]
pub fn wheel_delta_px(delta_y: f32, delta_mode: u32, viewport_height: f32) -> f32 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => delta_y * viewport_height,
        _ => delta_y,
    }
}

/// Vertical finger tracking across a touch gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchTracker {
    last_y: Option<f32>,
}

impl TouchTracker {
    pub fn start(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Scroll delta for a finger move to `y`. Dragging up scrolls down.
    pub fn move_to(&mut self, y: f32) -> Option<f32> {
        let last = self.last_y.replace(y)?;
        Some(last - y)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.last_y.is_some()
    }
}

/// Element id an in-page link points at; `"#"` alone points nowhere.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseOverlays,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" => Some(KeyAction::CloseOverlays),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Teardown,
    /// Restored from the back/forward cache with the site still mounted.
    Resume,
}

/// What a `pagehide`/`pageshow` event means for the mounted site. A page
/// hidden into the back/forward cache keeps running state.
pub fn page_transition(event: &str, persisted: bool) -> Option<PageAction> {
    match (event, persisted) {
        ("pagehide", false) => Some(PageAction::Teardown),
        ("pageshow", true) => Some(PageAction::Resume),
        _ => None,
    }
}
