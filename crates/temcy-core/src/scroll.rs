//! Smooth-scroll driver.
//!
//! Native wheel/touch input moves a *target* (`raw_offset`); every animation
//! frame the displayed position (`virtual_offset`) is damped toward it and the
//! host writes it back to the document. Nothing here touches the DOM, so the
//! same driver runs under host tests.

use crate::constants::{
    SCROLL_LERP, SCROLL_MAX_DT_SEC, SCROLL_REFERENCE_FPS, SCROLL_SETTLE_PX,
};

#[derive(Clone, Debug)]
pub struct ScrollOptions {
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub lerp: f32,
    pub wheel_multiplier: f32,
    pub touch_multiplier: f32,
    /// When false, touch drags move the page 1:1 with the finger.
    pub smooth_touch: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            lerp: SCROLL_LERP,
            wheel_multiplier: 1.0,
            touch_multiplier: 1.0,
            smooth_touch: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f32,
    pub virtual_offset: f32,
    pub velocity: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollToOptions {
    pub offset: f32,
    pub immediate: bool,
}

pub struct SmoothScroll {
    options: ScrollOptions,
    state: ScrollState,
    // None until the host has measured layout at least once.
    limit: Option<f32>,
    viewport_height: f32,
    stopped: bool,
    pending_write: bool,
}

impl SmoothScroll {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            state: ScrollState::default(),
            limit: None,
            viewport_height: 0.0,
            stopped: false,
            pending_write: false,
        }
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.limit.is_some()
    }

    #[inline]
    pub fn limit(&self) -> f32 {
        self.limit.unwrap_or(0.0)
    }

    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Scrolled fraction of the page in [0, 1].
    pub fn progress(&self) -> f32 {
        let limit = self.limit();
        if limit > 0.0 {
            (self.state.virtual_offset / limit).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// True while the displayed position has not reached the target.
    #[inline]
    pub fn is_animating(&self) -> bool {
        (self.state.raw_offset - self.state.virtual_offset).abs() > 0.0
    }

    /// Recompute the scroll bounds after layout changes.
    ///
    /// The displayed position is kept; only the target is clamped into the
    /// new range so the page eases to the nearest valid offset.
    pub fn resize(&mut self, content_height: f32, viewport_height: f32) {
        if viewport_height.is_nan() || viewport_height <= 0.0 || !content_height.is_finite() {
            return;
        }
        let limit = (content_height - viewport_height).max(0.0);
        self.limit = Some(limit);
        self.viewport_height = viewport_height;
        self.state.raw_offset = self.state.raw_offset.clamp(0.0, limit);
        log::debug!("[scroll] resize limit={:.0} viewport={:.0}", limit, viewport_height);
    }

    /// Feed a wheel delta. Returns false when the input was not consumed and
    /// the host should let the browser handle it.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        if !self.accepts_input() || !delta_y.is_finite() {
            return false;
        }
        let target = self.state.raw_offset + delta_y * self.options.wheel_multiplier;
        self.state.raw_offset = target.clamp(0.0, self.limit());
        true
    }

    pub fn on_touch_move(&mut self, delta_y: f32) -> bool {
        if !self.accepts_input() || !delta_y.is_finite() {
            return false;
        }
        let target = (self.state.raw_offset + delta_y * self.options.touch_multiplier)
            .clamp(0.0, self.limit());
        self.state.raw_offset = target;
        if !self.options.smooth_touch {
            self.state.virtual_offset = target;
            self.pending_write = true;
        }
        true
    }

    /// Adopt a scroll position that did not originate from the driver
    /// (scrollbar drag, find-in-page). Echoes of our own writes are ignored.
    pub fn on_native_scroll(&mut self, y: f32) {
        if !self.accepts_input() || self.is_animating() || !y.is_finite() {
            return;
        }
        if (y - self.state.virtual_offset).abs() > SCROLL_SETTLE_PX {
            let y = y.clamp(0.0, self.limit());
            self.state.raw_offset = y;
            self.state.virtual_offset = y;
            self.state.velocity = 0.0;
            // Report the adopted offset so triggers recompute.
            self.pending_write = true;
        }
    }

    pub fn scroll_to(&mut self, target: f32, opts: ScrollToOptions) {
        if !self.accepts_input() || !target.is_finite() {
            return;
        }
        let y = (target + opts.offset).clamp(0.0, self.limit());
        self.state.raw_offset = y;
        if opts.immediate {
            self.state.virtual_offset = y;
            self.state.velocity = 0.0;
            self.pending_write = true;
        }
    }

    /// Hold the current position and ignore input (overlays, open menus).
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.state.raw_offset = self.state.virtual_offset;
            self.state.velocity = 0.0;
        }
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance one animation frame.
    ///
    /// Returns the new displayed offset when the host must write it to the
    /// document, `None` when nothing moved or layout is not ready yet.
    pub fn step(&mut self, dt_sec: f32) -> Option<f32> {
        if !self.is_ready() || self.stopped {
            return None;
        }
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, SCROLL_MAX_DT_SEC)
        } else {
            0.0
        };
        let before = self.state.virtual_offset;
        let error = self.state.raw_offset - before;
        if error.abs() <= SCROLL_SETTLE_PX {
            self.state.virtual_offset = self.state.raw_offset;
        } else {
            self.state.virtual_offset = before + error * damping_alpha(self.options.lerp, dt);
        }
        let moved = self.state.virtual_offset - before;
        self.state.velocity = if dt > 0.0 { moved / dt } else { 0.0 };

        if moved != 0.0 || std::mem::take(&mut self.pending_write) {
            Some(self.state.virtual_offset)
        } else {
            None
        }
    }

    #[inline]
    fn accepts_input(&self) -> bool {
        self.is_ready() && !self.stopped
    }
}

/// Frame-rate independent blend factor for a per-60Hz-frame `lerp`.
///
/// Equals `lerp` exactly at a 60 Hz step and is always within [0, 1), so a
/// single step can never overshoot the target.
#[inline]
pub fn damping_alpha(lerp: f32, dt_sec: f32) -> f32 {
    let lambda = -(1.0 - lerp.clamp(0.0, 0.999)).ln() * SCROLL_REFERENCE_FPS;
    1.0 - (-lambda * dt_sec.max(0.0)).exp()
}
