//! Scroll-trigger bridge.
//!
//! Keeps trigger progress in lock-step with the smooth-scroll driver's
//! displayed offset instead of the browser's native scroll position. Sections
//! register `{bounds, start, end}` descriptors under an owner id and read
//! progress from the events produced by [`ScrollTriggerBridge::update`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Element geometry in document coordinates (px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    pub top: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height >= 0.0
    }

    /// Undo a `translate(.., ty) scale(s)` transform about the element's
    /// center, recovering the layout box from its rendered rect.
    pub fn without_transform(self, ty: f32, scale: f32) -> ElementBounds {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let ty = if ty.is_finite() { ty } else { 0.0 };
        let height = self.height / scale;
        ElementBounds {
            top: self.top - ty - height * (1.0 - scale) * 0.5,
            height,
        }
    }
}

/// A point on an element or on the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// Fraction of the extent, 0 = top, 1 = bottom.
    Fraction(f32),
    Px(f32),
}

impl Edge {
    pub const TOP: Edge = Edge::Fraction(0.0);
    pub const CENTER: Edge = Edge::Fraction(0.5);
    pub const BOTTOM: Edge = Edge::Fraction(1.0);

    #[inline]
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Edge::Fraction(f) => f * extent,
            Edge::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = MarkerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MarkerParseError::Edge(s.to_string());
        match s {
            "top" => Ok(Edge::TOP),
            "center" => Ok(Edge::CENTER),
            "bottom" => Ok(Edge::BOTTOM),
            _ => {
                if let Some(pct) = s.strip_suffix('%') {
                    let v: f32 = pct.parse().map_err(|_| bad())?;
                    Ok(Edge::Fraction(v / 100.0))
                } else if let Some(px) = s.strip_suffix("px") {
                    px.parse().map(Edge::Px).map_err(|_| bad())
                } else {
                    Err(bad())
                }
            }
        }
    }
}

/// `"<element edge> <viewport edge>"`: the trigger point is reached when the
/// element edge meets the viewport edge, e.g. `"top 80%"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub element: Edge,
    pub viewport: Edge,
}

impl Marker {
    pub const TOP_TOP: Marker = Marker::new(Edge::TOP, Edge::TOP);
    pub const TOP_BOTTOM: Marker = Marker::new(Edge::TOP, Edge::BOTTOM);
    pub const BOTTOM_CENTER: Marker = Marker::new(Edge::BOTTOM, Edge::CENTER);

    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Element top meeting `viewport_fraction` of the viewport height.
    pub const fn top_at(viewport_fraction: f32) -> Self {
        Self::new(Edge::TOP, Edge::Fraction(viewport_fraction))
    }

    /// Scroll offset at which this marker is reached.
    #[inline]
    pub fn scroll_position(&self, bounds: ElementBounds, viewport_height: f32) -> f32 {
        bounds.top + self.element.resolve(bounds.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Marker {
    type Err = MarkerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(el), Some(vp), None) => Ok(Marker::new(el.parse()?, vp.parse()?)),
            _ => Err(MarkerParseError::Arity(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MarkerParseError {
    #[error("marker needs exactly two edges, got {0:?}")]
    Arity(String),
    #[error("unknown marker edge {0:?}")]
    Edge(String),
}

pub type OwnerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trigger#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TriggerSpec {
    pub owner: OwnerId,
    pub start: Marker,
    /// One-shot triggers only need a start marker.
    pub end: Option<Marker>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerEvent {
    pub id: TriggerId,
    /// Position between start and end markers in [0, 1].
    pub progress: f32,
    /// Scroll crossed the start marker going forward during this update.
    pub entered: bool,
    /// Scroll moved back above the start marker during this update.
    pub left: bool,
}

struct Registration {
    id: TriggerId,
    owner: OwnerId,
    bounds: ElementBounds,
    start: Marker,
    end: Option<Marker>,
    reached: bool,
    progress: f32,
}

#[derive(Default)]
pub struct ScrollTriggerBridge {
    regs: Vec<Registration>,
    events: Vec<TriggerEvent>,
    next_id: u64,
    last_scroll: Option<(f32, f32)>,
}

impl ScrollTriggerBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger. Detached or unmeasurable elements are ignored and
    /// logged; the caller gets `None` and simply never animates.
    pub fn register(&mut self, spec: TriggerSpec, bounds: Option<ElementBounds>) -> Option<TriggerId> {
        let bounds = match bounds {
            Some(b) if b.is_valid() => b,
            _ => {
                log::warn!("[bridge] owner {} tried to register a detached element", spec.owner);
                return None;
            }
        };
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.regs.push(Registration {
            id,
            owner: spec.owner,
            bounds,
            start: spec.start,
            end: spec.end,
            reached: false,
            progress: 0.0,
        });
        log::debug!("[bridge] {} registered for owner {}", id, spec.owner);
        Some(id)
    }

    /// Re-measure a trigger after layout changes.
    pub fn refresh(&mut self, id: TriggerId, bounds: ElementBounds) -> bool {
        if !bounds.is_valid() {
            return false;
        }
        match self.regs.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, id: TriggerId) -> bool {
        let before = self.regs.len();
        self.regs.retain(|r| r.id != id);
        self.events.retain(|e| e.id != id);
        self.regs.len() != before
    }

    /// Drop every registration of `owner`. Returns how many were released;
    /// a repeated call releases nothing.
    pub fn release_owner(&mut self, owner: OwnerId) -> usize {
        let before = self.regs.len();
        self.regs.retain(|r| r.owner != owner);
        let released = before - self.regs.len();
        if released > 0 {
            let live: Vec<TriggerId> = self.regs.iter().map(|r| r.id).collect();
            self.events.retain(|e| live.contains(&e.id));
            log::debug!("[bridge] released {} trigger(s) of owner {}", released, owner);
        }
        released
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    pub fn owner_len(&self, owner: OwnerId) -> usize {
        self.regs.iter().filter(|r| r.owner == owner).count()
    }

    pub fn progress(&self, id: TriggerId) -> Option<f32> {
        self.regs.iter().find(|r| r.id == id).map(|r| r.progress)
    }

    /// Scroll/viewport values of the last update, if any.
    #[inline]
    pub fn last_scroll(&self) -> Option<(f32, f32)> {
        self.last_scroll
    }

    /// Recompute progress for every registration from the displayed scroll
    /// offset. Events are listed in registration order.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> &[TriggerEvent] {
        self.events.clear();
        if !scroll_y.is_finite() || viewport_height.is_nan() || viewport_height <= 0.0 {
            return &self.events;
        }
        self.last_scroll = Some((scroll_y, viewport_height));
        for r in self.regs.iter_mut() {
            let start = r.start.scroll_position(r.bounds, viewport_height);
            let end = r
                .end
                .map(|m| m.scroll_position(r.bounds, viewport_height))
                .unwrap_or(start);
            r.progress = span_progress(scroll_y, start, end);
            let reached = scroll_y >= start;
            let entered = reached && !r.reached;
            let left = !reached && r.reached;
            r.reached = reached;
            self.events.push(TriggerEvent {
                id: r.id,
                progress: r.progress,
                entered,
                left,
            });
        }
        &self.events
    }

    /// Events of the most recent update.
    #[inline]
    pub fn events(&self) -> &[TriggerEvent] {
        &self.events
    }
}

#[inline]
fn span_progress(scroll_y: f32, start: f32, end: f32) -> f32 {
    if end > start {
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    } else if scroll_y >= start {
        1.0
    } else {
        0.0
    }
}
