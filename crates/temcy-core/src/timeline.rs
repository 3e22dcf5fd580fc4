//! Declarative animation timelines.
//!
//! A [`Timeline`] is plain data: tweens with resolved start times. Sampling it
//! at a time `t` is a pure function, which is what lets the same timeline be
//! played on a clock or scrubbed by scroll progress and reversed freely.

use fnv::FnvHashMap;

/// Stable handle a section maps to one of its elements.
pub type TargetId = u32;

/// The visual properties the animation core is allowed to write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl VisualState {
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn with(mut self, props: &PropSet) -> Self {
        self.apply(props);
        self
    }

    pub fn apply(&mut self, props: &PropSet) {
        if let Some(v) = props.opacity {
            self.opacity = v;
        }
        if let Some(v) = props.x {
            self.x = v;
        }
        if let Some(v) = props.y {
            self.y = v;
        }
        if let Some(v) = props.scale {
            self.scale = v;
        }
    }

    /// Move the properties named in `to` from `self` toward `to` by `p`.
    pub fn toward(self, to: &PropSet, p: f32) -> Self {
        let lerp = |a: f32, b: Option<f32>| b.map_or(a, |b| a + (b - a) * p);
        Self {
            opacity: lerp(self.opacity, to.opacity),
            x: lerp(self.x, to.x),
            y: lerp(self.y, to.y),
            scale: lerp(self.scale, to.scale),
        }
    }

    /// CSS `transform` value for this state.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.x, self.y, self.scale
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Partial [`VisualState`]; unset fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PropSet {
    pub opacity: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
}

impl PropSet {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            scale: None,
        }
    }

    pub const fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }

    pub const fn x(mut self, v: f32) -> Self {
        self.x = Some(v);
        self
    }

    pub const fn y(mut self, v: f32) -> Self {
        self.y = Some(v);
        self
    }

    pub const fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }
}

/// Easing curves. `PowerN` follows the usual naming: power1 is quadratic,
/// power4 is quintic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::PowerOut(1)
    }
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let ease_in = |n: u8, t: f32| t.powi(n as i32 + 1);
        match self {
            Ease::Linear => t,
            Ease::PowerIn(n) => ease_in(n, t),
            Ease::PowerOut(n) => 1.0 - ease_in(n, 1.0 - t),
            Ease::PowerInOut(n) => {
                if t < 0.5 {
                    ease_in(n, 2.0 * t) / 2.0
                } else {
                    1.0 - ease_in(n, 2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }
}

/// Where a tween lands relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Position {
    /// Appended at the current end.
    #[default]
    Sequential,
    /// Absolute time in seconds.
    At(f32),
    /// Relative to the current end; negative values overlap (`"-=1"`).
    Offset(f32),
    /// Same start as the previously added tween.
    WithPrevious,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenConfig {
    pub duration: f32,
    pub ease: Ease,
    /// Per-element delay across the target list.
    pub stagger: f32,
    pub delay: f32,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            ease: Ease::default(),
            stagger: 0.0,
            delay: 0.0,
        }
    }
}

impl TweenConfig {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            ..Self::default()
        }
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub targets: Vec<TargetId>,
    /// Explicit start state. Rendered as soon as the timeline is sampled,
    /// even before the tween starts.
    pub from: Option<PropSet>,
    pub to: PropSet,
    pub config: TweenConfig,
    /// Resolved position on the timeline (seconds), before `delay`.
    pub start: f32,
}

impl Tween {
    /// Start time of each target in order.
    pub fn element_starts(&self) -> Vec<f32> {
        stagger_offsets(self.targets.len(), self.config.stagger)
            .into_iter()
            .map(|o| self.start + self.config.delay + o)
            .collect()
    }

    pub fn end(&self) -> f32 {
        let n = self.targets.len().max(1);
        self.start
            + self.config.delay
            + self.config.stagger * (n - 1) as f32
            + self.config.duration.max(0.0)
    }
}

/// Start offsets `0, s, 2s, …` for `n` staggered elements.
pub fn stagger_offsets(n: usize, stagger: f32) -> Vec<f32> {
    (0..n).map(|i| i as f32 * stagger).collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    initial: Vec<(TargetId, PropSet)>,
    tweens: Vec<Tween>,
    end: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state applied before any tween.
    pub fn set(mut self, targets: &[TargetId], props: PropSet) -> Self {
        self.initial.extend(targets.iter().map(|&t| (t, props)));
        self
    }

    pub fn to(self, targets: &[TargetId], to: PropSet, config: TweenConfig, at: Position) -> Self {
        self.push(targets, None, to, config, at)
    }

    pub fn from_to(
        self,
        targets: &[TargetId],
        from: PropSet,
        to: PropSet,
        config: TweenConfig,
        at: Position,
    ) -> Self {
        self.push(targets, Some(from), to, config, at)
    }

    fn push(
        mut self,
        targets: &[TargetId],
        from: Option<PropSet>,
        to: PropSet,
        config: TweenConfig,
        at: Position,
    ) -> Self {
        let start = match at {
            Position::Sequential => self.end,
            Position::At(t) => t,
            Position::Offset(d) => self.end + d,
            Position::WithPrevious => self.tweens.last().map_or(0.0, |t| t.start),
        }
        .max(0.0);
        let tween = Tween {
            targets: targets.to_vec(),
            from,
            to,
            config,
            start,
        };
        self.end = self.end.max(tween.end());
        self.tweens.push(tween);
        self
    }

    #[inline]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.end
    }

    /// Every target the timeline writes, in first-use order.
    pub fn targets(&self) -> Vec<TargetId> {
        let mut out: Vec<TargetId> = Vec::new();
        let ids = self
            .initial
            .iter()
            .map(|(t, _)| *t)
            .chain(self.tweens.iter().flat_map(|tw| tw.targets.iter().copied()));
        for id in ids {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        out
    }

    /// Visual state of every target at time `t` (seconds), starting from
    /// the identity state.
    pub fn sample(&self, t: f32) -> Vec<(TargetId, VisualState)> {
        let mut states = FnvHashMap::default();
        self.sample_onto(t, &mut states);
        self.targets()
            .into_iter()
            .map(|id| {
                let state = states.get(&id).copied().unwrap_or_default();
                (id, state)
            })
            .collect()
    }

    /// Layer this timeline at time `t` over `states`. Targets missing from
    /// the map start at identity; `to` tweens start from whatever earlier
    /// layers left there.
    pub fn sample_onto(&self, t: f32, states: &mut FnvHashMap<TargetId, VisualState>) {
        for (id, props) in &self.initial {
            states.entry(*id).or_default().apply(props);
        }

        // Element-level segments, ordered by start then insertion.
        let mut segments: Vec<(f32, usize, TargetId)> = Vec::new();
        for (ti, tween) in self.tweens.iter().enumerate() {
            for (&id, st) in tween.targets.iter().zip(tween.element_starts()) {
                segments.push((st, ti, id));
            }
        }
        segments.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (st, ti, id) in segments {
            let tween = &self.tweens[ti];
            let state = states.entry(id).or_default();
            if t < st {
                if let Some(from) = &tween.from {
                    state.apply(from);
                }
                continue;
            }
            let duration = tween.config.duration;
            let p = if duration > 0.0 {
                tween.config.ease.apply((t - st) / duration)
            } else {
                1.0
            };
            let start_state = match &tween.from {
                Some(from) => state.with(from),
                None => *state,
            };
            *state = start_state.toward(&tween.to, p);
        }
    }

    /// Sample by normalized progress in [0, 1] (scroll scrubbing).
    pub fn sample_progress(&self, progress: f32) -> Vec<(TargetId, VisualState)> {
        self.sample(progress.clamp(0.0, 1.0) * self.end)
    }
}
