//! Per-section choreography.
//!
//! A [`Choreography`] lists timelines and what starts them: mount, crossing a
//! scroll marker, or scroll scrubbing between two markers. [`mount`] turns it
//! into a [`MountedSection`] that owns its bridge registrations; `unmount`
//! consumes the section, so registrations are released exactly once and the
//! caller gets the writes that restore every touched element.

use crate::bridge::{
    ElementBounds, Marker, OwnerId, ScrollTriggerBridge, TriggerEvent, TriggerId, TriggerSpec,
};
use crate::timeline::{TargetId, Timeline, VisualState};
use fnv::FnvHashMap;
use smallvec::SmallVec;

// Scrub progress closer than this to its target snaps.
const SCRUB_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequenceTrigger {
    /// Plays as soon as the section mounts.
    Immediate { delay: f32 },
    /// Plays once when `target` reaches `start`.
    OnEnter { target: TargetId, start: Marker },
    /// Progress follows scroll between `start` and `end`. `smoothing` is the
    /// catch-up time constant in seconds, 0 locks to scroll.
    Scrub {
        target: TargetId,
        start: Marker,
        end: Marker,
        smoothing: f32,
    },
}

impl SequenceTrigger {
    fn target(&self) -> Option<TargetId> {
        match *self {
            SequenceTrigger::Immediate { .. } => None,
            SequenceTrigger::OnEnter { target, .. } | SequenceTrigger::Scrub { target, .. } => {
                Some(target)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub trigger: SequenceTrigger,
    pub timeline: Timeline,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choreography {
    pub name: &'static str,
    pub sequences: Vec<Sequence>,
}

impl Choreography {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            sequences: Vec::new(),
        }
    }

    pub fn sequence(mut self, trigger: SequenceTrigger, timeline: Timeline) -> Self {
        self.sequences.push(Sequence { trigger, timeline });
        self
    }

    /// Every element any sequence writes, in first-use order.
    pub fn targets(&self) -> Vec<TargetId> {
        let mut out = Vec::new();
        for id in self.sequences.iter().flat_map(|s| s.timeline.targets()) {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        out
    }
}

/// A write the host applies to the element bound to a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleWrite {
    Set(TargetId, VisualState),
    /// Remove inline transform/opacity, restoring the stylesheet values.
    Clear(TargetId),
}

/// Writes produced by one `advance`; sections rarely touch more than a
/// handful of elements per frame.
pub type StyleWrites = SmallVec<[StyleWrite; 8]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    /// Waiting for its trigger.
    Armed,
    Playing { t: f32 },
    Finished,
    Scrub { shown: f32, target: f32 },
}

struct MountedSequence {
    sequence: Sequence,
    trigger: Option<TriggerId>,
    playback: Playback,
}

impl MountedSequence {
    fn sample_time(&self) -> f32 {
        let tl = &self.sequence.timeline;
        match self.playback {
            Playback::Armed => 0.0,
            Playback::Playing { t } => t.clamp(0.0, tl.duration()),
            Playback::Finished => tl.duration(),
            Playback::Scrub { shown, .. } => shown.clamp(0.0, 1.0) * tl.duration(),
        }
    }

    /// Advance by `dt`; returns true when the sampled output may have changed.
    fn step(&mut self, dt: f32, events: &[TriggerEvent]) -> bool {
        let event = self
            .trigger
            .and_then(|id| events.iter().find(|e| e.id == id));
        match (self.playback, self.sequence.trigger) {
            (Playback::Armed, _) => match event {
                Some(e) if e.entered => {
                    self.playback = Playback::Playing { t: 0.0 };
                    true
                }
                _ => false,
            },
            (Playback::Playing { t }, _) => {
                let t = t + dt;
                self.playback = if t >= self.sequence.timeline.duration() {
                    Playback::Finished
                } else {
                    Playback::Playing { t }
                };
                true
            }
            (Playback::Finished, _) => false,
            (Playback::Scrub { shown, target }, SequenceTrigger::Scrub { smoothing, .. }) => {
                let target = event.map_or(target, |e| e.progress);
                let diff = target - shown;
                let next = if diff.abs() <= SCRUB_EPSILON || smoothing <= 0.0 {
                    target
                } else {
                    shown + diff * (1.0 - (-dt.max(0.0) / smoothing).exp())
                };
                self.playback = Playback::Scrub {
                    shown: next,
                    target,
                };
                next != shown
            }
            (Playback::Scrub { .. }, _) => false,
        }
    }
}

pub struct MountedSection {
    owner: OwnerId,
    name: &'static str,
    sequences: Vec<MountedSequence>,
    targets: Vec<TargetId>,
    last: FnvHashMap<TargetId, VisualState>,
    needs_render: bool,
}

/// Interpret `choreography` for one section instance.
///
/// `measure` returns document-space bounds for a target, or `None` when the
/// element is missing/detached; such triggers are skipped and their
/// timelines render their end state so content stays visible.
pub fn mount(
    owner: OwnerId,
    choreography: Choreography,
    measure: impl Fn(TargetId) -> Option<ElementBounds>,
    bridge: &mut ScrollTriggerBridge,
) -> MountedSection {
    let targets = choreography.targets();
    let name = choreography.name;
    let sequences = choreography
        .sequences
        .into_iter()
        .map(|sequence| {
            let spec = match sequence.trigger {
                SequenceTrigger::Immediate { .. } => None,
                SequenceTrigger::OnEnter { start, .. } => Some(TriggerSpec {
                    owner,
                    start,
                    end: None,
                }),
                SequenceTrigger::Scrub { start, end, .. } => Some(TriggerSpec {
                    owner,
                    start,
                    end: Some(end),
                }),
            };
            let trigger = match (spec, sequence.trigger.target()) {
                (Some(spec), Some(target)) => bridge.register(spec, measure(target)),
                _ => None,
            };
            let playback = match sequence.trigger {
                SequenceTrigger::Immediate { delay } => Playback::Playing { t: -delay.max(0.0) },
                // Reveal without animating; a dead scrub simply stays at 0.
                SequenceTrigger::OnEnter { .. } if trigger.is_none() => Playback::Finished,
                SequenceTrigger::OnEnter { .. } => Playback::Armed,
                SequenceTrigger::Scrub { .. } => Playback::Scrub {
                    shown: 0.0,
                    target: 0.0,
                },
            };
            MountedSequence {
                sequence,
                trigger,
                playback,
            }
        })
        .collect();
    log::info!("[choreo] mounted '{}' (owner {})", name, owner);
    MountedSection {
        owner,
        name,
        sequences,
        targets,
        last: FnvHashMap::default(),
        needs_render: true,
    }
}

impl MountedSection {
    #[inline]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    pub fn playback(&self) -> Vec<Playback> {
        self.sequences.iter().map(|s| s.playback).collect()
    }

    /// True once nothing can change without a new trigger event.
    pub fn is_settled(&self) -> bool {
        !self.needs_render
            && self.sequences.iter().all(|s| match s.playback {
                Playback::Playing { .. } => false,
                Playback::Scrub { shown, target } => shown == target,
                _ => true,
            })
    }

    /// Re-measure trigger elements after a layout change. `measure` reports
    /// rendered bounds; the state this section last wrote is taken back out
    /// so markers stay on the untransformed layout box.
    pub fn refresh(
        &self,
        measure: impl Fn(TargetId) -> Option<ElementBounds>,
        bridge: &mut ScrollTriggerBridge,
    ) {
        for s in &self.sequences {
            if let (Some(id), Some(target)) = (s.trigger, s.sequence.trigger.target()) {
                if let Some(bounds) = measure(target) {
                    let bounds = match self.last.get(&target) {
                        Some(state) => bounds.without_transform(state.y, state.scale),
                        None => bounds,
                    };
                    bridge.refresh(id, bounds);
                }
            }
        }
    }

    /// Advance clocks and scrub positions, returning writes for elements whose
    /// composed state changed. Events for other owners are ignored.
    pub fn advance(&mut self, dt_sec: f32, events: &[TriggerEvent]) -> StyleWrites {
        let dt = dt_sec.max(0.0);
        let mut changed = std::mem::take(&mut self.needs_render);
        for s in self.sequences.iter_mut() {
            changed |= s.step(dt, events);
        }
        if !changed {
            return StyleWrites::new();
        }

        // Later sequences layer over earlier ones per element.
        let mut states: FnvHashMap<TargetId, VisualState> = FnvHashMap::default();
        for s in &self.sequences {
            s.sequence.timeline.sample_onto(s.sample_time(), &mut states);
        }

        let mut writes = StyleWrites::new();
        for id in &self.targets {
            let state = states.get(id).copied().unwrap_or_default();
            if self.last.get(id) != Some(&state) {
                self.last.insert(*id, state);
                writes.push(StyleWrite::Set(*id, state));
            }
        }
        writes
    }

    /// Release bridge registrations and return the writes that restore every
    /// element this section touched.
    pub fn unmount(self, bridge: &mut ScrollTriggerBridge) -> Vec<StyleWrite> {
        let released = bridge.release_owner(self.owner);
        log::info!(
            "[choreo] unmounted '{}' (owner {}, {} trigger(s) released)",
            self.name,
            self.owner,
            released
        );
        self.targets.iter().map(|&id| StyleWrite::Clear(id)).collect()
    }
}
