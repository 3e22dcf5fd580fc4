pub mod bridge;
pub mod camera;
pub mod choreo;
pub mod constants;
pub mod content;
pub mod frame;
pub mod lightbox;
pub mod scroll;
pub mod terrain;
pub mod timeline;

pub static TERRAIN_WGSL: &str = include_str!("../shaders/terrain.wgsl");

pub use bridge::{
    Edge, ElementBounds, Marker, MarkerParseError, OwnerId, ScrollTriggerBridge, TriggerEvent,
    TriggerId, TriggerSpec,
};
pub use camera::Camera;
pub use choreo::{
    mount, Choreography, MountedSection, Playback, SequenceTrigger, StyleWrite, StyleWrites,
};
pub use frame::{FramePhase, FrameScheduler, FrameTick, TaskHandle};
pub use lightbox::{Click, Lightbox, LightboxState, LockChange, ScrollLock, Toggle, Transition};
pub use scroll::{ScrollOptions, ScrollState, ScrollToOptions, SmoothScroll};
pub use terrain::{Orientation, TerrainAnimator, TerrainMesh, TerrainPhase, TerrainUniforms};
pub use timeline::{Ease, Position, PropSet, TargetId, Timeline, TweenConfig, VisualState};
