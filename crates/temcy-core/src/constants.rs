/// Motion and layout tuning constants shared by the web frontend and tests.
///
/// These express intended behavior (smoothing factors, thresholds, mesh
/// dimensions) and keep magic numbers out of the animation code.

// Smooth scroll
pub const SCROLL_LERP: f32 = 0.1; // fraction of remaining distance per 60 Hz frame
pub const SCROLL_REFERENCE_FPS: f32 = 60.0;
pub const SCROLL_SETTLE_PX: f32 = 0.5; // snap to target once closer than this
pub const SCROLL_MAX_DT_SEC: f32 = 0.1; // clamp long frames (tab switches)

// Scroll-linked scrub smoothing (seconds of lag)
pub const HERO_SCRUB_SMOOTHING_SEC: f32 = 1.0;

// Terrain plane
pub const TERRAIN_SIZE: f32 = 50.0;
pub const TERRAIN_SEGMENTS: usize = 40;
pub const TERRAIN_MAX_HEIGHT: f32 = 2.0; // heights drawn from [0, max)
pub const TERRAIN_POSITION: [f32; 3] = [0.0, -2.0, -2.0];

// Terrain motion
pub const TERRAIN_SPIN_RATE: f32 = 0.02; // rad per second around local Z
pub const TERRAIN_TILT_RANGE: f32 = 0.05; // max pointer tilt (rad)
pub const TERRAIN_TILT_LERP: f32 = 0.1; // per-frame pointer smoothing

// Terrain material and scene
pub const TERRAIN_COLOR: [f32; 3] = [0.902, 0.0, 0.137]; // #E60023
pub const TERRAIN_OPACITY: f32 = 0.3;
pub const FOG_COLOR: [f32; 3] = [0.0196, 0.0196, 0.0196]; // #050505
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 15.0;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 5.0, 10.0];
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Leaderboard status thresholds (km)
pub const STATUS_IDLE_BELOW_KM: f32 = 10.0;
pub const STATUS_FULL_GAS_ABOVE_KM: f32 = 50.0;

// Overlays
pub const OVERLAY_FADE_SEC: f32 = 0.3;
