// Shared simulation tuning constants used by the core and the web frontend.

// Numeric guards
pub const EPSILON: f32 = 1e-6; // added to every distance denominator
pub const ACTIVE_THRESHOLD: f32 = 0.001; // influence scalars below this are treated as off
pub const VORTEX_REMOVE_EPSILON: f32 = 0.0005; // strength/swirl at or below this ends a vortex

// Seeding
pub const DEFAULT_RADIUS: f32 = 180.0;
pub const RADIAL_EXPONENT: f32 = 0.75; // r = random()^p * radius

// Integration
pub const DAMPING: f32 = 0.985; // per-frame velocity multiplier
pub const NOISE: f32 = 0.00055; // idle jitter amplitude
pub const CURSOR_LERP: f32 = 0.08; // smoothed cursor follow factor
pub const BOUND_FACTOR: f32 = 1.25; // containment sphere = radius * factor
pub const BOUND_DAMPING: f32 = 0.4; // velocity multiplier on containment

// Camera orbit
pub const FRAME_TIME_STEP: f32 = 0.01; // orbit clock advance per frame
pub const CAMERA_ORBIT_RADIUS: f32 = 260.0;
pub const CAMERA_ORBIT_HEIGHT: f32 = 140.0;
pub const CAMERA_ORBIT_SPEED: f32 = 0.08;
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 3000.0;

// Particle counts per effect
pub const GATHER_PARTICLES: usize = 12_000;
pub const VORTEX_PARTICLES: usize = 14_000;
pub const BRUSH_PARTICLES: usize = 16_000;
pub const MAX_PARTICLES: usize = 200_000; // instance buffer stays well under wgpu limits

// Vortex set
pub const VORTEX_CAPACITY: usize = 7;
