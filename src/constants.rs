/// Page integration and rendering constants for the web frontend.
///
/// Simulation tuning lives in `field_core::constants`; these only cover how
/// the field is found on the page and drawn.
// DOM
pub const CANVAS_ID: &str = "bg";
pub const VARIANT_ATTR: &str = "data-variant"; // gather | vortex | brush
pub const PARTICLES_ATTR: &str = "data-particles"; // particle count override

// Pixel ratio caps (keep fill rate sane on large canvases)
pub const SMALL_CANVAS_AREA: f64 = 900.0 * 300.0;
pub const SMALL_CANVAS_MAX_DPR: f64 = 1.0;
pub const LARGE_CANVAS_MAX_DPR: f64 = 1.5;

// Point sprites
pub const POINT_SIZE: f32 = 1.15; // world units, attenuated with depth
pub const POINT_OPACITY: f32 = 0.6;
pub const POINT_DISC_RADIUS: f32 = 0.75; // disc radius within the sprite quad (18/24)
pub const POINT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
