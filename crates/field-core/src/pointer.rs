use crate::camera::{Camera, Plane};
use glam::{Vec2, Vec3};

/// Latest pointer input, written by event handlers and read once per frame.
///
/// Moves between frames overwrite each other; only the most recent position
/// is ever seen by the update.
#[derive(Clone, Debug)]
pub struct Pointer {
    pub ndc: Vec2,
    /// Cursor on the reference plane under the pointer.
    pub target: Vec3,
    /// Cursor eased toward `target` every frame.
    pub smoothed: Vec3,
    pub held: bool,
    pub plane: Plane,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            ndc: Vec2::ZERO,
            target: Vec3::ZERO,
            smoothed: Vec3::ZERO,
            held: false,
            plane: Plane::XY,
        }
    }
}

impl Pointer {
    /// Record a new NDC position and re-derive the world target. A ray that
    /// misses the plane leaves the previous target in place.
    pub fn move_to(&mut self, ndc: Vec2, camera: &Camera) {
        self.ndc = ndc;
        if let Some(hit) = camera.unproject_to_plane(ndc, &self.plane) {
            self.target = hit;
        }
    }

    /// Snap both cursors to the point under `ndc`.
    pub fn recenter(&mut self, ndc: Vec2, camera: &Camera) {
        self.move_to(ndc, camera);
        self.smoothed = self.target;
    }

    #[inline]
    pub fn smooth(&mut self, factor: f32) {
        self.smoothed = self.smoothed.lerp(self.target, factor);
    }
}
