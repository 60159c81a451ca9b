//! Perspective camera with the projection helpers the field needs.
//!
//! The gather effect measures influence in screen space, so particles are
//! projected to normalized device coordinates; the pointer goes the other way,
//! unprojected through the camera onto a fixed reference plane.

use crate::constants::EPSILON;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix (depth in [0, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Place the eye on a horizontal circle around the origin and look at it.
    pub fn orbit(&mut self, angle: f32, radius: f32, height: f32) {
        self.eye = Vec3::new(angle.sin() * radius, height, angle.cos() * radius);
        self.target = Vec3::ZERO;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World point to normalized device coordinates.
    #[inline]
    pub fn project(&self, p: Vec3) -> Vec3 {
        self.view_proj().project_point3(p)
    }

    /// World-space ray through `ndc`, returned as `(origin, direction)`.
    pub fn ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        (near, (far - near).normalize_or_zero())
    }

    /// Intersect the ray through `ndc` with `plane`.
    pub fn unproject_to_plane(&self, ndc: Vec2, plane: &Plane) -> Option<Vec3> {
        let (ro, rd) = self.ray(ndc);
        plane.intersect_ray(ro, rd)
    }
}

/// Plane `normal . p + constant = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// The z = 0 plane the cursor lives on.
    pub const XY: Plane = Plane {
        normal: Vec3::Z,
        constant: 0.0,
    };

    pub fn intersect_ray(&self, origin: Vec3, dir: Vec3) -> Option<Vec3> {
        let denom = self.normal.dot(dir);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -(self.normal.dot(origin) + self.constant) / denom;
        (t >= 0.0).then(|| origin + dir * t)
    }
}
