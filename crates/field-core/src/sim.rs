use crate::camera::Camera;
use crate::constants::{EPSILON, FRAME_TIME_STEP};
use crate::error::FieldError;
use crate::field::{ForceContext, ForceField};
use crate::forces::jitter;
use crate::params::FieldParams;
use crate::particles::Particles;
use crate::pointer::Pointer;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Owns everything one particle field needs between frames: the particle
/// buffers, the active force strategy, the orbiting camera and the latest
/// pointer state.
///
/// Event handlers call the `pointer_*` methods synchronously; the host loop
/// calls [`Simulator::frame`] once per animation frame and then uploads
/// [`Simulator::positions`].
pub struct Simulator {
    params: FieldParams,
    particles: Particles,
    field: ForceField,
    camera: Camera,
    pointer: Pointer,
    rng: StdRng,
    frame: u64,
}

impl Simulator {
    pub fn new(params: FieldParams) -> Result<Self, FieldError> {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// Reproducible simulator for tests and captures.
    pub fn with_seed(params: FieldParams, seed: u64) -> Result<Self, FieldError> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: FieldParams, mut rng: StdRng) -> Result<Self, FieldError> {
        params.validate()?;
        let particles = Particles::seed_sphere(
            params.particle_count,
            params.radius,
            params.radial_exponent,
            &mut rng,
        );
        Ok(Self::assemble(params, particles, rng))
    }

    /// Simulator over caller-provided particles (e.g. a single probe particle).
    pub fn with_particles(
        params: FieldParams,
        particles: Particles,
        seed: u64,
    ) -> Result<Self, FieldError> {
        params.validate()?;
        Ok(Self::assemble(params, particles, StdRng::seed_from_u64(seed)))
    }

    fn assemble(params: FieldParams, particles: Particles, rng: StdRng) -> Self {
        let cam = &params.camera;
        let mut camera = Camera {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: cam.fov_degrees.to_radians(),
            znear: cam.znear,
            zfar: cam.zfar,
        };
        camera.orbit(0.0, cam.orbit_radius, cam.orbit_height);
        let mut pointer = Pointer::default();
        pointer.recenter(Vec2::ZERO, &camera);
        let field = ForceField::new(&params.forces);
        log::info!(
            "[field] variant={} particles={} radius={:.0}",
            field.variant(),
            particles.len(),
            params.radius
        );
        Self {
            field,
            params,
            particles,
            camera,
            pointer,
            rng,
            frame: 0,
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Particles {
        &mut self.particles
    }

    /// Flat `xyz` position buffer for the renderer.
    pub fn positions(&self) -> &[f32] {
        self.particles.positions()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn field(&self) -> &ForceField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ForceField {
        &mut self.field
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Viewport changes only affect the camera aspect; safe to call any time.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    pub fn pointer_move(&mut self, ndc: Vec2) {
        self.pointer.move_to(ndc, &self.camera);
    }

    pub fn pointer_down(&mut self, now: f64) {
        self.pointer.held = true;
        self.field.pointer_down(&self.pointer, now);
    }

    /// Also used for pointer cancel.
    pub fn pointer_up(&mut self, now: f64) {
        self.pointer.held = false;
        self.field.pointer_up(now);
    }

    /// Advance one animation frame at wall-clock `now` (seconds).
    pub fn frame(&mut self, now: f64) {
        self.frame += 1;
        let t = self.frame as f32 * FRAME_TIME_STEP;
        let cam = &self.params.camera;
        self.camera
            .orbit(t * cam.orbit_speed, cam.orbit_radius, cam.orbit_height);

        self.pointer.smooth(self.params.cursor_lerp);
        self.field.advance(now, &self.pointer);
        self.step();
        self.field.after_step();
    }

    /// Integrate every particle once with the current field state.
    pub fn step(&mut self) {
        let ctx = ForceContext {
            cursor: self.pointer.smoothed,
            pointer_ndc: self.pointer.ndc,
            view_proj: self.camera.view_proj(),
        };
        let noise = self.params.noise;
        let damping = self.params.damping;
        let bound = self.params.bound_radius();
        let bound_damping = self.params.bound_damping;
        // an idle field contributes nothing and draws no randomness
        let forces_live = !self.field.is_idle();

        let (positions, velocities) = self.particles.buffers_mut();
        for (p3, v3) in positions
            .chunks_exact_mut(3)
            .zip(velocities.chunks_exact_mut(3))
        {
            let mut p = Vec3::from_slice(p3);
            let mut v = Vec3::from_slice(v3);

            if noise > 0.0 {
                v += jitter(&mut self.rng, noise);
            }
            if forces_live {
                v += self.field.accelerate(p, &ctx, &mut self.rng);
            }

            v *= damping;
            p += v;

            let len = p.length();
            if len > bound {
                p *= bound / (len + EPSILON);
                v *= bound_damping;
            }

            p.write_to_slice(p3);
            v.write_to_slice(v3);
        }
    }
}
