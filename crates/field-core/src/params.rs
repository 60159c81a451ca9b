use crate::brush::BrushParams;
use crate::constants::*;
use crate::error::FieldError;
use crate::field::Variant;
use crate::gather::GatherParams;
use crate::vortex::VortexParams;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub orbit_radius: f32,
    pub orbit_height: f32,
    /// Orbit angle per unit of frame clock.
    pub orbit_speed: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            orbit_radius: CAMERA_ORBIT_RADIUS,
            orbit_height: CAMERA_ORBIT_HEIGHT,
            orbit_speed: CAMERA_ORBIT_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ForceParams {
    Gather(GatherParams),
    Vortex(VortexParams),
    Brush(BrushParams),
}

impl ForceParams {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Gather => ForceParams::Gather(GatherParams::default()),
            Variant::Vortex => ForceParams::Vortex(VortexParams::default()),
            Variant::Brush => ForceParams::Brush(BrushParams::default()),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            ForceParams::Gather(_) => Variant::Gather,
            ForceParams::Vortex(_) => Variant::Vortex,
            ForceParams::Brush(_) => Variant::Brush,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    /// Seed sphere radius.
    pub radius: f32,
    pub radial_exponent: f32,
    pub damping: f32,
    pub noise: f32,
    pub cursor_lerp: f32,
    pub bound_factor: f32,
    pub bound_damping: f32,
    pub camera: CameraParams,
    pub forces: ForceParams,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::preset(Variant::Gather)
    }
}

impl FieldParams {
    pub fn preset(variant: Variant) -> Self {
        let particle_count = match variant {
            Variant::Gather => GATHER_PARTICLES,
            Variant::Vortex => VORTEX_PARTICLES,
            Variant::Brush => BRUSH_PARTICLES,
        };
        Self {
            particle_count,
            radius: DEFAULT_RADIUS,
            radial_exponent: RADIAL_EXPONENT,
            damping: DAMPING,
            noise: NOISE,
            cursor_lerp: CURSOR_LERP,
            bound_factor: BOUND_FACTOR,
            bound_damping: BOUND_DAMPING,
            camera: CameraParams::default(),
            forces: ForceParams::for_variant(variant),
        }
    }

    pub fn variant(&self) -> Variant {
        self.forces.variant()
    }

    /// Radius of the containment sphere.
    #[inline]
    pub fn bound_radius(&self) -> f32 {
        self.radius * self.bound_factor
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(FieldError::ZeroParticles);
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(FieldError::TooManyParticles(self.particle_count));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(FieldError::InvalidRadius(self.radius));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(FieldError::InvalidDamping(self.damping));
        }
        if !(self.bound_factor.is_finite() && self.bound_factor >= 1.0) {
            return Err(FieldError::InvalidBoundFactor(self.bound_factor));
        }
        if let ForceParams::Vortex(v) = &self.forces {
            if v.capacity == 0 {
                return Err(FieldError::ZeroVortexCapacity);
            }
        }
        Ok(())
    }
}
