//! Force-composition strategies. All three effects share the same
//! integration and containment in [`crate::Simulator`]; they differ only in
//! how pointer input becomes per-particle velocity changes.

use crate::brush::Brush;
use crate::error::FieldError;
use crate::gather::GatherField;
use crate::params::ForceParams;
use crate::pointer::Pointer;
use crate::vortex::VortexSet;
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Gather,
    Vortex,
    Brush,
}

impl FromStr for Variant {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gather" | "attract" => Ok(Variant::Gather),
            "vortex" | "vortices" => Ok(Variant::Vortex),
            "brush" => Ok(Variant::Brush),
            other => Err(FieldError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Gather => "gather",
            Variant::Vortex => "vortex",
            Variant::Brush => "brush",
        })
    }
}

/// Per-frame inputs shared by every particle.
#[derive(Clone, Copy, Debug)]
pub struct ForceContext {
    /// Smoothed cursor in world space.
    pub cursor: Vec3,
    pub pointer_ndc: Vec2,
    pub view_proj: Mat4,
}

#[derive(Clone, Debug)]
pub enum ForceField {
    Gather(GatherField),
    Vortex(VortexSet),
    Brush(Brush),
}

impl ForceField {
    pub fn new(params: &ForceParams) -> Self {
        match params {
            ForceParams::Gather(p) => ForceField::Gather(GatherField::new(p.clone())),
            ForceParams::Vortex(p) => ForceField::Vortex(VortexSet::new(p.clone())),
            ForceParams::Brush(p) => ForceField::Brush(Brush::new(p.clone())),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            ForceField::Gather(_) => Variant::Gather,
            ForceField::Vortex(_) => Variant::Vortex,
            ForceField::Brush(_) => Variant::Brush,
        }
    }

    pub fn pointer_down(&mut self, pointer: &Pointer, now: f64) {
        match self {
            ForceField::Gather(g) => g.pointer_down(now),
            ForceField::Vortex(set) => {
                set.spawn(pointer.target, now);
            }
            ForceField::Brush(b) => b.press(pointer.smoothed, now),
        }
    }

    pub fn pointer_up(&mut self, now: f64) {
        match self {
            ForceField::Gather(g) => g.pointer_up(now),
            ForceField::Vortex(_) => {}
            ForceField::Brush(b) => b.lift(now),
        }
    }

    /// Step influence animations to `now`.
    pub fn advance(&mut self, now: f64, pointer: &Pointer) {
        match self {
            ForceField::Gather(g) => g.advance(now),
            ForceField::Vortex(set) => set.advance(now),
            ForceField::Brush(b) => b.advance(now, pointer.smoothed),
        }
    }

    /// Velocity change contributed to a particle at `p` this frame.
    #[inline]
    pub fn accelerate<R: Rng + ?Sized>(&self, p: Vec3, ctx: &ForceContext, rng: &mut R) -> Vec3 {
        match self {
            ForceField::Gather(g) => g.accelerate(p, ctx, rng),
            ForceField::Vortex(set) => set.accelerate(p, rng),
            ForceField::Brush(b) => b.accelerate(p, rng),
        }
    }

    /// Housekeeping once forces have been applied.
    pub fn after_step(&mut self) {
        if let ForceField::Vortex(set) = self {
            set.prune();
        }
    }

    pub fn is_idle(&self) -> bool {
        match self {
            ForceField::Gather(g) => g.is_idle(),
            ForceField::Vortex(set) => set.is_empty(),
            ForceField::Brush(b) => b.is_idle(),
        }
    }
}
