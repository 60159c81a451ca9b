//! Vortex effect: every pointer-down drops a short-lived vortex at the
//! cursor. Vortices ramp up, decay on their own, and are kept in a bounded set
//! that evicts the oldest entry on overflow.

use crate::constants::{ACTIVE_THRESHOLD, VORTEX_CAPACITY, VORTEX_REMOVE_EPSILON};
use crate::forces::{influence, jitter, offset, swirl_xy};
use crate::tween::{Animated, Ease};
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct VortexParams {
    pub capacity: usize,
    /// World-space influence radius.
    pub radius: f32,
    pub pull: f32,
    pub swirl: f32,
    pub turbulence: f32,
    pub strength_ramp: f64,
    pub swirl_ramp: f64,
    pub strength_decay: f64,
    pub swirl_decay: f64,
}

impl Default for VortexParams {
    fn default() -> Self {
        Self {
            capacity: VORTEX_CAPACITY,
            radius: 95.0,
            pull: 0.028,
            swirl: 0.05,
            turbulence: 0.012,
            strength_ramp: 0.3,
            swirl_ramp: 0.45,
            strength_decay: 1.6,
            swirl_decay: 2.2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Vortex {
    pub position: Vec3,
    pub strength: Animated,
    pub swirl: Animated,
    pub created_at: f64,
}

impl Vortex {
    fn spawn(position: Vec3, now: f64, params: &VortexParams) -> Self {
        let mut strength = Animated::new(0.0);
        strength.to(1.0, params.strength_ramp, Ease::Power2Out, now);
        strength.then(0.0, params.strength_decay, Ease::Power2InOut);
        let mut swirl = Animated::new(0.0);
        swirl.to(1.0, params.swirl_ramp, Ease::Power2Out, now);
        swirl.then(0.0, params.swirl_decay, Ease::Power2InOut);
        Self {
            position,
            strength,
            swirl,
            created_at: now,
        }
    }

    /// Both scalars have settled at (or below) the removal threshold.
    pub fn is_spent(&self) -> bool {
        self.strength.value() <= VORTEX_REMOVE_EPSILON
            && self.swirl.value() <= VORTEX_REMOVE_EPSILON
            && !self.strength.is_rising()
            && !self.swirl.is_rising()
    }
}

/// Active vortices ordered by creation time, oldest first.
#[derive(Clone, Debug)]
pub struct VortexSet {
    pub params: VortexParams,
    vortices: SmallVec<[Vortex; VORTEX_CAPACITY + 1]>,
}

impl VortexSet {
    pub fn new(params: VortexParams) -> Self {
        Self {
            params,
            vortices: SmallVec::new(),
        }
    }

    /// Register a vortex at `position`. Returns the evicted vortex when the set
    /// was already at capacity.
    pub fn spawn(&mut self, position: Vec3, now: f64) -> Option<Vortex> {
        let evicted = if self.vortices.len() >= self.params.capacity.max(1) {
            let old = self.vortices.remove(0);
            log::debug!(
                "[vortex] evicting oldest (created {:.2}s) for new vortex",
                old.created_at
            );
            Some(old)
        } else {
            None
        };
        self.vortices.push(Vortex::spawn(position, now, &self.params));
        log::debug!(
            "[vortex] spawn at ({:.1},{:.1},{:.1}) active={}",
            position.x,
            position.y,
            position.z,
            self.vortices.len()
        );
        evicted
    }

    pub fn advance(&mut self, now: f64) {
        for v in self.iter_mut() {
            v.strength.advance(now);
            v.swirl.advance(now);
        }
    }

    /// Drop spent vortices; returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.vortices.len();
        self.vortices.retain(|v| !v.is_spent());
        before - self.vortices.len()
    }

    pub fn len(&self) -> usize {
        self.vortices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vortices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vortex> {
        self.vortices.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vortex> {
        self.vortices.iter_mut()
    }

    pub fn accelerate<R: Rng + ?Sized>(&self, p: Vec3, rng: &mut R) -> Vec3 {
        let prm = &self.params;
        let mut dv = Vec3::ZERO;
        for v in &self.vortices {
            let strength = v.strength.value();
            let swirl = v.swirl.value();
            if strength <= ACTIVE_THRESHOLD && swirl <= ACTIVE_THRESHOLD {
                continue;
            }
            let (d, dist) = offset(p, v.position);
            let infl = influence(dist, prm.radius);
            if infl <= 0.0 {
                continue;
            }
            let i2 = infl * infl;
            dv += d / dist * (prm.pull * strength * i2);
            dv += swirl_xy(d, dist) * (prm.swirl * swirl * i2);
            if prm.turbulence > 0.0 {
                dv += jitter(rng, prm.turbulence * strength.max(swirl) * i2);
            }
        }
        dv
    }
}
