//! Brush effect: click and drag to paint through the cloud. The brush follows
//! the cursor while held and carries a stroke direction that drags particles
//! along behind it.

use crate::constants::ACTIVE_THRESHOLD;
use crate::forces::{influence, jitter, offset, swirl_xy};
use crate::tween::{Animated, Ease};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct BrushParams {
    /// World-space influence radius.
    pub radius: f32,
    pub pull: f32,
    pub swirl: f32,
    /// Push along the stroke direction.
    pub flow: f32,
    pub turbulence: f32,
    /// Blend factor toward the latest movement direction (0..1).
    pub direction_smoothing: f32,
    pub attack: f64,
    pub release: f64,
}

impl Default for BrushParams {
    fn default() -> Self {
        Self {
            radius: 70.0,
            pull: 0.05,
            swirl: 0.02,
            flow: 0.06,
            turbulence: 0.01,
            direction_smoothing: 0.25,
            attack: 0.2,
            release: 0.6,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Brush {
    pub params: BrushParams,
    pub position: Vec3,
    /// Unit stroke direction.
    pub direction: Vec3,
    pub strength: Animated,
    pub held: bool,
}

impl Brush {
    pub fn new(params: BrushParams) -> Self {
        Self {
            params,
            position: Vec3::ZERO,
            direction: Vec3::X,
            strength: Animated::new(0.0),
            held: false,
        }
    }

    pub fn press(&mut self, at: Vec3, now: f64) {
        self.held = true;
        self.position = at;
        self.strength.to(1.0, self.params.attack, Ease::Power2Out, now);
    }

    pub fn lift(&mut self, now: f64) {
        self.held = false;
        self.strength.to(0.0, self.params.release, Ease::Power2Out, now);
    }

    /// Move the brush to `to`, steering the stroke direction toward the motion.
    pub fn stroke_to(&mut self, to: Vec3) {
        let delta = to - self.position;
        if let Some(heading) = delta.try_normalize() {
            let k = self.params.direction_smoothing.clamp(0.0, 1.0);
            self.direction = self
                .direction
                .lerp(heading, k)
                .try_normalize()
                .unwrap_or(heading);
        }
        self.position = to;
    }

    pub fn advance(&mut self, now: f64, cursor: Vec3) {
        if self.held {
            self.stroke_to(cursor);
        }
        self.strength.advance(now);
    }

    pub fn is_idle(&self) -> bool {
        self.strength.value() <= ACTIVE_THRESHOLD
    }

    pub fn accelerate<R: Rng + ?Sized>(&self, p: Vec3, rng: &mut R) -> Vec3 {
        let strength = self.strength.value();
        if strength <= ACTIVE_THRESHOLD {
            return Vec3::ZERO;
        }
        let prm = &self.params;
        let (d, dist) = offset(p, self.position);
        let infl = influence(dist, prm.radius);
        if infl <= 0.0 {
            return Vec3::ZERO;
        }
        let w = strength * infl * infl;
        let mut dv = d / dist * (prm.pull * w);
        dv += swirl_xy(d, dist) * (prm.swirl * w);
        dv += self.direction * (prm.flow * w);
        if prm.turbulence > 0.0 {
            dv += jitter(rng, prm.turbulence * w);
        }
        dv
    }
}
