//! Gather effect: hold to pull nearby particles toward the cursor with a
//! swirl, release to kick them outward.
//!
//! Proximity is measured in screen space: each particle is projected to NDC
//! and compared against the pointer's NDC position.

use crate::constants::ACTIVE_THRESHOLD;
use crate::field::ForceContext;
use crate::forces::{influence, offset, swirl_xy};
use crate::tween::{Animated, Ease};
use glam::{Vec2, Vec3};
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct GatherParams {
    /// Screen-space influence radius in NDC units.
    pub influence_ndc_radius: f32,
    /// Peak pull toward the cursor.
    pub max_force: f32,
    pub swirl_base: f32,
    pub release_kick: f32,
    /// Per-particle kick multiplier is drawn from `[min, min + span)`.
    pub kick_min: f32,
    pub kick_span: f32,
}

impl Default for GatherParams {
    fn default() -> Self {
        Self {
            influence_ndc_radius: 0.22,
            max_force: 0.035,
            swirl_base: 0.018,
            release_kick: 0.11,
            kick_min: 0.6,
            kick_span: 0.6,
        }
    }
}

/// Influence scalars driven by pointer-down/up.
#[derive(Clone, Debug, Default)]
pub struct GatherInfluence {
    pub attract: Animated,
    pub swirl: Animated,
    pub release: Animated,
}

impl GatherInfluence {
    fn kill_all(&mut self) {
        self.attract.kill();
        self.swirl.kill();
        self.release.kill();
    }
}

#[derive(Clone, Debug)]
pub struct GatherField {
    pub params: GatherParams,
    pub influence: GatherInfluence,
}

impl GatherField {
    pub fn new(params: GatherParams) -> Self {
        Self {
            params,
            influence: GatherInfluence::default(),
        }
    }

    pub fn pointer_down(&mut self, now: f64) {
        let u = &mut self.influence;
        u.kill_all();
        u.attract.to(1.0, 0.25, Ease::Power2Out, now);
        u.swirl.to(1.0, 0.35, Ease::Power2Out, now);
        u.release.to(0.0, 0.2, Ease::Power2Out, now);
    }

    pub fn pointer_up(&mut self, now: f64) {
        let u = &mut self.influence;
        u.kill_all();
        u.attract.to(0.0, 0.35, Ease::Power2Out, now);
        u.swirl.to(0.0, 0.55, Ease::Power2Out, now);
        // release spikes immediately and falls off
        u.release.set(1.0);
        u.release.to(0.0, 0.9, Ease::Power3Out, now);
    }

    pub fn advance(&mut self, now: f64) {
        self.influence.attract.advance(now);
        self.influence.swirl.advance(now);
        self.influence.release.advance(now);
    }

    pub fn is_idle(&self) -> bool {
        let u = &self.influence;
        u.attract.value() <= ACTIVE_THRESHOLD
            && u.swirl.value() <= ACTIVE_THRESHOLD
            && u.release.value() <= ACTIVE_THRESHOLD
    }

    /// Screen-space proximity of `p` to the pointer.
    #[inline]
    pub fn screen_influence(&self, p: Vec3, ctx: &ForceContext) -> f32 {
        let ndc = ctx.view_proj.project_point3(p);
        let sd = Vec2::new(ndc.x, ndc.y).distance(ctx.pointer_ndc);
        influence(sd, self.params.influence_ndc_radius)
    }

    pub fn accelerate<R: Rng + ?Sized>(&self, p: Vec3, ctx: &ForceContext, rng: &mut R) -> Vec3 {
        let attract = self.influence.attract.value();
        let swirl = self.influence.swirl.value();
        let release = self.influence.release.value();
        let mut dv = Vec3::ZERO;

        if attract > ACTIVE_THRESHOLD {
            let infl = self.screen_influence(p, ctx);
            if infl > ACTIVE_THRESHOLD {
                let (d, dist) = offset(p, ctx.cursor);
                let i2 = infl * infl;
                dv += d / dist * (self.params.max_force * attract * i2);
                if swirl > ACTIVE_THRESHOLD {
                    dv += swirl_xy(d, dist) * (self.params.swirl_base * swirl * i2);
                }
            }
        }

        if release > ACTIVE_THRESHOLD {
            let (r, rd) = offset(ctx.cursor, p);
            let kick = self.params.release_kick
                * release
                * (self.params.kick_min + rng.gen::<f32>() * self.params.kick_span);
            dv += r / rd * kick;
        }

        dv
    }
}
