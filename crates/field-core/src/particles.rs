use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Particle cloud stored as two parallel flat buffers of length `3 * len`.
///
/// Particle `i` occupies offsets `[3i, 3i + 1, 3i + 2]` in both buffers. The
/// position buffer is uploaded to the GPU as-is.
#[derive(Clone, Debug, Default)]
pub struct Particles {
    positions: Vec<f32>,
    velocities: Vec<f32>,
}

impl Particles {
    /// Fill a sphere of `radius` with `count` particles at rest.
    ///
    /// Radii follow `random()^exponent * radius`; an exponent below 1 biases
    /// the cloud toward its shell.
    pub fn seed_sphere<R: Rng + ?Sized>(
        count: usize,
        radius: f32,
        exponent: f32,
        rng: &mut R,
    ) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count {
            let r = rng.gen::<f32>().powf(exponent) * radius;
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            positions.push(r * phi.sin() * theta.cos());
            positions.push(r * phi.sin() * theta.sin());
            positions.push(r * phi.cos());
        }
        log::debug!("[particles] seeded {} particles, radius {:.1}", count, radius);
        Self {
            velocities: vec![0.0; positions.len()],
            positions,
        }
    }

    /// Build from explicit positions, all at rest.
    pub fn from_positions(points: &[Vec3]) -> Self {
        let positions: Vec<f32> = points.iter().flat_map(|p| p.to_array()).collect();
        Self {
            velocities: vec![0.0; positions.len()],
            positions,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.velocities[i * 3..i * 3 + 3])
    }

    pub fn set_position(&mut self, i: usize, p: Vec3) {
        p.write_to_slice(&mut self.positions[i * 3..i * 3 + 3]);
    }

    pub fn set_velocity(&mut self, i: usize, v: Vec3) {
        v.write_to_slice(&mut self.velocities[i * 3..i * 3 + 3]);
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Both buffers at once, for in-place integration.
    pub(crate) fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.positions, &mut self.velocities)
    }

    pub fn max_speed(&self) -> f32 {
        self.velocities
            .chunks_exact(3)
            .map(|v| Vec3::from_slice(v).length())
            .fold(0.0, f32::max)
    }

    pub fn max_distance(&self) -> f32 {
        self.positions
            .chunks_exact(3)
            .map(|p| Vec3::from_slice(p).length())
            .fold(0.0, f32::max)
    }
}
