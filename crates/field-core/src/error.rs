use thiserror::Error;

/// Configuration errors raised when building a simulator.
///
/// The per-frame update itself never fails; everything here is caught up
/// front by [`crate::FieldParams::validate`] or while parsing overrides.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("particle count must be at least 1")]
    ZeroParticles,
    #[error("particle count {0} exceeds the maximum of {}", crate::constants::MAX_PARTICLES)]
    TooManyParticles(usize),
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("bound factor must be finite and >= 1, got {0}")]
    InvalidBoundFactor(f32),
    #[error("vortex capacity must be at least 1")]
    ZeroVortexCapacity,
    #[error("unknown field variant '{0}' (expected gather, vortex or brush)")]
    UnknownVariant(String),
}
