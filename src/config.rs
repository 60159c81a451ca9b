use field_core::{FieldParams, Variant, MAX_PARTICLES};

/// Build simulator params from the canvas data attributes.
///
/// Unknown variants and unusable particle counts are logged and ignored so a
/// typo on the page never prevents the background from starting.
pub fn field_params_from_attrs(variant: Option<&str>, particles: Option<&str>) -> FieldParams {
    let variant = match variant.map(str::parse::<Variant>) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::warn!("[config] {}; using {}", e, Variant::default());
            Variant::default()
        }
        None => Variant::default(),
    };
    let mut params = FieldParams::preset(variant);
    if let Some(raw) = particles {
        match parse_particle_count(raw) {
            Some(n) => params.particle_count = n,
            None => log::warn!("[config] ignoring particle count '{}'", raw),
        }
    }
    params
}

/// Parse a particle count override, rejecting blanks, zero and anything
/// above [`MAX_PARTICLES`].
#[inline]
pub fn parse_particle_count(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0 && n <= MAX_PARTICLES)
}
