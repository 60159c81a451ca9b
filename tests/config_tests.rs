// Host-side tests for reading field parameters from canvas attributes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use field_core::{FieldParams, Variant, MAX_PARTICLES};

#[test]
fn missing_attributes_use_gather_preset() {
    let params = field_params_from_attrs(None, None);
    assert_eq!(params, FieldParams::preset(Variant::Gather));
}

#[test]
fn variant_attribute_selects_preset() {
    let params = field_params_from_attrs(Some("vortex"), None);
    assert_eq!(params.variant(), Variant::Vortex);
    assert_eq!(params, FieldParams::preset(Variant::Vortex));

    let params = field_params_from_attrs(Some(" Brush "), None);
    assert_eq!(params.variant(), Variant::Brush);
}

#[test]
fn unknown_variant_falls_back_to_default() {
    let params = field_params_from_attrs(Some("fireworks"), None);
    assert_eq!(params.variant(), Variant::default());
}

#[test]
fn particle_attribute_overrides_count() {
    let params = field_params_from_attrs(Some("brush"), Some("2500"));
    assert_eq!(params.particle_count, 2500);
    assert_eq!(params.variant(), Variant::Brush);
}

#[test]
fn unusable_particle_counts_are_ignored() {
    let preset = FieldParams::preset(Variant::Gather).particle_count;
    for raw in ["", "0", "-5", "lots", "1.5"] {
        let params = field_params_from_attrs(None, Some(raw));
        assert_eq!(params.particle_count, preset, "raw={raw:?}");
    }
}

#[test]
fn parse_particle_count_trims_whitespace() {
    assert_eq!(parse_particle_count(" 800 "), Some(800));
    assert_eq!(parse_particle_count("0"), None);
}

#[test]
fn particle_counts_above_the_limit_are_ignored() {
    assert_eq!(parse_particle_count(&MAX_PARTICLES.to_string()), Some(MAX_PARTICLES));
    assert_eq!(parse_particle_count(&(MAX_PARTICLES + 1).to_string()), None);
    assert_eq!(parse_particle_count(&usize::MAX.to_string()), None);

    let params = field_params_from_attrs(Some("vortex"), Some("999999999999"));
    assert_eq!(params.particle_count, FieldParams::preset(Variant::Vortex).particle_count);
    assert!(params.validate().is_ok());
}
