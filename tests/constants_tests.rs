// Host-side tests for the web front-end's constants and canvas overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod overrides {
    include!("../src/overrides.rs");
}

use constants::*;
use overrides::*;
use portfolio_core::BackgroundConfig;

#[test]
fn dom_names_are_well_formed() {
    assert!(!BACKGROUND_CANVAS_ID.is_empty());
    assert!(!BACKGROUND_CANVAS_ID.contains(' '));
    assert!(PARTICLE_COUNT_ATTR.starts_with("data-"));
    assert!(MAX_DPR_ATTR.starts_with("data-"));
    assert!(REDUCED_MOTION_QUERY.starts_with('(') && REDUCED_MOTION_QUERY.ends_with(')'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn override_bounds_contain_defaults() {
    let cfg = BackgroundConfig::default();
    assert!(cfg.particle_count <= MAX_PARTICLE_COUNT_OVERRIDE);
    assert!(MIN_DPR_OVERRIDE <= cfg.max_device_pixel_ratio);
    assert!(cfg.max_device_pixel_ratio <= MAX_DPR_OVERRIDE);
}

#[test]
fn parses_valid_overrides() {
    assert_eq!(parse_particle_count(" 40 "), Some(40));
    assert_eq!(parse_particle_count("0"), Some(0));
    assert_eq!(parse_max_dpr("1.5"), Some(1.5));
}

#[test]
fn rejects_out_of_range_or_garbage() {
    assert_eq!(parse_particle_count("-3"), None);
    assert_eq!(parse_particle_count("lots"), None);
    assert_eq!(parse_particle_count("100000"), None);
    assert_eq!(parse_max_dpr("0.5"), None);
    assert_eq!(parse_max_dpr("NaN"), None);
    assert_eq!(parse_max_dpr("8"), None);
}

#[test]
fn overrides_layer_over_defaults() {
    let base = BackgroundConfig::default();
    let cfg = apply_canvas_overrides(base.clone(), Some("24"), Some("3"));
    assert_eq!(cfg.particle_count, 24);
    assert_eq!(cfg.max_device_pixel_ratio, 3.0);
    assert_eq!(cfg.drift_px_per_sec, base.drift_px_per_sec);

    let untouched = apply_canvas_overrides(base.clone(), Some("many"), None);
    assert_eq!(untouched, base);
}
