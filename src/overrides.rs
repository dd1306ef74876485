use super::constants::{
    MAX_DPR_ATTR, MAX_DPR_OVERRIDE, MAX_PARTICLE_COUNT_OVERRIDE, MIN_DPR_OVERRIDE,
    PARTICLE_COUNT_ATTR,
};
use portfolio_core::BackgroundConfig;

pub fn parse_particle_count(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n <= MAX_PARTICLE_COUNT_OVERRIDE)
}

pub fn parse_max_dpr(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| (MIN_DPR_OVERRIDE..=MAX_DPR_OVERRIDE).contains(d))
}

/// Layer the canvas `data-*` attributes over `cfg`. Rejected values are
/// logged and leave the default in place.
pub fn apply_canvas_overrides(
    mut cfg: BackgroundConfig,
    particle_count: Option<&str>,
    max_dpr: Option<&str>,
) -> BackgroundConfig {
    if let Some(raw) = particle_count {
        match parse_particle_count(raw) {
            Some(n) => cfg.particle_count = n,
            None => log::warn!("[background] ignoring {}={:?}", PARTICLE_COUNT_ATTR, raw),
        }
    }
    if let Some(raw) = max_dpr {
        match parse_max_dpr(raw) {
            Some(d) => cfg.max_device_pixel_ratio = d,
            None => log::warn!("[background] ignoring {}={:?}", MAX_DPR_ATTR, raw),
        }
    }
    cfg
}
