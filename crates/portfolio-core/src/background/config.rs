use crate::constants::*;

/// Tunables for the background animation.
///
/// `Default` reproduces the site's look; the web front-end may override the
/// particle count and DPR cap from data attributes on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub particle_count: usize,
    pub max_device_pixel_ratio: f64,
    pub drift_px_per_sec: f64,
    pub wrap_margin_px: f64,
    pub bob_amplitude_px: f64,
    pub bob_base_frequency: f64,
    pub twinkle_base: f64,
    pub twinkle_span: f64,
    pub twinkle_rate: f64,
    pub twinkle_floor: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            max_device_pixel_ratio: MAX_DEVICE_PIXEL_RATIO,
            drift_px_per_sec: DRIFT_PX_PER_SEC,
            wrap_margin_px: WRAP_MARGIN_PX,
            bob_amplitude_px: BOB_AMPLITUDE_PX,
            bob_base_frequency: BOB_BASE_FREQUENCY,
            twinkle_base: TWINKLE_BASE,
            twinkle_span: TWINKLE_SPAN,
            twinkle_rate: TWINKLE_RATE,
            twinkle_floor: TWINKLE_FLOOR,
        }
    }
}

impl BackgroundConfig {
    /// Twinkle opacity for particle `index` at `elapsed_sec`.
    #[inline]
    pub fn twinkle_alpha(&self, elapsed_sec: f64, index: usize) -> f64 {
        let wave = self.twinkle_base
            + self.twinkle_span * (elapsed_sec * self.twinkle_rate + index as f64).sin();
        wave.max(self.twinkle_floor)
    }
}

/// Twinkle opacity with the default tuning.
#[inline]
pub fn twinkle_alpha(elapsed_sec: f64, index: usize) -> f64 {
    BackgroundConfig::default().twinkle_alpha(elapsed_sec, index)
}
