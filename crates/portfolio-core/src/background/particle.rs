use super::{BackgroundConfig, Star, Viewport};
use crate::constants::*;
use glam::DVec2;

/// A star in the background field.
///
/// Position is stored as a fraction of the viewport so the field survives
/// resizes without being regenerated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub normalized_x: f64,
    pub normalized_y: f64,
    /// Radius in CSS pixels.
    pub size: f64,
    pub speed: f64,
}

/// Index-seeded hash in `[0, 1)`.
#[inline]
pub fn seeded_fraction(index: usize) -> f64 {
    let r = (index as f64 * PARTICLE_SEED_MULTIPLIER).sin() * PARTICLE_SEED_SCALE;
    r - r.floor()
}

// `rem_euclid` can round up to `span` for tiny negative inputs.
#[inline]
fn wrap(value: f64, span: f64) -> f64 {
    let r = value.rem_euclid(span);
    if r >= span {
        0.0
    } else {
        r
    }
}

impl Particle {
    /// Pure function of `index`: the same index always yields the same particle.
    pub fn generate(index: usize) -> Self {
        let frac = seeded_fraction(index);
        Self {
            normalized_x: frac,
            normalized_y: (frac * 1.123 + 0.37) % 1.0,
            size: PARTICLE_MIN_SIZE + ((frac * 7.0) % 1.0) * PARTICLE_SIZE_SPAN,
            speed: PARTICLE_MIN_SPEED + ((frac * 13.0) % 1.0) * PARTICLE_SPEED_SPAN,
        }
    }

    /// Animated position at `elapsed_sec`, in CSS pixels.
    ///
    /// Both axes wrap with a margin so stars slide fully off one edge before
    /// reappearing at the other; the result lies in `[-margin, extent + margin)`.
    pub fn position_at(&self, elapsed_sec: f64, viewport: &Viewport, cfg: &BackgroundConfig) -> DVec2 {
        let margin = cfg.wrap_margin_px;
        let span_x = viewport.width + 2.0 * margin;
        let span_y = viewport.height + 2.0 * margin;
        let x = wrap(
            self.normalized_x * viewport.width + elapsed_sec * cfg.drift_px_per_sec * self.speed,
            span_x,
        ) - margin;
        let bob = (elapsed_sec * (cfg.bob_base_frequency + self.speed)).sin() * cfg.bob_amplitude_px;
        let y = wrap(self.normalized_y * viewport.height + bob, span_y) - margin;
        DVec2::new(x, y)
    }

    /// Everything needed to paint this particle (at position `index` in the field).
    pub fn star_at(
        &self,
        index: usize,
        elapsed_sec: f64,
        viewport: &Viewport,
        cfg: &BackgroundConfig,
    ) -> Star {
        Star {
            center: self.position_at(elapsed_sec, viewport, cfg),
            radius: self.size,
            alpha: cfg.twinkle_alpha(elapsed_sec, index),
        }
    }
}

/// The full star field for one mount.
pub fn generate_particles(count: usize) -> Vec<Particle> {
    (0..count).map(Particle::generate).collect()
}
