use super::{Glow, Rgba, Viewport};
use glam::DVec2;

/// A soft glow anchored to a fraction of the viewport and displaced by the
/// page scroll offset for a parallax effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub base: DVec2,
    pub scroll_coefficient: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

pub const ORBS: [Orb; 3] = [
    // purple
    Orb {
        base: DVec2::new(0.25, 0.30),
        scroll_coefficient: DVec2::new(0.03, 0.02),
        radius: 220.0,
        color: Rgba::new(168, 85, 247, 0.08),
    },
    // cyan
    Orb {
        base: DVec2::new(0.80, 0.70),
        scroll_coefficient: DVec2::new(-0.03, -0.02),
        radius: 180.0,
        color: Rgba::new(34, 211, 238, 0.08),
    },
    // pink
    Orb {
        base: DVec2::new(0.55, 0.50),
        scroll_coefficient: DVec2::new(0.02, -0.03),
        radius: 150.0,
        color: Rgba::new(236, 72, 153, 0.06),
    },
];

impl Orb {
    #[inline]
    pub fn center(&self, viewport: &Viewport, scroll_y: f64) -> DVec2 {
        DVec2::new(viewport.width, viewport.height) * self.base + self.scroll_coefficient * scroll_y
    }

    pub fn glow(&self, viewport: &Viewport, scroll_y: f64) -> Glow {
        Glow {
            center: self.center(viewport, scroll_y),
            radius: self.radius,
            color: self.color,
        }
    }
}

/// The three orbs as they should be painted for the given scroll offset.
pub fn orb_glows(viewport: &Viewport, scroll_y: f64) -> [Glow; 3] {
    ORBS.map(|orb| orb.glow(viewport, scroll_y))
}
