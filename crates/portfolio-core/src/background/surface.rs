use glam::DVec2;

/// CSS-pixel size of the drawing area plus the raw device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Device pixel ratio clamped to `(0, cap]`; missing or bogus ratios read as 1.
    pub fn effective_dpr(&self, cap: f64) -> f64 {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(cap)
    }

    /// Backing-store size and transform for this viewport.
    pub fn layout(&self, dpr_cap: f64) -> SurfaceLayout {
        let dpr = self.effective_dpr(dpr_cap);
        let width = self.width.max(0.0);
        let height = self.height.max(0.0);
        SurfaceLayout {
            css_width: width,
            css_height: height,
            scale: dpr,
            backing_width: (width * dpr).ceil() as u32,
            backing_height: (height * dpr).ceil() as u32,
        }
    }
}

/// How a surface should size its backing store. Drawing happens in CSS
/// pixels; `scale` is the uniform transform mapping them onto device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub css_width: f64,
    pub css_height: f64,
    pub scale: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` notation, e.g. `rgba(168, 85, 247, 0.08)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One orb as painted on a given frame: a radial gradient from `color` at
/// the center to transparent at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub center: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

/// One particle as painted on a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub center: DVec2,
    pub radius: f64,
    /// Global alpha applied on top of the star fill.
    pub alpha: f64,
}

/// A 2-D drawing target in CSS pixel units.
pub trait Surface {
    fn configure(&mut self, layout: &SurfaceLayout);
    fn clear(&mut self, width: f64, height: f64);
    fn paint_glow(&mut self, glow: &Glow);
    fn paint_star(&mut self, star: &Star);
}
