use portfolio_core::constants::{STAR_FILL, STAR_FILL_ALPHA};
use portfolio_core::{Glow, Rgba, Star, Surface, SurfaceLayout};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a canvas 2-D context. Drawing calls that the browser
/// rejects are dropped; the next frame simply tries again.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    transparent: String,
    star_fill: String,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        let star_fill = Rgba::new(STAR_FILL[0], STAR_FILL[1], STAR_FILL[2], STAR_FILL_ALPHA);
        Self {
            canvas,
            ctx,
            transparent: Rgba::TRANSPARENT.css(),
            star_fill: star_fill.css(),
        }
    }
}

impl Surface for CanvasSurface {
    fn configure(&mut self, layout: &SurfaceLayout) {
        // assigning width/height resets the context, transform included
        self.canvas.set_width(layout.backing_width);
        self.canvas.set_height(layout.backing_height);
        let s = layout.scale;
        _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn paint_glow(&mut self, glow: &Glow) {
        let (x, y) = (glow.center.x, glow.center.y);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, glow.radius) {
            Ok(g) => g,
            Err(_) => return,
        };
        _ = gradient.add_color_stop(0.0, &glow.color.css());
        _ = gradient.add_color_stop(1.0, &self.transparent);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, glow.radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn paint_star(&mut self, star: &Star) {
        self.ctx.set_global_alpha(star.alpha);
        self.ctx.set_fill_style_str(&self.star_fill);
        self.ctx.begin_path();
        _ = self.ctx.arc(star.center.x, star.center.y, star.radius, 0.0, TAU);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }
}
