use super::{
    generate_particles, orb_glows, BackgroundConfig, FrameScheduler, LoopPhase, Particle, Surface,
    Viewport,
};
use crate::constants::MS_PER_SEC;

/// Signals the loop reads each frame; written by the platform's listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub viewport: Viewport,
    pub scroll_offset_y: f64,
    pub reduced_motion: bool,
}

/// The ambient background for one mounted view.
///
/// Owns the drawing surface, the frame scheduler and a star field generated
/// once at mount. The platform layer forwards scroll, resize and frame
/// callbacks; everything else (when to reschedule, when to freeze, what to
/// cancel on teardown) is decided here.
pub struct AmbientBackground<D, F: FrameScheduler> {
    cfg: BackgroundConfig,
    particles: Vec<Particle>,
    state: RenderState,
    surface: D,
    scheduler: F,
    phase: LoopPhase<F::Handle>,
    frames_drawn: u64,
}

impl<D: Surface, F: FrameScheduler> AmbientBackground<D, F> {
    pub fn mount(
        cfg: BackgroundConfig,
        viewport: Viewport,
        reduced_motion: bool,
        mut surface: D,
        scheduler: F,
    ) -> Self {
        let particles = generate_particles(cfg.particle_count);
        surface.configure(&viewport.layout(cfg.max_device_pixel_ratio));
        log::debug!(
            "[background] mounted particles={} viewport={}x{} dpr={:.2} reduced_motion={}",
            particles.len(),
            viewport.width,
            viewport.height,
            viewport.effective_dpr(cfg.max_device_pixel_ratio),
            reduced_motion
        );
        Self {
            cfg,
            particles,
            state: RenderState {
                viewport,
                scroll_offset_y: 0.0,
                reduced_motion,
            },
            surface,
            scheduler,
            phase: LoopPhase::Initialized,
            frames_drawn: 0,
        }
    }

    /// Schedule the first frame. With reduced motion that frame is also the
    /// last one.
    pub fn start(&mut self) {
        if matches!(self.phase, LoopPhase::Initialized | LoopPhase::Frozen) {
            self.schedule_next();
        }
    }

    /// Frame callback. `timestamp_ms` is the host's frame clock
    /// (`DOMHighResTimeStamp` on the web).
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        if self.phase.pending().is_none() {
            return;
        }
        // the pending callback is now consumed
        self.phase = LoopPhase::Initialized;
        self.draw(timestamp_ms / MS_PER_SEC);
        if self.state.reduced_motion {
            log::debug!("[background] reduced motion requested; freezing");
            self.phase = LoopPhase::Frozen;
        } else {
            self.schedule_next();
        }
    }

    /// Paint one full frame.
    pub fn draw(&mut self, elapsed_sec: f64) {
        let viewport = self.state.viewport;
        self.surface.clear(viewport.width, viewport.height);
        for glow in orb_glows(&viewport, self.state.scroll_offset_y) {
            self.surface.paint_glow(&glow);
        }
        for (i, p) in self.particles.iter().enumerate() {
            let star = p.star_at(i, elapsed_sec, &viewport, &self.cfg);
            self.surface.paint_star(&star);
        }
        self.frames_drawn += 1;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if self.phase.is_unmounted() {
            return;
        }
        self.state.scroll_offset_y = scroll_y;
    }

    /// Re-sample size, DPR and the reduced-motion preference. Particles are
    /// kept. A frozen background gets one repaint since resizing wipes the
    /// backing store; that frame freezes again or resumes the loop depending
    /// on the fresh preference.
    pub fn on_resize(&mut self, viewport: Viewport, reduced_motion: bool) {
        if self.phase.is_unmounted() {
            return;
        }
        self.state.viewport = viewport;
        self.state.reduced_motion = reduced_motion;
        self.surface
            .configure(&viewport.layout(self.cfg.max_device_pixel_ratio));
        if matches!(self.phase, LoopPhase::Frozen) {
            self.schedule_next();
        }
    }

    /// Cancel any pending frame and stop reacting to further callbacks.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.phase.pending() {
            self.scheduler.cancel_frame(handle);
        }
        if !self.phase.is_unmounted() {
            log::debug!(
                "[background] unmounted after {} frames",
                self.frames_drawn
            );
        }
        self.phase = LoopPhase::Unmounted;
    }

    fn schedule_next(&mut self) {
        self.phase = match self.scheduler.request_frame() {
            Some(handle) => LoopPhase::Running(handle),
            None => {
                log::warn!("[background] frame request refused; loop idle");
                LoopPhase::Initialized
            }
        };
    }

    pub fn phase(&self) -> LoopPhase<F::Handle> {
        self.phase
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.cfg
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }
}
