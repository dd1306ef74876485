//! Ambient page background: a deterministic star field drifting over a few
//! scroll-reactive glow orbs.
//!
//! Everything here is platform-free. The web front-end supplies a [`Surface`]
//! backed by a 2-D canvas context and a [`FrameScheduler`] backed by
//! `requestAnimationFrame`; tests supply recording fakes.

mod config;
mod orb;
mod particle;
mod renderer;
mod scheduler;
mod surface;

pub use config::*;
pub use orb::*;
pub use particle::*;
pub use renderer::*;
pub use scheduler::*;
pub use surface::*;
