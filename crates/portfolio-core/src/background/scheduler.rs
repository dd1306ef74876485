use std::fmt::Debug;

/// Next-frame scheduling primitive (`requestAnimationFrame` on the web).
///
/// The scheduler only decides *when* the owner's frame callback runs; wiring
/// that callback back into [`AmbientBackground::on_frame`](super::AmbientBackground::on_frame)
/// is the platform layer's job.
pub trait FrameScheduler {
    type Handle: Copy + Debug + PartialEq;

    /// Ask for one callback at the next display refresh. `None` means the
    /// platform refused and nothing is pending.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Lifecycle of the animation loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopPhase<H> {
    /// Mounted; no frame pending.
    Initialized,
    /// A frame callback is pending under this handle.
    Running(H),
    /// Painted once with reduced motion requested; no frame pending.
    Frozen,
    /// Torn down. Terminal.
    Unmounted,
}

impl<H: Copy> LoopPhase<H> {
    pub fn pending(&self) -> Option<H> {
        match self {
            LoopPhase::Running(h) => Some(*h),
            _ => None,
        }
    }

    pub fn is_unmounted(&self) -> bool {
        matches!(self, LoopPhase::Unmounted)
    }
}
