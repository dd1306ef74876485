// DOM hooks and browser names used by the web front-end

// Canvas the ambient background paints into when mounted without an explicit id
pub const BACKGROUND_CANVAS_ID: &str = "ambient-background";
pub const CONTEXT_2D: &str = "2d";

pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Optional per-canvas overrides of the default background tuning
pub const PARTICLE_COUNT_ATTR: &str = "data-particle-count";
pub const MAX_DPR_ATTR: &str = "data-max-dpr";

// Bounds accepted for those overrides; anything outside is ignored
pub const MAX_PARTICLE_COUNT_OVERRIDE: usize = 400;
pub const MIN_DPR_OVERRIDE: f64 = 1.0;
pub const MAX_DPR_OVERRIDE: f64 = 4.0;
