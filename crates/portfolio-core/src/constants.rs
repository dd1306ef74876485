// Shared tuning constants for the ambient background.

// Particle field
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_SEED_MULTIPLIER: f64 = 12.9898;
pub const PARTICLE_SEED_SCALE: f64 = 43758.5453;
pub const PARTICLE_MIN_SIZE: f64 = 0.5; // px
pub const PARTICLE_SIZE_SPAN: f64 = 1.2; // px
pub const PARTICLE_MIN_SPEED: f64 = 0.2;
pub const PARTICLE_SPEED_SPAN: f64 = 0.6;

// Particle motion
pub const DRIFT_PX_PER_SEC: f64 = 20.0; // rightward drift at speed 1.0
pub const WRAP_MARGIN_PX: f64 = 10.0; // stars wrap this far outside each edge
pub const BOB_AMPLITUDE_PX: f64 = 10.0;
pub const BOB_BASE_FREQUENCY: f64 = 0.6;

// Twinkle: alpha = max(floor, base + span * sin(t * rate + index))
pub const TWINKLE_BASE: f64 = 0.7;
pub const TWINKLE_SPAN: f64 = 0.3;
pub const TWINKLE_RATE: f64 = 2.0;
pub const TWINKLE_FLOOR: f64 = 0.15;

// Star fill before global alpha is applied
pub const STAR_FILL: [u8; 3] = [255, 255, 255];
pub const STAR_FILL_ALPHA: f64 = 0.4;

// Display
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const MS_PER_SEC: f64 = 1000.0;
