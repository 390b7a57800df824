// Shared tuning constants for the particle backdrop and the typing effect.

// Particle population
pub const PARTICLE_COUNT: usize = 100;

// Depth
pub const DEPTH_MAX: f32 = 1000.0; // particles live in z ∈ [0, DEPTH_MAX]
pub const FOCAL_LENGTH: f32 = 1000.0; // perspective scale = FOCAL / (FOCAL + z)

// Star size: (rand * SPAN + MIN) * MULTIPLIER
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_SPAN: f32 = 2.0;
pub const SIZE_MULTIPLIER: f32 = 3.0;
pub const STAR_SPIKES: usize = 5;
pub const STAR_INNER_RATIO: f32 = 0.5; // inner radius relative to outer

// Velocity: (rand - 0.5) * SPEED, px (or depth units) per frame
pub const PLANAR_SPEED: f32 = 0.3;
pub const DEPTH_SPEED: f32 = 2.0;

// Opacity: rand * SPAN + MIN
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_SPAN: f32 = 0.5;

// Proximity links
pub const LINK_DISTANCE: f32 = 100.0;
pub const LINK_ALPHA_MAX: f32 = 0.2; // visual tuning, alpha at distance 0

// Typing effect defaults (milliseconds)
pub const TYPING_SPEED_MS: u64 = 150;
pub const DELETING_SPEED_MS: u64 = 75;
pub const PAUSE_DURATION_MS: u64 = 1000;
