// Shared scene, effect and timeline tuning used by the web and native frontends.

// Palette (hex, sRGB as authored)
pub const PALETTE_GREEN: u32 = 0x00ff88;
pub const PALETTE_CYAN: u32 = 0x00d4ff;
pub const PALETTE_MAGENTA: u32 = 0xff00ff;
pub const PARTICLE_PALETTE: [u32; 3] = [PALETTE_GREEN, PALETTE_CYAN, PALETTE_MAGENTA];
// Cumulative thresholds on a single uniform draw
pub const PARTICLE_COLOR_SPLITS: [f32; 2] = [0.33, 0.66];

// Point cloud
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_EXTENT: f32 = 100.0; // side of the spawn cube, centred on origin
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const CLOUD_SPIN_X: f32 = 0.0005; // radians per frame
pub const CLOUD_SPIN_Y: f32 = 0.001;
pub const WAVE_TIME_SCALE: f64 = 0.001; // ms -> phase
pub const WAVE_STEP: f32 = 0.01; // per-frame displacement gain
pub const WAVE_ANCHORED_AMPLITUDE: f32 = 0.5;

// Floating shapes
pub const SHAPE_BOB_AMPLITUDE: f32 = 5.0;
pub const SHAPE_YAW_FACTOR: f32 = 0.5; // y rotates at half the x speed
pub const SHAPE_AMBIENT: f32 = 0.5;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 50.0;
pub const CAMERA_POINTER_REACH: f32 = 10.0; // pointer [-1,1] -> world units
pub const CAMERA_EASE: f32 = 0.05; // fraction of remaining distance per frame

// Form tilt
pub const TILT_DIVISOR: f64 = 30.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;

// Submit timeline (ms from the submit event)
pub const SUBMIT_FADE_AT_MS: f64 = 2000.0;
pub const SUBMIT_SUCCESS_AT_MS: f64 = 2500.0;
pub const SUBMIT_SUCCESS_END_MS: f64 = 6500.0;
pub const SUBMIT_RESTORE_AT_MS: f64 = 7000.0;
pub const SUBMIT_LABEL_BUSY: &str = "// Processing...";
pub const SUBMIT_LABEL_IDLE: &str = "function submitApplication()";

// Typed console overlay
pub const TYPED_TEXT: &str = "> Submitting application... \u{2713}";
pub const TYPED_CHAR_INTERVAL_MS: f64 = 50.0;
pub const TYPED_HOLD_MS: f64 = 2000.0;
pub const TYPED_FADE_MS: f64 = 300.0;
pub const TYPED_FADE_SHIFT_PX: f64 = 20.0;

// Focus particle burst
pub const BURST_PIECES: usize = 15;
pub const BURST_DISTANCE_MIN: f64 = 50.0;
pub const BURST_DISTANCE_JITTER: f64 = 30.0;
pub const BURST_DURATION_MIN_MS: f64 = 600.0;
pub const BURST_DURATION_JITTER_MS: f64 = 400.0;

// Confetti
pub const CONFETTI_PIECES: usize = 50;
pub const CONFETTI_PALETTE: [u32; 4] = [PALETTE_GREEN, PALETTE_CYAN, PALETTE_MAGENTA, 0x00ffff];
pub const CONFETTI_SPEED_MIN: f64 = 200.0;
pub const CONFETTI_SPEED_JITTER: f64 = 300.0;
pub const CONFETTI_LIFT: f64 = 200.0; // upward bias in px
pub const CONFETTI_SPIN_MAX_DEG: f64 = 720.0;
pub const CONFETTI_DURATION_MIN_MS: f64 = 1000.0;
pub const CONFETTI_DURATION_JITTER_MS: f64 = 1000.0;

// cubic-bezier(0, .9, .57, 1)
pub const EFFECT_EASING: [f64; 4] = [0.0, 0.9, 0.57, 1.0];

// Upper bound on concurrently running transient effects
pub const EFFECT_POOL_CAPACITY: usize = 32;
