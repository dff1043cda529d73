// Engine tuning constants shared by the core modules and the web frontend.

// Pointer
pub const POINTER_SENTINEL: [f32; 2] = [-9999.0, -9999.0]; // far off-surface position while idle
pub const REFERENCE_SPEED_PX_PER_SEC: f32 = 1000.0; // speed that maps to a speed factor of 1.0
pub const POINTER_STALE_MS: f64 = 50.0; // no move event for this long means the pointer is resting

// Thresholds
pub const TRAIL_SPEED_THRESHOLD: f32 = 0.01; // slower pointers never reinforce the trail
pub const VISIBILITY_THRESHOLD: f32 = 0.01; // cells at or below this are not rasterized

// Per-cell hashing
pub const GLOW_HASH_ROW: f64 = 12.9898;
pub const GLOW_HASH_COL: f64 = 78.233;
pub const GLOW_HASH_SCALE: f64 = 43758.5453;
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618_033_988_749_895; // 1/phi, low-discrepancy step

// Configuration guards
pub const MIN_DURATION_SEC: f32 = 1e-3;
pub const MIN_RADIUS: f32 = 1e-3;
pub const MIN_EFFECT_SIZE: f32 = 1e-3;
pub const MIN_SPACING: f32 = 1.0;
pub const MIN_DEVICE_PIXEL_RATIO: f32 = 0.1;
