// Sampler settings
pub const HEMISPHERE_SAMPLES: usize = 1024;
pub const HEMISPHERE_TANGENT_BOUND: f64 = 0.95;
pub const HEMISPHERE_MIN_Y_SQ: f64 = 0.1;

// Area light settings
pub const LIGHT_SAMPLES: usize = 1024;
pub const LIGHT_STEP_SHRINK: f64 = 0.999;

// Output settings
pub const OUTPUT_DECIMALS: usize = 6;
