//! Seeded random source (xorshift32)
//!
//! The world owns a single `u32` state and threads it through placement and
//! spawning, so a given seed always reproduces the same layout.

/// Seed used when none is configured. Zero is not a valid xorshift state.
pub const DEFAULT_SEED: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Map a user-provided seed to a valid state.
#[inline]
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 {
        DEFAULT_SEED
    } else {
        seed
    }
}

/// Uniform sample in `[0, 1)`.
#[inline]
pub fn next_unit(state: &mut u32) -> f32 {
    // Top 24 bits fit an f32 mantissa exactly.
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform sample in `[min, max)`; returns `min` when the range is empty.
#[inline]
pub fn range(state: &mut u32, min: f32, max: f32) -> f32 {
    min + (max - min) * next_unit(state)
}
