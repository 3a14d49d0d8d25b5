//! Pointer-percentage and decorative-layout math for the hero section.
//!
//! All pure so SSR markup and hydrated markup agree: particle and icon
//! placement is derived from the element index instead of ambient randomness.

#[cfg(test)]
#[path = "hero_math_test.rs"]
mod hero_math_test;

pub const PARTICLE_COUNT: usize = 50;

pub const PARTICLE_PARALLAX_FACTOR: f64 = 0.02;
pub const ICON_PARALLAX_FACTOR: f64 = 0.03;
pub const FEATURE_FLOAT_AMPLITUDE_PX: f64 = 2.0;
pub const FEATURE_FLOAT_PHASE_STEP: f64 = 30.0;

/// Convert a client coordinate into a 0–100 percentage of the hero box.
pub fn pointer_percent(client: f64, origin: f64, size: f64) -> f64 {
    if !size.is_finite() || size <= 0.0 || !client.is_finite() || !origin.is_finite() {
        return 0.0;
    }
    (((client - origin) / size) * 100.0).clamp(0.0, 100.0)
}

/// Pixel offset for a parallax layer, centered on the 50% midpoint.
pub fn parallax_offset(percent: f64, factor: f64) -> f64 {
    (percent - 50.0) * factor
}

/// Vertical float for the feature cards, phase-shifted per card index.
pub fn feature_float_offset(pointer_x: f64, pointer_y: f64, index: usize) -> f64 {
    let phase = (pointer_x + pointer_y + (index as f64) * FEATURE_FLOAT_PHASE_STEP) * 0.01;
    phase.sin() * FEATURE_FLOAT_AMPLITUDE_PX
}

/// Deterministic value in `[0, 1)` for decorative placement.
fn unit_hash(index: u64, salt: u64) -> f64 {
    let mut x = index
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(salt.wrapping_mul(0xD1B5_4A32_D192_ED03));
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    ((x >> 11) as f64) / ((1_u64 << 53) as f64)
}

/// Particle left position in percent of the hero width.
pub fn particle_left(index: usize) -> f64 {
    unit_hash(index as u64, 1) * 100.0
}

/// Particle top position in percent of the hero height.
pub fn particle_top(index: usize) -> f64 {
    unit_hash(index as u64, 2) * 100.0
}

/// Per-particle pulse start delay in seconds, `[0, 3)`.
pub fn particle_delay_s(index: usize) -> f64 {
    unit_hash(index as u64, 3) * 3.0
}

/// Per-particle pulse duration in seconds, `[2, 5)`.
pub fn particle_duration_s(index: usize) -> f64 {
    2.0 + unit_hash(index as u64, 4) * 3.0
}

/// Floating tech-icon left position in percent (staggered grid walk).
pub fn icon_left(index: usize) -> f64 {
    10.0 + ((index * 10) % 80) as f64
}

/// Floating tech-icon top position in percent (staggered grid walk).
pub fn icon_top(index: usize) -> f64 {
    15.0 + ((index * 15) % 70) as f64
}

/// Primary gradient orb center, trailing the pointer.
pub fn orb_primary_position(percent: f64) -> f64 {
    percent * 0.8
}

/// Secondary orb center, mirroring the pointer from the opposite corner.
pub fn orb_secondary_position(percent: f64) -> f64 {
    100.0 - percent * 0.6
}
