//! Pure damage math.
//!
//! These functions calculate combat outcomes without side effects; every
//! roll takes an injected RNG so results are reproducible in tests.

use crate::core::constants::DAMAGE_VARIANCE;
use rand::Rng;

/// Compute randomized attack damage.
///
/// `total = base + bonus`; the result is
/// `floor(uniform[0, total * 0.5)) + total + skill`, which lies in
/// `[total + skill, floor(total * 1.5) + skill]`.
pub fn compute_damage(
    base_damage: u32,
    bonus_damage: u32,
    skill_damage: u32,
    rng: &mut impl Rng,
) -> u32 {
    let total = base_damage + bonus_damage;
    let variance = if total > 0 {
        (rng.gen::<f64>() * total as f64 * DAMAGE_VARIANCE) as u32
    } else {
        0
    };
    variance + total + skill_damage
}

/// Apply a damage multiplier, flooring the result.
pub fn multiply_damage(damage: u32, factor: f64) -> u32 {
    (damage as f64 * factor) as u32
}
