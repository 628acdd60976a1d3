//! Neglect decay — what one tick of the decay ticker takes away.
//!
//! While neglected, every tick removes a fixed amount of health and water,
//! floored at zero:
//!
//!   health' = max(0, health − 10)
//!   water'  = max(0, water − 15)
//!
//! Water drains faster, so an otherwise untouched plant dies of thirst
//! (7 ticks from full) before it dies of neglect (10 ticks from full).

/// Health removed per decay tick.
pub const HEALTH_PER_TICK: u8 = 10;
/// Water removed per decay tick.
pub const WATER_PER_TICK: u8 = 15;

/// Apply one decay tick to `(health, water_level)`.
#[must_use]
pub fn decay_tick(health: u8, water_level: u8) -> (u8, u8) {
    (
        health.saturating_sub(HEALTH_PER_TICK),
        water_level.saturating_sub(WATER_PER_TICK),
    )
}

/// Number of decay ticks until health or water reaches zero.
///
/// Returns 0 for a plant that is already depleted.
#[must_use]
pub fn ticks_until_depleted(health: u8, water_level: u8) -> u32 {
    let by_health = u32::from(health).div_ceil(u32::from(HEALTH_PER_TICK));
    let by_water = u32::from(water_level).div_ceil(u32::from(WATER_PER_TICK));
    by_health.min(by_water)
}
