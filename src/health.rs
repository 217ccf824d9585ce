//! Health bookkeeping and the fall-damage curve.
//!
//! Damage grows linearly with the time spent falling past a grace
//! threshold. Health never leaves `0..=max`; the core reports death but does
//! not reset anything.

use serde::{Deserialize, Serialize};

use crate::numeric::{clamp_to_u16, floor_to_u16};
use crate::PhysicsConfig;

/// Current and maximum health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Remaining health.
    pub current: u16,
    /// Full health.
    pub max: u16,
}

impl Health {
    /// Full health of `max`.
    #[must_use]
    pub const fn full(max: u16) -> Self {
        Self { current: max, max }
    }

    /// Builds health from an unvalidated external value, clamping it into
    /// `0..=max`.
    #[must_use]
    pub fn clamped(current: i64, max: u16) -> Self {
        let health = Self {
            current: clamp_to_u16(current, max),
            max,
        };
        if i64::from(health.current) != current {
            log::warn!("clamped out-of-range health {current} to {}", health.current);
        }
        health
    }

    /// Removes `amount`, saturating at zero. Returns the health removed.
    pub fn apply_damage(&mut self, amount: u16) -> u16 {
        let before = self.current.min(self.max);
        self.current = before.saturating_sub(amount);
        before - self.current
    }

    /// Whether health has run out.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of health left, in `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.current.min(self.max)) / f64::from(self.max)
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full(crate::MAX_HEALTH)
    }
}

/// Damage dealt by a fall that lasted `fall_secs`.
///
/// Zero up to the threshold, then
/// `min(max_health, floor(rate * (fall_secs - threshold)))`.
///
/// # Examples
/// ```
/// use kings_trial::{fall_damage, PhysicsConfig};
/// let config = PhysicsConfig::default();
/// assert_eq!(fall_damage(0.6, &config), 0);
/// assert_eq!(fall_damage(1.0, &config), 4);
/// ```
#[must_use]
pub fn fall_damage(fall_secs: f64, config: &PhysicsConfig) -> u16 {
    let excess = fall_secs - config.fall_damage_threshold_secs;
    if excess <= 0.0 {
        return 0;
    }
    let scaled = (config.fall_damage_per_second * excess).min(f64::from(config.max_health));
    floor_to_u16(scaled).map_or(0, |damage| damage.min(config.max_health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.6, 0)]
    #[case(0.65, 0)]
    #[case(1.0, 4)]
    #[case(2.6, 24)]
    #[case(60.0, 100)]
    fn damage_curve(#[case] secs: f64, #[case] expected: u16) {
        assert_eq!(fall_damage(secs, &PhysicsConfig::default()), expected);
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut health = Health { current: 3, max: 100 };
        assert_eq!(health.apply_damage(10), 3);
        assert_eq!(health.current, 0);
        assert!(health.is_depleted());
        assert_eq!(health.apply_damage(10), 0);
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(42, 42)]
    #[case(900, 100)]
    fn clamped_restores_into_range(#[case] raw: i64, #[case] expected: u16) {
        assert_eq!(Health::clamped(raw, 100).current, expected);
    }

    #[test]
    fn ratio_tracks_current() {
        let health = Health { current: 25, max: 100 };
        assert!((health.ratio() - 0.25).abs() < f64::EPSILON);
    }
}
