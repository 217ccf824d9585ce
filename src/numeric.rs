//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so the casts live in one audited place.

/// Floor the value and convert to `u16`, returning `None` when out of range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is validated against the u16 domain."
)]
#[must_use]
pub fn floor_to_u16(value: f64) -> Option<u16> {
    if !value.is_finite() {
        return None;
    }
    let floored = value.floor();
    if floored < f64::from(u16::MIN) || floored > f64::from(u16::MAX) {
        return None;
    }
    Some(floored as u16)
}

/// Clamp an externally supplied integer into `0..=max`.
///
/// Used when restoring state from a host whose values were never validated.
#[must_use]
pub fn clamp_to_u16(value: i64, max: u16) -> u16 {
    let clamped = value.clamp(0, i64::from(max));
    u16::try_from(clamped).unwrap_or(max)
}

/// Clamp an externally supplied level index into `0..count`.
///
/// Returns `0` when `count` is zero.
#[must_use]
pub fn clamp_level_index(value: i64, count: usize) -> usize {
    if count == 0 || value <= 0 {
        return 0;
    }
    let last = count - 1;
    usize::try_from(value).map_or(last, |index| index.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4.8, Some(4))]
    #[case(0.0, Some(0))]
    #[case(-0.5, None)]
    #[case(f64::NAN, None)]
    #[case(70_000.0, None)]
    fn floors_into_u16(#[case] input: f64, #[case] expected: Option<u16>) {
        assert_eq!(floor_to_u16(input), expected);
    }

    #[rstest]
    #[case(-20, 0)]
    #[case(55, 55)]
    #[case(250, 100)]
    fn clamps_health_like_values(#[case] input: i64, #[case] expected: u16) {
        assert_eq!(clamp_to_u16(input, 100), expected);
    }

    #[rstest]
    #[case(-3, 22, 0)]
    #[case(5, 22, 5)]
    #[case(40, 22, 21)]
    #[case(3, 0, 0)]
    fn clamps_level_indices(#[case] input: i64, #[case] count: usize, #[case] expected: usize) {
        assert_eq!(clamp_level_index(input, count), expected);
    }
}
