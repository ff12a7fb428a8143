//! Shared numeric helpers for lease calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to cents, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(123455, 3)), Decimal::new(12346, 2));
/// assert_eq!(round_half_up(Decimal::new(-123455, 3)), Decimal::new(-12346, 2));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to whole dollars for display text.
pub fn whole_dollars(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides, returning zero instead of dividing by zero.
///
/// A quotient too large to represent saturates at [`Decimal::MAX`] or
/// [`Decimal::MIN`].
pub fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
    )
}
