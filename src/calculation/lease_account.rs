//! Cumulative lease account position.
//!
//! Tracks what has been paid to the financier by the end of each year and how
//! much of the financed amount is left, alongside the residual still owed at
//! the end of the term.

use rust_decimal::Decimal;

use crate::models::{LeaseAccountSnapshot, YearEntry};

use super::common::ratio_or_zero;

/// Builds one account snapshot per lease year.
///
/// `paid_to_date` counts principal and interest only. The percentage repaid is
/// relative to the total principal in the schedule, which is the financed
/// amount; it is zero when nothing is financed.
pub fn track_lease_account(years: &[YearEntry], residual_value: Decimal) -> Vec<LeaseAccountSnapshot> {
    let financed: Decimal = years.iter().map(|y| y.principal_payment).sum();

    let mut paid_to_date = Decimal::ZERO;
    let mut principal_repaid = Decimal::ZERO;

    years
        .iter()
        .map(|entry| {
            paid_to_date += entry.principal_payment + entry.interest_payment;
            principal_repaid += entry.principal_payment;

            LeaseAccountSnapshot {
                year: entry.year,
                paid_to_date,
                principal_repaid,
                remaining_balance: entry.remaining_principal,
                percent_repaid: ratio_or_zero(principal_repaid, financed) * Decimal::ONE_HUNDRED,
                residual_value,
            }
        })
        .collect()
}
