//! Residual (balloon) value lookup.
//!
//! The ATO publishes minimum residual values as a fraction of the vehicle
//! price for each whole-year lease term. Terms outside the table use the
//! configured fallback term's rate.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConfig;

/// Whether the policy table has a residual rate for this exact term.
pub fn has_residual_rate(duration_years: u32, policy: &PolicyConfig) -> bool {
    policy.residual.rates.contains_key(&duration_years)
}

/// Returns the residual fraction for a lease term.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::residual_rate;
/// use novated_lease_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(residual_rate(3, &policy), Decimal::new(4688, 4));
/// assert_eq!(residual_rate(7, &policy), Decimal::new(2813, 4));
/// ```
pub fn residual_rate(duration_years: u32, policy: &PolicyConfig) -> Decimal {
    let rates = &policy.residual.rates;
    match rates.get(&duration_years) {
        Some(rate) => *rate,
        None => {
            let fallback = policy.residual.fallback_years;
            debug!(
                duration_years = duration_years,
                fallback_years = fallback,
                "No residual rate for term, using fallback"
            );
            rates.get(&fallback).copied().unwrap_or(Decimal::ZERO)
        }
    }
}

/// Calculates the residual payment due at the end of the lease.
pub fn calculate_residual_value(
    vehicle_price: Decimal,
    duration_years: u32,
    policy: &PolicyConfig,
) -> Decimal {
    vehicle_price * residual_rate(duration_years, policy)
}

/// The amount financed over the term: price less the residual.
pub fn financed_amount(vehicle_price: Decimal, duration_years: u32, policy: &PolicyConfig) -> Decimal {
    vehicle_price - calculate_residual_value(vehicle_price, duration_years, policy)
}
