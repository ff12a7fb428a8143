//! Fringe Benefits Tax under the statutory formula method.
//!
//! The base value is the GST-exclusive vehicle price, reduced by one third
//! for each full year the vehicle has been held. The taxable value is the base
//! value times the statutory fraction; FBT is that grossed up at the type-1
//! rate and taxed at the FBT rate. Employee post-tax contributions reduce the
//! liability dollar for dollar on the same grossed-up basis.

use rust_decimal::{Decimal, MathematicalOps};

use crate::config::PolicyConfig;
use crate::models::FbtSettings;

/// Calculates the FBT base value for a lease year.
///
/// # Arguments
///
/// * `vehicle_price` - GST-inclusive purchase price
/// * `year` - Lease year (1-based); year 1 has no reduction
/// * `policy` - Supplies the GST rate
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::fbt_base_value;
/// use novated_lease_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(fbt_base_value(Decimal::from(55_000), 1, &policy), Decimal::from(50_000));
/// ```
pub fn fbt_base_value(vehicle_price: Decimal, year: u32, policy: &PolicyConfig) -> Decimal {
    let gst_exclusive = vehicle_price / (Decimal::ONE + policy.gst.rate);
    let reductions = year.saturating_sub(1);
    if reductions == 0 {
        return gst_exclusive;
    }
    let retained = Decimal::TWO / Decimal::from(3);
    gst_exclusive * retained.powu(u64::from(reductions))
}

/// The statutory fraction applied to the base value.
///
/// A quote-supplied rate of zero is honoured; only an absent rate falls back
/// to the policy default.
pub fn statutory_rate(settings: &FbtSettings, policy: &PolicyConfig) -> Decimal {
    settings
        .statutory_rate
        .unwrap_or(policy.fbt.default_statutory_rate)
}

/// Calculates the FBT payable for one year on a given base value.
///
/// Returns zero when the statutory method is disabled. Never negative.
pub fn calculate_fbt(base_value: Decimal, settings: &FbtSettings, policy: &PolicyConfig) -> Decimal {
    if !settings.use_statutory_method {
        return Decimal::ZERO;
    }

    let taxable_value = base_value * statutory_rate(settings, policy);
    let grossed_up_rate = policy.fbt.type1_gross_up * policy.fbt.rate;

    let fbt = taxable_value * grossed_up_rate;
    let contribution_offset = settings.employee_contribution_amount * grossed_up_rate;

    (fbt - contribution_offset).max(Decimal::ZERO)
}

/// Calculates the FBT payable in a given lease year.
pub fn calculate_fbt_for_year(
    vehicle_price: Decimal,
    year: u32,
    settings: &FbtSettings,
    policy: &PolicyConfig,
) -> Decimal {
    calculate_fbt(fbt_base_value(vehicle_price, year, policy), settings, policy)
}
