//! GST savings from salary packaging.
//!
//! The employer claims the GST on the vehicle and on running costs and passes
//! it on. Vehicle GST is spread evenly across the lease years; running-cost GST
//! is the GST component of each year's GST-inclusive running costs.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;

/// GST saved in one lease year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstSavings {
    /// The vehicle's share of GST for the year.
    pub vehicle: Decimal,
    /// GST component of the year's running costs.
    pub running_costs: Decimal,
}

impl GstSavings {
    /// Total GST saved for the year.
    pub fn total(&self) -> Decimal {
        self.vehicle + self.running_costs
    }
}

/// The GST component of a GST-inclusive amount.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::gst_component;
/// use novated_lease_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(gst_component(Decimal::from(1_100), &policy), Decimal::from(100));
/// ```
pub fn gst_component(gst_inclusive: Decimal, policy: &PolicyConfig) -> Decimal {
    let rate = policy.gst.rate;
    gst_inclusive * rate / (Decimal::ONE + rate)
}

/// Calculates the GST saved in each lease year.
///
/// Vehicle GST is `price * rate / years`, matching how lease providers quote
/// it, rather than the GST component of the inclusive price.
pub fn calculate_annual_gst_savings(
    vehicle_price: Decimal,
    annual_running_costs: Decimal,
    duration_years: u32,
    policy: &PolicyConfig,
) -> GstSavings {
    let vehicle = if duration_years == 0 {
        Decimal::ZERO
    } else {
        vehicle_price * policy.gst.rate / Decimal::from(duration_years)
    };

    GstSavings {
        vehicle,
        running_costs: gst_component(annual_running_costs, policy),
    }
}
