//! Whole-of-lease cost totals.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{CostBreakdown, QuoteInput, YearEntry};

use super::residual::calculate_residual_value;
use super::yearly_breakdown::calculate_yearly_breakdown;

/// Sums a yearly schedule into whole-of-lease totals.
///
/// The gross cost counts the full vehicle price plus finance charges, running
/// costs and FBT; fees are reported separately. The residual is added only to
/// the total net cost.
pub fn summarize_cost_breakdown(
    quote: &QuoteInput,
    years: &[YearEntry],
    policy: &PolicyConfig,
) -> CostBreakdown {
    let sum = |field: fn(&YearEntry) -> Decimal| -> Decimal { years.iter().map(field).sum() };

    let vehicle_price = quote.vehicle.purchase_price;
    let finance_charges = sum(|y| y.interest_payment);
    let running_costs = sum(|y| y.running_costs);
    let fbt_cost = sum(|y| y.fbt_cost);
    let tax_savings = sum(|y| y.tax_savings);
    let gst_savings = sum(|y| y.gst_savings);

    let admin_fees = quote.fees.annual_admin_fees() * Decimal::from(years.len());
    let residual_value =
        calculate_residual_value(vehicle_price, quote.lease_terms.duration_years, policy);

    let total_gross_cost = vehicle_price + finance_charges + running_costs + fbt_cost;
    let net_cost_before_residual = total_gross_cost - tax_savings - gst_savings;

    CostBreakdown {
        vehicle_price,
        finance_charges,
        establishment_fee: quote.fees.establishment_fee,
        admin_fees,
        running_costs,
        fbt_cost,
        end_of_lease_fee: quote.fees.end_of_lease_fee,
        total_gross_cost,
        tax_savings,
        gst_savings,
        net_cost_before_residual,
        residual_value,
        total_net_cost: net_cost_before_residual + residual_value,
    }
}

/// Calculates the whole-of-lease totals for a quote.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::calculate_cost_breakdown;
/// use novated_lease_engine::config::PolicyConfig;
/// use novated_lease_engine::import::default_quote;
///
/// let breakdown = calculate_cost_breakdown(&default_quote(), &PolicyConfig::default());
/// assert_eq!(
///     breakdown.total_net_cost,
///     breakdown.net_cost_before_residual + breakdown.residual_value
/// );
/// ```
pub fn calculate_cost_breakdown(quote: &QuoteInput, policy: &PolicyConfig) -> CostBreakdown {
    let years = calculate_yearly_breakdown(quote, policy);
    summarize_cost_breakdown(quote, &years, policy)
}
