//! Buy outright versus novated lease comparison.
//!
//! Buying outright pays the price up front, bears running costs with no tax
//! benefit and forgoes a simple return on the cash. Both branches end holding
//! the same depreciated vehicle, so the comparison is on net position.

use rust_decimal::{Decimal, MathematicalOps};

use crate::config::PolicyConfig;
use crate::models::{
    BuyOutrightPosition, BuyVsLeaseComparison, CostBreakdown, NovatedLeasePosition, QuoteInput,
};

use super::common::whole_dollars;
use super::cost_breakdown::calculate_cost_breakdown;

/// Estimates the vehicle's market value after `years` of flat-rate depreciation.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::estimated_market_value;
/// use novated_lease_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(
///     estimated_market_value(Decimal::from(40_000), 1, &policy),
///     Decimal::from(34_000)
/// );
/// ```
pub fn estimated_market_value(vehicle_price: Decimal, years: u32, policy: &PolicyConfig) -> Decimal {
    let retained = Decimal::ONE - policy.market.depreciation_rate;
    vehicle_price * retained.powu(u64::from(years))
}

/// Compares buying outright against the lease described by `breakdown`.
///
/// A positive `difference` means the lease leaves the employee better off.
/// Zero counts as favouring buying.
pub fn compare_buy_vs_lease(
    quote: &QuoteInput,
    breakdown: &CostBreakdown,
    policy: &PolicyConfig,
) -> BuyVsLeaseComparison {
    let price = quote.vehicle.purchase_price;
    let years = quote.lease_terms.duration_years;
    let years_dec = Decimal::from(years);
    let value_at_end = estimated_market_value(price, years, policy);

    let running_costs = quote.running_costs.annual_total() * years_dec;
    let opportunity_cost = price * policy.market.opportunity_cost_rate * years_dec;
    let buy_total = price + running_costs + opportunity_cost;

    let buy_outright = BuyOutrightPosition {
        vehicle_price: price,
        running_costs,
        opportunity_cost,
        total_cost: buy_total,
        vehicle_value_at_end: value_at_end,
        net_position: value_at_end - buy_total,
    };

    let lease_total = breakdown.net_cost_before_residual + breakdown.residual_value;
    let novated_lease = NovatedLeasePosition {
        total_cost_before_residual: breakdown.net_cost_before_residual,
        residual_payment: breakdown.residual_value,
        total_cost: lease_total,
        vehicle_value_at_end: value_at_end,
        net_position: value_at_end - lease_total,
    };

    let difference = novated_lease.net_position - buy_outright.net_position;
    let savings = whole_dollars(difference.abs());
    let recommendation = if difference > Decimal::ZERO {
        format!("Novated lease saves approximately ${}", savings)
    } else {
        format!("Buying outright saves approximately ${}", savings)
    };

    BuyVsLeaseComparison {
        buy_outright,
        novated_lease,
        difference,
        recommendation,
    }
}

/// Calculates the cost breakdown and compares it against buying outright.
pub fn calculate_buy_vs_lease(quote: &QuoteInput, policy: &PolicyConfig) -> BuyVsLeaseComparison {
    let breakdown = calculate_cost_breakdown(quote, policy);
    compare_buy_vs_lease(quote, &breakdown, policy)
}
