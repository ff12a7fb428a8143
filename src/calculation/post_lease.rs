//! End-of-lease scenario projections.
//!
//! Every scenario compares the residual owed against the vehicle's estimated
//! market value at the end of the term.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{PostLeaseScenario, QuoteInput, ScenarioType};

use super::buy_vs_lease::estimated_market_value;
use super::common::whole_dollars;
use super::residual::calculate_residual_value;

/// Projects the purchase, sell, return and extend outcomes, in that order.
///
/// Purchase and sell share the outcome `market value - residual`. Return also
/// pays the handling cost. Extend reports the interest cost of refinancing the
/// residual over the configured extension term, as a negative outcome.
pub fn calculate_post_lease_scenarios(
    quote: &QuoteInput,
    policy: &PolicyConfig,
) -> Vec<PostLeaseScenario> {
    let price = quote.vehicle.purchase_price;
    let years = quote.lease_terms.duration_years;

    let residual = calculate_residual_value(price, years, policy);
    let market_value = estimated_market_value(price, years, policy);
    let equity = market_value - residual;

    let post_lease = &policy.post_lease;
    let return_outcome = equity - post_lease.return_handling_cost;
    let extension_interest =
        residual * post_lease.extension_interest_rate * Decimal::from(post_lease.extension_years);

    let scenario = |scenario_type, description: String, outcome, recommendation: String| {
        PostLeaseScenario {
            scenario_type,
            residual_value: residual,
            estimated_market_value: market_value,
            description,
            financial_outcome: outcome,
            recommendation,
        }
    };

    let purchase_advice = if equity > Decimal::ZERO {
        format!(
            "Worth considering: the vehicle is estimated to be worth ${} more than the residual",
            whole_dollars(equity)
        )
    } else {
        "The residual is above the estimated market value; consider selling or returning instead"
            .to_string()
    };

    let sell_advice = if equity > Decimal::ZERO {
        format!(
            "A private sale could leave about ${} after paying out the residual",
            whole_dollars(equity)
        )
    } else {
        format!(
            "Selling may leave a shortfall of about ${} to cover from savings",
            whole_dollars(equity.abs())
        )
    };

    vec![
        scenario(
            ScenarioType::Purchase,
            "Pay the residual and keep the vehicle".to_string(),
            equity,
            purchase_advice,
        ),
        scenario(
            ScenarioType::Sell,
            "Pay the residual, then sell the vehicle privately".to_string(),
            equity,
            sell_advice,
        ),
        scenario(
            ScenarioType::Return,
            format!(
                "Return the vehicle to the lessor (about ${} in handling costs)",
                whole_dollars(post_lease.return_handling_cost)
            ),
            return_outcome,
            "Simplest exit, though dealer margins usually leave less than a private sale"
                .to_string(),
        ),
        scenario(
            ScenarioType::Extend,
            format!(
                "Refinance the residual into a new {} year lease",
                post_lease.extension_years
            ),
            -extension_interest,
            format!(
                "Keeps the salary packaging benefits at an estimated ${} in extra interest",
                whole_dollars(extension_interest)
            ),
        ),
    ]
}
