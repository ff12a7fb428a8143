//! Scenario and comparison models.
//!
//! Buy-vs-lease positions, end-of-lease scenarios and side-by-side comparison
//! of saved quotes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CostBreakdown;

/// Paying cash for the vehicle instead of leasing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyOutrightPosition {
    /// Cash price of the vehicle.
    pub vehicle_price: Decimal,
    /// Running costs over the term, with no tax benefit.
    pub running_costs: Decimal,
    /// Simple return forgone on the cash.
    pub opportunity_cost: Decimal,
    /// Price plus running costs plus opportunity cost.
    pub total_cost: Decimal,
    /// Estimated market value at the end of the term.
    pub vehicle_value_at_end: Decimal,
    /// Value at end less total cost; negative is a net cost.
    pub net_position: Decimal,
}

/// The novated lease side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovatedLeasePosition {
    /// Net lease cost before the residual.
    pub total_cost_before_residual: Decimal,
    /// Residual paid to keep the vehicle.
    pub residual_payment: Decimal,
    /// Net cost including the residual.
    pub total_cost: Decimal,
    /// Estimated market value at the end of the term.
    pub vehicle_value_at_end: Decimal,
    /// Value at end less total cost; negative is a net cost.
    pub net_position: Decimal,
}

/// Buy outright versus novated lease over the same term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyVsLeaseComparison {
    /// Cash purchase branch.
    pub buy_outright: BuyOutrightPosition,
    /// Lease branch.
    pub novated_lease: NovatedLeasePosition,
    /// Lease net position less buy net position; positive favours the lease.
    pub difference: Decimal,
    /// Human-readable summary of which option comes out ahead.
    pub recommendation: String,
}

/// What the employee does when the lease ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    /// Pay the residual and keep the vehicle.
    Purchase,
    /// Sell the vehicle and pay out the residual.
    Sell,
    /// Hand the vehicle back to the lessor.
    Return,
    /// Refinance the residual into a new lease.
    Extend,
}

/// One projected end-of-lease outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLeaseScenario {
    /// The scenario.
    pub scenario_type: ScenarioType,
    /// Residual owed at the end of the term.
    pub residual_value: Decimal,
    /// Estimated market value at the end of the term.
    pub estimated_market_value: Decimal,
    /// What the scenario involves.
    pub description: String,
    /// Net money in (positive) or out (negative) for the scenario.
    pub financial_outcome: Decimal,
    /// Guidance for the scenario.
    pub recommendation: String,
}

/// One saved quote's totals within a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteComparisonEntry {
    /// Saved quote id.
    pub id: String,
    /// Saved quote name.
    pub name: String,
    /// The quote's whole-of-lease totals.
    pub breakdown: CostBreakdown,
}

/// Side-by-side totals for several saved quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteComparison {
    /// Entries in the order the quotes were given.
    pub entries: Vec<QuoteComparisonEntry>,
    /// Id of the quote with the lowest total net cost.
    pub best_net_cost_id: Option<String>,
    /// Id of the quote with the highest tax savings.
    pub best_tax_savings_id: Option<String>,
}
