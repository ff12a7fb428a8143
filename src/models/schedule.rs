//! Lease schedule models.
//!
//! These are the year-indexed schedule ([`YearEntry`]), its whole-of-lease
//! totals ([`CostBreakdown`]) and the cumulative account view
//! ([`LeaseAccountSnapshot`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One year of the lease.
///
/// Created once per calculation in a forward pass from year 1 and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEntry {
    /// Lease year, starting at 1.
    pub year: u32,
    /// Principal repaid during the year.
    pub principal_payment: Decimal,
    /// Interest paid during the year.
    pub interest_payment: Decimal,
    /// Sum of the five running cost categories.
    pub running_costs: Decimal,
    /// Admin fees, plus the establishment fee in year 1 and the end-of-lease
    /// fee in the final year.
    pub fees: Decimal,
    /// FBT payable for the year.
    pub fbt_cost: Decimal,
    /// Income tax saved by packaging the year's recurring costs.
    pub tax_savings: Decimal,
    /// GST recovered on the vehicle and running costs.
    pub gst_savings: Decimal,
    /// Gross cost less tax and GST savings.
    pub net_cost: Decimal,
    /// Financed balance outstanding at year end, never below zero.
    pub remaining_principal: Decimal,
}

impl YearEntry {
    /// Principal, interest, running costs, fees and FBT for the year.
    pub fn gross_cost(&self) -> Decimal {
        self.principal_payment
            + self.interest_payment
            + self.running_costs
            + self.fees
            + self.fbt_cost
    }
}

/// Whole-of-lease totals.
///
/// `total_gross_cost = vehicle_price + finance_charges + running_costs + fbt_cost`,
/// `net_cost_before_residual = total_gross_cost - tax_savings - gst_savings` and
/// `total_net_cost = net_cost_before_residual + residual_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Vehicle purchase price.
    pub vehicle_price: Decimal,
    /// Total interest over the term.
    pub finance_charges: Decimal,
    /// One-time establishment fee.
    pub establishment_fee: Decimal,
    /// Admin fees over the whole term.
    pub admin_fees: Decimal,
    /// Running costs over the whole term.
    pub running_costs: Decimal,
    /// FBT over the whole term.
    pub fbt_cost: Decimal,
    /// One-time end-of-lease fee.
    pub end_of_lease_fee: Decimal,
    /// Price plus finance charges, running costs and FBT.
    pub total_gross_cost: Decimal,
    /// Total income tax savings.
    pub tax_savings: Decimal,
    /// Total GST savings.
    pub gst_savings: Decimal,
    /// Gross cost less savings, before paying the residual.
    pub net_cost_before_residual: Decimal,
    /// Residual (balloon) owed at the end of the term.
    pub residual_value: Decimal,
    /// Net cost including the residual.
    pub total_net_cost: Decimal,
}

/// Cumulative position of the lease finance account at a year end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseAccountSnapshot {
    /// Lease year, starting at 1.
    pub year: u32,
    /// Principal plus interest paid so far.
    pub paid_to_date: Decimal,
    /// Principal repaid so far.
    pub principal_repaid: Decimal,
    /// Financed balance still outstanding.
    pub remaining_balance: Decimal,
    /// Share of the financed amount repaid, as a percentage.
    pub percent_repaid: Decimal,
    /// Residual owed at the end of the lease.
    pub residual_value: Decimal,
}
