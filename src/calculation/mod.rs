//! Calculation logic for the novated lease engine.
//!
//! This module contains the income tax engine, the ATO residual table,
//! amortization of the financed amount, statutory-method FBT and GST savings,
//! plus the aggregators built on them: the yearly schedule, whole-of-lease
//! totals, buy-versus-lease comparison, post-lease scenarios, quote
//! validation, lease account tracking and saved-quote comparison.
//!
//! All money is carried as [`rust_decimal::Decimal`] at full precision;
//! rounding to cents or whole dollars happens only in display text.

mod amortization;
mod analysis;
mod buy_vs_lease;
mod common;
mod cost_breakdown;
mod fbt;
mod gst;
mod lease_account;
mod post_lease;
mod quote_comparison;
mod residual;
mod tax;
mod validation;
mod yearly_breakdown;

pub use amortization::{
    AmortizationSchedule, AmortizationYear, MONTHS_PER_YEAR, amortize, calculate_finance_charge,
    monthly_payment,
};
pub use analysis::analyze_quote;
pub use buy_vs_lease::{calculate_buy_vs_lease, compare_buy_vs_lease, estimated_market_value};
pub use common::{ratio_or_zero, round_half_up, whole_dollars};
pub use cost_breakdown::{calculate_cost_breakdown, summarize_cost_breakdown};
pub use fbt::{calculate_fbt, calculate_fbt_for_year, fbt_base_value, statutory_rate};
pub use gst::{GstSavings, calculate_annual_gst_savings, gst_component};
pub use lease_account::track_lease_account;
pub use post_lease::calculate_post_lease_scenarios;
pub use quote_comparison::compare_quotes;
pub use residual::{calculate_residual_value, financed_amount, has_residual_rate, residual_rate};
pub use tax::{calculate_income_tax, calculate_tax_impact, find_bracket};
pub use validation::{FORTNIGHTS_PER_YEAR, validate_against_breakdown, validate_quote};
pub use yearly_breakdown::{calculate_yearly_breakdown, fees_for_year, marginal_rate};
