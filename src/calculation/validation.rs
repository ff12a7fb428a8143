//! Quote validation.
//!
//! Compares the figures a provider states on a quote against the engine's own
//! recomputation. Each supplied figure becomes one [`QuoteDiscrepancy`];
//! figures the quote omits are skipped.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConfig;
use crate::models::{
    CostBreakdown, DiscrepancyField, OverallAssessment, QuoteDiscrepancy, QuoteInput,
    QuoteValidation,
};

use super::common::ratio_or_zero;
use super::cost_breakdown::calculate_cost_breakdown;

/// Fortnights in a year.
pub const FORTNIGHTS_PER_YEAR: u32 = 26;

/// Validates a quote's stated figures against `breakdown`.
///
/// Payments are the net cost before residual spread evenly across the term.
/// The total lease cost is compared with whichever engine total (with or
/// without the residual) it is strictly closer to; ties compare without.
pub fn validate_against_breakdown(
    quote: &QuoteInput,
    breakdown: &CostBreakdown,
    policy: &PolicyConfig,
) -> QuoteValidation {
    let Some(provided) = &quote.quote_provided_values else {
        return QuoteValidation {
            discrepancies: Vec::new(),
            has_significant_issues: false,
            overall_assessment: OverallAssessment::Accurate,
        };
    };

    let annual_net_cost = ratio_or_zero(
        breakdown.net_cost_before_residual,
        Decimal::from(quote.lease_terms.duration_years),
    );
    let financed = breakdown.vehicle_price - breakdown.residual_value;

    let checks = [
        (
            DiscrepancyField::ResidualValue,
            provided.residual_value,
            breakdown.residual_value,
        ),
        (
            DiscrepancyField::FinanceCharges,
            provided.total_finance_charges,
            breakdown.finance_charges,
        ),
        (
            DiscrepancyField::FortnightlyPayment,
            provided.fortnightly_payment,
            annual_net_cost / Decimal::from(FORTNIGHTS_PER_YEAR),
        ),
        (
            DiscrepancyField::MonthlyPayment,
            provided.monthly_payment,
            annual_net_cost / Decimal::from(12),
        ),
        (
            DiscrepancyField::TotalPayments,
            provided.total_payments,
            financed + breakdown.finance_charges,
        ),
        (
            DiscrepancyField::TaxSavings,
            provided.tax_savings,
            breakdown.tax_savings,
        ),
        (
            DiscrepancyField::GstSavings,
            provided.gst_savings,
            breakdown.gst_savings,
        ),
    ];

    let mut discrepancies: Vec<QuoteDiscrepancy> = checks
        .into_iter()
        .filter_map(|(field, claimed, calculated)| {
            claimed.map(|claimed| {
                compare(field, field.label().to_string(), claimed, calculated, policy)
            })
        })
        .collect();

    if let Some(claimed) = provided.total_lease_cost {
        let with_residual = breakdown.total_net_cost;
        let without_residual = breakdown.net_cost_before_residual;
        let includes_residual =
            (claimed - with_residual).abs() < (claimed - without_residual).abs();

        let (calculated, qualifier) = if includes_residual {
            (with_residual, "(incl. residual)")
        } else {
            (without_residual, "(excl. residual)")
        };
        let label = format!("{} {}", DiscrepancyField::TotalLeaseCost.label(), qualifier);
        discrepancies.push(compare(
            DiscrepancyField::TotalLeaseCost,
            label,
            claimed,
            calculated,
            policy,
        ));
    }

    let significant = discrepancies.iter().filter(|d| d.is_significant).count();
    debug!(
        compared = discrepancies.len(),
        significant = significant,
        "Validated quote figures"
    );

    QuoteValidation {
        discrepancies,
        has_significant_issues: significant > 0,
        overall_assessment: OverallAssessment::from_significant_count(significant),
    }
}

/// Calculates the cost breakdown and validates the quote's figures against it.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::validate_quote;
/// use novated_lease_engine::config::PolicyConfig;
/// use novated_lease_engine::import::default_quote;
/// use novated_lease_engine::models::OverallAssessment;
///
/// let validation = validate_quote(&default_quote(), &PolicyConfig::default());
/// assert!(validation.discrepancies.is_empty());
/// assert_eq!(validation.overall_assessment, OverallAssessment::Accurate);
/// ```
pub fn validate_quote(quote: &QuoteInput, policy: &PolicyConfig) -> QuoteValidation {
    let breakdown = calculate_cost_breakdown(quote, policy);
    validate_against_breakdown(quote, &breakdown, policy)
}

fn compare(
    field: DiscrepancyField,
    label: String,
    quote_value: Decimal,
    calculated_value: Decimal,
    policy: &PolicyConfig,
) -> QuoteDiscrepancy {
    let difference = quote_value - calculated_value;
    let percentage_diff =
        ratio_or_zero(difference, calculated_value).saturating_mul(Decimal::ONE_HUNDRED);

    let threshold = if field.is_savings() {
        policy.validation.savings_threshold_percent
    } else {
        policy.validation.cost_threshold_percent
    };
    let is_significant = percentage_diff.abs() > threshold;

    QuoteDiscrepancy {
        field,
        label,
        quote_value,
        calculated_value,
        difference,
        percentage_diff,
        is_significant,
        explanation: is_significant.then(|| explain(field, difference > Decimal::ZERO)),
    }
}

fn explain(field: DiscrepancyField, higher: bool) -> String {
    let direction = if higher { "higher" } else { "lower" };
    let advice = match (field, higher) {
        (DiscrepancyField::ResidualValue, true) => "This increases the balloon payment.",
        (DiscrepancyField::ResidualValue, false) => {
            "It may fall below the ATO minimum residual for this term."
        }
        (DiscrepancyField::FinanceCharges, true) => {
            "The effective interest rate may be above the advertised rate."
        }
        (DiscrepancyField::FinanceCharges, false) => "Check how the interest was calculated.",
        (DiscrepancyField::FortnightlyPayment | DiscrepancyField::MonthlyPayment, true) => {
            "Extra fees or different tax assumptions may be included."
        }
        (DiscrepancyField::FortnightlyPayment | DiscrepancyField::MonthlyPayment, false) => {
            "Check which costs the payment covers."
        }
        (DiscrepancyField::TotalPayments, true) => {
            "Additional amounts may have been financed."
        }
        (DiscrepancyField::TotalPayments, false) => "Check the financed amount and term.",
        (DiscrepancyField::TaxSavings, true) => "The estimate may rely on optimistic assumptions.",
        (DiscrepancyField::TaxSavings, false) => "The estimate appears conservative.",
        (DiscrepancyField::GstSavings, true) => "Check which items GST credits are claimed on.",
        (DiscrepancyField::GstSavings, false) => "The GST estimate may be conservative.",
        (DiscrepancyField::TotalLeaseCost, true) => {
            "There may be fees or costs that are not clearly disclosed."
        }
        (DiscrepancyField::TotalLeaseCost, false) => "Check which costs the total includes.",
    };
    format!(
        "{} on the quote is {} than calculated. {}",
        field.label(),
        direction,
        advice
    )
}
