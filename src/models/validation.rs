//! Quote validation models.
//!
//! A [`QuoteValidation`] lists where a provider's stated figures disagree
//! with the engine's own recomputation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quote figure the validator knows how to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscrepancyField {
    /// Residual (balloon) payment.
    ResidualValue,
    /// Total interest.
    FinanceCharges,
    /// Fortnightly net deduction.
    FortnightlyPayment,
    /// Monthly net deduction.
    MonthlyPayment,
    /// Total finance repayments.
    TotalPayments,
    /// Income tax savings.
    TaxSavings,
    /// GST savings.
    GstSavings,
    /// Total lease cost, with or without residual.
    TotalLeaseCost,
}

impl DiscrepancyField {
    /// Savings estimates are softer than costs and get the wider threshold.
    pub fn is_savings(self) -> bool {
        matches!(self, Self::TaxSavings | Self::GstSavings)
    }

    /// Display label for the field.
    pub fn label(self) -> &'static str {
        match self {
            Self::ResidualValue => "Residual/Balloon Payment",
            Self::FinanceCharges => "Total Interest Charges",
            Self::FortnightlyPayment => "Fortnightly Payment",
            Self::MonthlyPayment => "Monthly Payment",
            Self::TotalPayments => "Total Finance Payments",
            Self::TaxSavings => "Tax Savings",
            Self::GstSavings => "GST Savings",
            Self::TotalLeaseCost => "Total Lease Cost",
        }
    }
}

/// One compared figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDiscrepancy {
    /// Which figure was compared.
    pub field: DiscrepancyField,
    /// Display label, qualified for total lease cost.
    pub label: String,
    /// The quote's figure.
    pub quote_value: Decimal,
    /// The engine's figure.
    pub calculated_value: Decimal,
    /// `quote_value - calculated_value`.
    pub difference: Decimal,
    /// Difference as a percentage of the calculated value; zero when that is zero.
    pub percentage_diff: Decimal,
    /// Whether the difference exceeds the field's threshold.
    pub is_significant: bool,
    /// Why a significant difference matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Overall verdict, bucketed on the number of significant discrepancies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallAssessment {
    /// No significant discrepancies.
    Accurate,
    /// One or two.
    MinorDifferences,
    /// Three or four.
    SignificantDifferences,
    /// Five or more.
    MajorConcerns,
}

impl OverallAssessment {
    /// Buckets a count of significant discrepancies.
    pub fn from_significant_count(count: usize) -> Self {
        match count {
            0 => Self::Accurate,
            1..=2 => Self::MinorDifferences,
            3..=4 => Self::SignificantDifferences,
            _ => Self::MajorConcerns,
        }
    }
}

/// The result of validating a quote's stated figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteValidation {
    /// One entry per figure the quote supplied.
    pub discrepancies: Vec<QuoteDiscrepancy>,
    /// Whether any discrepancy is significant.
    pub has_significant_issues: bool,
    /// Count-based verdict.
    pub overall_assessment: OverallAssessment,
}
