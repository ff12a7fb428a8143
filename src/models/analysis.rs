//! Full analysis result model.
//!
//! [`LeaseAnalysis`] bundles every output the presentation layer renders for
//! one quote, together with warnings about inputs the engine had to clamp.

use serde::{Deserialize, Serialize};

use super::{
    BuyVsLeaseComparison, CostBreakdown, LeaseAccountSnapshot, PostLeaseScenario,
    QuoteValidation, TaxImpact, YearEntry,
};

/// How much attention a warning deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational.
    Low,
    /// The result may differ from what the quote intends.
    Medium,
    /// The result is likely misleading.
    High,
}

/// A condition that did not stop the calculation but changed how it ran.
///
/// # Example
///
/// ```
/// use novated_lease_engine::models::{AnalysisWarning, WarningSeverity};
///
/// let warning = AnalysisWarning {
///     code: "RESIDUAL_TERM_FALLBACK".to_string(),
///     message: "No ATO residual rate for a 7 year term".to_string(),
///     severity: WarningSeverity::Medium,
/// };
/// assert_eq!(warning.severity, WarningSeverity::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// How serious the warning is.
    pub severity: WarningSeverity,
}

/// Everything computed for a single quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseAnalysis {
    /// Year-by-year schedule.
    pub yearly_breakdown: Vec<YearEntry>,
    /// Whole-of-lease totals.
    pub cost_breakdown: CostBreakdown,
    /// Cumulative finance account position per year.
    pub lease_account: Vec<LeaseAccountSnapshot>,
    /// Tax with and without packaging.
    pub tax_impact: TaxImpact,
    /// Buy outright versus lease.
    pub buy_vs_lease: BuyVsLeaseComparison,
    /// The four end-of-lease outcomes.
    pub post_lease_scenarios: Vec<PostLeaseScenario>,
    /// Quote figures checked against the engine.
    pub validation: QuoteValidation,
    /// Clamps and fallbacks applied along the way.
    pub warnings: Vec<AnalysisWarning>,
}
