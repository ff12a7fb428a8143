//! Full analysis of a single quote.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{AnalysisWarning, LeaseAnalysis, QuoteInput, WarningSeverity};

use super::buy_vs_lease::compare_buy_vs_lease;
use super::cost_breakdown::summarize_cost_breakdown;
use super::lease_account::track_lease_account;
use super::post_lease::calculate_post_lease_scenarios;
use super::residual::has_residual_rate;
use super::tax::calculate_tax_impact;
use super::validation::validate_against_breakdown;
use super::yearly_breakdown::calculate_yearly_breakdown;

/// Validates a quote and runs every calculation over it.
///
/// The yearly schedule is computed once and shared by the cost breakdown,
/// lease account and tax impact. The tax impact packages year 1's principal,
/// interest and running costs.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidQuote`] when a field is
/// outside its domain.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::analyze_quote;
/// use novated_lease_engine::config::PolicyConfig;
/// use novated_lease_engine::import::default_quote;
///
/// let analysis = analyze_quote(&default_quote(), &PolicyConfig::default()).unwrap();
/// assert_eq!(analysis.yearly_breakdown.len(), 3);
/// assert_eq!(analysis.post_lease_scenarios.len(), 4);
/// ```
pub fn analyze_quote(quote: &QuoteInput, policy: &PolicyConfig) -> EngineResult<LeaseAnalysis> {
    quote.validate()?;

    let yearly_breakdown = calculate_yearly_breakdown(quote, policy);
    let cost_breakdown = summarize_cost_breakdown(quote, &yearly_breakdown, policy);
    let lease_account = track_lease_account(&yearly_breakdown, cost_breakdown.residual_value);

    let annual_package_amount = yearly_breakdown
        .first()
        .map(|first| first.principal_payment + first.interest_payment + first.running_costs)
        .unwrap_or(Decimal::ZERO);
    let tax_impact = calculate_tax_impact(&quote.employee, annual_package_amount, policy);

    let buy_vs_lease = compare_buy_vs_lease(quote, &cost_breakdown, policy);
    let post_lease_scenarios = calculate_post_lease_scenarios(quote, policy);
    let validation = validate_against_breakdown(quote, &cost_breakdown, policy);
    let warnings = collect_warnings(quote, policy);

    for warning in &warnings {
        warn!(code = %warning.code, message = %warning.message, "Analysis warning");
    }

    info!(
        duration_years = quote.lease_terms.duration_years,
        total_net_cost = %cost_breakdown.total_net_cost,
        overall_assessment = ?validation.overall_assessment,
        warning_count = warnings.len(),
        "Quote analysed"
    );

    Ok(LeaseAnalysis {
        yearly_breakdown,
        cost_breakdown,
        lease_account,
        tax_impact,
        buy_vs_lease,
        post_lease_scenarios,
        validation,
        warnings,
    })
}

fn collect_warnings(quote: &QuoteInput, policy: &PolicyConfig) -> Vec<AnalysisWarning> {
    let mut warnings = Vec::new();
    let duration = quote.lease_terms.duration_years;

    if !has_residual_rate(duration, policy) {
        warnings.push(AnalysisWarning {
            code: "RESIDUAL_TERM_FALLBACK".to_string(),
            message: format!(
                "No ATO residual rate for a {} year term; the {} year rate was used",
                duration, policy.residual.fallback_years
            ),
            severity: WarningSeverity::Medium,
        });
    }

    if quote.lease_terms.interest_rate.is_zero() {
        warnings.push(AnalysisWarning {
            code: "ZERO_INTEREST_RATE".to_string(),
            message: "Interest rate is zero; the financed amount is repaid in equal instalments"
                .to_string(),
            severity: WarningSeverity::Low,
        });
    }

    if quote.employee.has_help_debt && quote.employee.help_repayment_rate.is_none() {
        warnings.push(AnalysisWarning {
            code: "HELP_RATE_MISSING".to_string(),
            message: "HELP debt is set without a repayment rate; no HELP repayment was applied"
                .to_string(),
            severity: WarningSeverity::Medium,
        });
    }

    if !quote.fbt.use_statutory_method {
        warnings.push(AnalysisWarning {
            code: "FBT_NOT_MODELLED".to_string(),
            message: "Only the statutory formula method is modelled; FBT is reported as zero"
                .to_string(),
            severity: WarningSeverity::Medium,
        });
    }

    warnings
}
