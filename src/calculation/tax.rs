//! Australian income tax calculation.
//!
//! This module computes progressive income tax, the flat Medicare levy and
//! HELP repayments for a taxable income, and the composite marginal rate that
//! scales every salary-packaging tax benefit downstream.

use rust_decimal::Decimal;

use crate::config::{PolicyConfig, TaxBracket};
use crate::models::{EmployeeProfile, TaxCalculation, TaxImpact};

use super::common::ratio_or_zero;

/// Finds the bracket an income falls in.
///
/// Brackets are searched in order and the first whose `max` is at or above
/// the income wins, so cents between two whole-dollar brackets land in the
/// upper one and are taxed from its `min` (never below its base).
pub fn find_bracket(income: Decimal, brackets: &[TaxBracket]) -> Option<&TaxBracket> {
    brackets
        .iter()
        .find(|bracket| bracket.max.is_none_or(|max| income <= max))
}

/// Calculates income tax, Medicare levy and HELP repayment.
///
/// # Arguments
///
/// * `taxable_income` - Taxable income; callers validate it is non-negative
/// * `has_help_debt` - Whether a HELP repayment applies
/// * `help_rate` - HELP repayment rate, treated as zero when absent
/// * `policy` - Brackets and Medicare levy rate
///
/// The Medicare levy is a flat rate on all income with no low-income
/// phase-in. The marginal rate is the bracket rate plus the Medicare levy plus
/// the HELP rate when a HELP debt applies.
///
/// # Examples
///
/// ```
/// use novated_lease_engine::calculation::calculate_income_tax;
/// use novated_lease_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// let tax = calculate_income_tax(Decimal::from(80_000), false, None, &policy);
/// assert_eq!(tax.marginal_tax_rate, Decimal::new(32, 2));
/// ```
pub fn calculate_income_tax(
    taxable_income: Decimal,
    has_help_debt: bool,
    help_rate: Option<Decimal>,
    policy: &PolicyConfig,
) -> TaxCalculation {
    let (income_tax, bracket_rate) =
        match find_bracket(taxable_income, &policy.income_tax.brackets) {
            Some(bracket) => {
                let above_min = (taxable_income - bracket.min).max(Decimal::ZERO);
                (bracket.base + above_min * bracket.rate, bracket.rate)
            }
            None => (Decimal::ZERO, Decimal::ZERO),
        };

    let medicare_rate = policy.income_tax.medicare_levy_rate;
    let medicare_levy = taxable_income * medicare_rate;

    let help_rate = if has_help_debt {
        help_rate.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let help_repayment = taxable_income * help_rate;

    let total_tax = income_tax + medicare_levy + help_repayment;

    TaxCalculation {
        gross_income: taxable_income,
        taxable_income,
        income_tax,
        medicare_levy,
        help_repayment,
        total_tax,
        net_income: taxable_income - total_tax,
        effective_tax_rate: ratio_or_zero(total_tax, taxable_income),
        marginal_tax_rate: bracket_rate + medicare_rate + help_rate,
    }
}

/// Calculates the employee's tax position with and without packaging.
///
/// The packaged income is the taxable income less `annual_package_amount`,
/// floored at zero.
pub fn calculate_tax_impact(
    employee: &EmployeeProfile,
    annual_package_amount: Decimal,
    policy: &PolicyConfig,
) -> TaxImpact {
    let before_lease = calculate_income_tax(
        employee.taxable_income,
        employee.has_help_debt,
        employee.help_repayment_rate,
        policy,
    );

    let packaged_income = (employee.taxable_income - annual_package_amount).max(Decimal::ZERO);
    let after_lease = calculate_income_tax(
        packaged_income,
        employee.has_help_debt,
        employee.help_repayment_rate,
        policy,
    );

    TaxImpact {
        annual_package_amount,
        tax_savings: before_lease.total_tax - after_lease.total_tax,
        net_income_increase: after_lease.net_income - before_lease.net_income
            + annual_package_amount,
        before_lease,
        after_lease,
    }
}
