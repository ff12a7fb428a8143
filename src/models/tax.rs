//! Income tax result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income tax, Medicare levy and HELP repayment for one taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculation {
    /// Income the calculation was run on.
    pub gross_income: Decimal,
    /// Taxable income (equal to `gross_income` here).
    pub taxable_income: Decimal,
    /// Progressive income tax.
    pub income_tax: Decimal,
    /// Flat Medicare levy.
    pub medicare_levy: Decimal,
    /// HELP repayment, zero without a HELP debt.
    pub help_repayment: Decimal,
    /// Sum of the three components.
    pub total_tax: Decimal,
    /// Income after total tax.
    pub net_income: Decimal,
    /// Total tax as a fraction of income; zero for zero income.
    pub effective_tax_rate: Decimal,
    /// Bracket rate plus Medicare levy plus HELP rate when applicable.
    pub marginal_tax_rate: Decimal,
}

/// The employee's tax position with and without salary packaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxImpact {
    /// Annual amount packaged pre-tax (year-1 finance payments plus running costs).
    pub annual_package_amount: Decimal,
    /// Tax on the unpackaged taxable income.
    pub before_lease: TaxCalculation,
    /// Tax on the taxable income reduced by the packaged amount.
    pub after_lease: TaxCalculation,
    /// Reduction in total tax.
    pub tax_savings: Decimal,
    /// Change in take-home income once the packaged amount is accounted for.
    pub net_income_increase: Decimal,
}
