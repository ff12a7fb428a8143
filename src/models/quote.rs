//! Quote input model.
//!
//! A [`QuoteInput`] is everything a lease provider's quote tells us, plus the
//! employee's tax profile. It is deserialized from the camelCase JSON schema
//! shared with the import and sharing collaborators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Longest lease term accepted, in years.
pub const MAX_DURATION_YEARS: u32 = 30;

/// Largest money amount accepted in any quote field, in dollars.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// The vehicle being leased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    /// Manufacturer (e.g., "Toyota").
    #[serde(default)]
    pub make: String,
    /// Model name (e.g., "RAV4").
    #[serde(default)]
    pub model: String,
    /// Model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// GST-inclusive purchase price; the base of every calculation.
    pub purchase_price: Decimal,
    /// Drive-away price quoted by the dealer, if different.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driveaway_price: Option<Decimal>,
}

/// Finance terms of the lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseTerms {
    /// Lease length in whole years.
    pub duration_years: u32,
    /// Annual interest rate as a decimal (0.07 for 7%).
    pub interest_rate: Decimal,
    /// Expected annual distance travelled.
    #[serde(default)]
    pub annual_kilometers: u32,
}

/// Lease provider fees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    /// One-time fee charged in the first year.
    pub establishment_fee: Decimal,
    /// Recurring monthly administration fee.
    pub monthly_admin_fee: Decimal,
    /// One-time fee charged in the final year.
    pub end_of_lease_fee: Decimal,
}

impl Fees {
    /// Admin fees for a full year.
    pub fn annual_admin_fees(&self) -> Decimal {
        self.monthly_admin_fee * Decimal::from(12)
    }
}

/// Annual running costs, all GST-inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningCosts {
    /// Fuel or charging.
    pub fuel_per_year: Decimal,
    /// Comprehensive insurance.
    pub insurance_per_year: Decimal,
    /// Servicing and repairs.
    pub maintenance_per_year: Decimal,
    /// Registration and CTP.
    pub registration_per_year: Decimal,
    /// Tyre replacement.
    pub tyres_per_year: Decimal,
}

impl RunningCosts {
    /// Sum of the five categories for one year.
    pub fn annual_total(&self) -> Decimal {
        self.fuel_per_year
            + self.insurance_per_year
            + self.maintenance_per_year
            + self.registration_per_year
            + self.tyres_per_year
    }
}

/// Fringe Benefits Tax settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FbtSettings {
    /// Annual post-tax amount the employee contributes towards the benefit.
    #[serde(default)]
    pub employee_contribution_amount: Decimal,
    /// Whether FBT is calculated with the statutory formula method.
    #[serde(default = "default_use_statutory_method")]
    pub use_statutory_method: bool,
    /// Statutory fraction; `None` means the policy default. `Some(0)` is a
    /// valid exempt vehicle and must not be treated as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statutory_rate: Option<Decimal>,
}

fn default_use_statutory_method() -> bool {
    true
}

impl Default for FbtSettings {
    fn default() -> Self {
        Self {
            employee_contribution_amount: Decimal::ZERO,
            use_statutory_method: true,
            statutory_rate: None,
        }
    }
}

/// The employee's income and tax profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    /// Gross annual salary.
    pub annual_salary: Decimal,
    /// Taxable income, which may differ from salary.
    pub taxable_income: Decimal,
    /// Whether the employee repays a HELP debt.
    #[serde(rename = "hasHELPDebt", default)]
    pub has_help_debt: bool,
    /// HELP repayment rate as a decimal; only used when `has_help_debt` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_repayment_rate: Option<Decimal>,
}

/// Figures stated on the provider's quote, used only for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteProvidedValues {
    /// Residual (balloon) payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_value: Option<Decimal>,
    /// Total interest over the term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_finance_charges: Option<Decimal>,
    /// Fortnightly net pay deduction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fortnightly_payment: Option<Decimal>,
    /// Monthly net pay deduction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Decimal>,
    /// Total of all finance payments over the term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_payments: Option<Decimal>,
    /// Total lease cost, with or without the residual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lease_cost: Option<Decimal>,
    /// Claimed income tax savings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_savings: Option<Decimal>,
    /// Claimed GST savings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_savings: Option<Decimal>,
}

/// How much the provider lets the packaged budget move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFlexibility {
    /// No adjustments allowed.
    Fixed,
    /// Adjustable with notice.
    Flexible,
    /// Periodic adjustments allowed.
    Adjustable,
    /// The quote does not say.
    Unknown,
}

/// Descriptive terms extracted from a quote. Never used in calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteMetadata {
    /// Name of the leasing provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaser_name: Option<String>,
    /// Budget adjustment policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_flexibility: Option<BudgetFlexibility>,
    /// Whether pre-tax top-ups are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_tax_top_up: Option<bool>,
    /// Terms unfavourable to the employee.
    #[serde(default)]
    pub customer_warnings: Vec<String>,
    /// Other non-standard terms.
    #[serde(default)]
    pub extracted_terms: Vec<String>,
}

/// A complete lease quote.
///
/// # Example
///
/// ```
/// use novated_lease_engine::models::QuoteInput;
///
/// let json = r#"{
///     "vehicle": { "make": "Toyota", "model": "RAV4", "purchasePrice": 50000 },
///     "leaseTerms": { "durationYears": 3, "interestRate": 0.07 },
///     "employee": { "annualSalary": 80000, "taxableIncome": 80000 }
/// }"#;
/// let quote: QuoteInput = serde_json::from_str(json).unwrap();
/// assert_eq!(quote.lease_terms.duration_years, 3);
/// assert!(quote.fbt.use_statutory_method);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    /// The vehicle.
    pub vehicle: VehicleDetails,
    /// Finance terms.
    pub lease_terms: LeaseTerms,
    /// Provider fees.
    #[serde(default)]
    pub fees: Fees,
    /// Annual running costs.
    #[serde(default)]
    pub running_costs: RunningCosts,
    /// FBT settings.
    #[serde(default)]
    pub fbt: FbtSettings,
    /// Employee tax profile.
    pub employee: EmployeeProfile,
    /// Figures claimed by the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_provided_values: Option<QuoteProvidedValues>,
    /// Descriptive quote terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<QuoteMetadata>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_notes: Option<String>,
}

impl QuoteInput {
    /// Checks every field against its domain.
    ///
    /// Money must lie in `[0, MAX_AMOUNT]`, rates must lie in `[0, 1]` and the
    /// lease must last between one and [`MAX_DURATION_YEARS`] years. Terms
    /// longer than the residual table are allowed; they use the fallback
    /// residual rate.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("vehicle.purchasePrice", self.vehicle.purchase_price)?;
        if let Some(price) = self.vehicle.driveaway_price {
            non_negative("vehicle.driveawayPrice", price)?;
        }

        let duration = self.lease_terms.duration_years;
        if duration == 0 || duration > MAX_DURATION_YEARS {
            return Err(EngineError::InvalidQuote {
                field: "leaseTerms.durationYears".to_string(),
                message: format!(
                    "must be between 1 and {} years (got {})",
                    MAX_DURATION_YEARS, duration
                ),
            });
        }
        unit_interval("leaseTerms.interestRate", self.lease_terms.interest_rate)?;

        non_negative("fees.establishmentFee", self.fees.establishment_fee)?;
        non_negative("fees.monthlyAdminFee", self.fees.monthly_admin_fee)?;
        non_negative("fees.endOfLeaseFee", self.fees.end_of_lease_fee)?;

        let costs = &self.running_costs;
        non_negative("runningCosts.fuelPerYear", costs.fuel_per_year)?;
        non_negative("runningCosts.insurancePerYear", costs.insurance_per_year)?;
        non_negative("runningCosts.maintenancePerYear", costs.maintenance_per_year)?;
        non_negative("runningCosts.registrationPerYear", costs.registration_per_year)?;
        non_negative("runningCosts.tyresPerYear", costs.tyres_per_year)?;

        non_negative(
            "fbt.employeeContributionAmount",
            self.fbt.employee_contribution_amount,
        )?;
        if let Some(rate) = self.fbt.statutory_rate {
            unit_interval("fbt.statutoryRate", rate)?;
        }

        non_negative("employee.annualSalary", self.employee.annual_salary)?;
        non_negative("employee.taxableIncome", self.employee.taxable_income)?;
        if let Some(rate) = self.employee.help_repayment_rate {
            unit_interval("employee.helpRepaymentRate", rate)?;
        }

        if let Some(provided) = &self.quote_provided_values {
            let claimed = [
                ("quoteProvidedValues.residualValue", provided.residual_value),
                (
                    "quoteProvidedValues.totalFinanceCharges",
                    provided.total_finance_charges,
                ),
                (
                    "quoteProvidedValues.fortnightlyPayment",
                    provided.fortnightly_payment,
                ),
                ("quoteProvidedValues.monthlyPayment", provided.monthly_payment),
                ("quoteProvidedValues.totalPayments", provided.total_payments),
                ("quoteProvidedValues.totalLeaseCost", provided.total_lease_cost),
                ("quoteProvidedValues.taxSavings", provided.tax_savings),
                ("quoteProvidedValues.gstSavings", provided.gst_savings),
            ];
            for (field, value) in claimed {
                if let Some(value) = value {
                    non_negative(field, value)?;
                }
            }
        }

        Ok(())
    }
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidQuote {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    if value > Decimal::from(MAX_AMOUNT) {
        return Err(EngineError::InvalidQuote {
            field: field.to_string(),
            message: format!("must not exceed {} (got {})", MAX_AMOUNT, value),
        });
    }
    Ok(())
}

fn unit_interval(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidQuote {
            field: field.to_string(),
            message: format!("must be a decimal between 0 and 1 (got {})", value),
        });
    }
    Ok(())
}
