//! Quote import.
//!
//! Turns the JSON text of an uploaded or pasted quote into a validated
//! [`QuoteInput`], and provides the reference quote new sessions start from.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeProfile, FbtSettings, Fees, LeaseTerms, QuoteInput, RunningCosts, VehicleDetails,
};

/// Top-level groups every quote must contain.
pub const REQUIRED_SECTIONS: [&str; 3] = ["vehicle", "leaseTerms", "employee"];

/// Parses and validates a quote from JSON text.
///
/// # Errors
///
/// - [`EngineError::MalformedQuote`] when the text is not a JSON object or a
///   field has the wrong type
/// - [`EngineError::MissingSection`] when `vehicle`, `leaseTerms` or
///   `employee` is absent
/// - [`EngineError::InvalidQuote`] when a value is outside its domain
///
/// # Examples
///
/// ```
/// use novated_lease_engine::error::EngineError;
/// use novated_lease_engine::import::parse_quote;
///
/// let result = parse_quote(r#"{ "vehicle": { "purchasePrice": 50000 } }"#);
/// assert!(matches!(result, Err(EngineError::MissingSection { .. })));
/// ```
pub fn parse_quote(text: &str) -> EngineResult<QuoteInput> {
    let value: Value = serde_json::from_str(text).map_err(|e| EngineError::MalformedQuote {
        message: e.to_string(),
    })?;

    quote_from_value(value)
}

/// Checks and validates an already-parsed JSON value as a quote.
///
/// Applies the same section, type and domain checks as [`parse_quote`].
/// The API handlers use this on request bodies.
///
/// # Errors
///
/// As for [`parse_quote`], except that the input is never unparseable text.
pub fn quote_from_value(value: Value) -> EngineResult<QuoteInput> {
    let Some(object) = value.as_object() else {
        return Err(EngineError::MalformedQuote {
            message: "expected a JSON object".to_string(),
        });
    };

    if let Some(section) = REQUIRED_SECTIONS
        .iter()
        .find(|section| object.get(**section).is_none_or(Value::is_null))
    {
        return Err(EngineError::MissingSection {
            section: section.to_string(),
        });
    }

    let quote: QuoteInput =
        serde_json::from_value(value).map_err(|e| EngineError::MalformedQuote {
            message: e.to_string(),
        })?;
    quote.validate()?;

    debug!(
        make = %quote.vehicle.make,
        model = %quote.vehicle.model,
        duration_years = quote.lease_terms.duration_years,
        "Imported quote"
    );

    Ok(quote)
}

/// The reference quote: a $50,000 Toyota RAV4 over 3 years at 7% for an
/// $80,000 salary.
pub fn default_quote() -> QuoteInput {
    QuoteInput {
        vehicle: VehicleDetails {
            make: "Toyota".to_string(),
            model: "RAV4".to_string(),
            year: Some(2024),
            purchase_price: Decimal::from(50_000),
            driveaway_price: None,
        },
        lease_terms: LeaseTerms {
            duration_years: 3,
            interest_rate: Decimal::new(7, 2),
            annual_kilometers: 15_000,
        },
        fees: Fees {
            establishment_fee: Decimal::from(500),
            monthly_admin_fee: Decimal::from(10),
            end_of_lease_fee: Decimal::from(350),
        },
        running_costs: RunningCosts {
            fuel_per_year: Decimal::from(2_000),
            insurance_per_year: Decimal::from(1_200),
            maintenance_per_year: Decimal::from(800),
            registration_per_year: Decimal::from(800),
            tyres_per_year: Decimal::from(200),
        },
        fbt: FbtSettings {
            employee_contribution_amount: Decimal::ZERO,
            use_statutory_method: true,
            statutory_rate: Some(Decimal::new(20, 2)),
        },
        employee: EmployeeProfile {
            annual_salary: Decimal::from(80_000),
            taxable_income: Decimal::from(80_000),
            has_help_debt: false,
            help_repayment_rate: None,
        },
        quote_provided_values: None,
        metadata: None,
        custom_notes: None,
    }
}
