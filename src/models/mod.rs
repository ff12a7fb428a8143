//! Core data models for the novated lease engine.
//!
//! This module contains the quote input schema, every output structure the
//! calculations produce, and the saved-quote record.

mod analysis;
mod comparison;
mod quote;
mod saved_quote;
mod schedule;
mod tax;
mod validation;

pub use analysis::{AnalysisWarning, LeaseAnalysis, WarningSeverity};
pub use comparison::{
    BuyOutrightPosition, BuyVsLeaseComparison, NovatedLeasePosition, PostLeaseScenario,
    QuoteComparison, QuoteComparisonEntry, ScenarioType,
};
pub use quote::{
    BudgetFlexibility, EmployeeProfile, Fees, FbtSettings, LeaseTerms, MAX_AMOUNT,
    MAX_DURATION_YEARS, QuoteInput, QuoteMetadata, QuoteProvidedValues, RunningCosts,
    VehicleDetails,
};
pub use saved_quote::{QuoteUpdate, SavedQuote};
pub use schedule::{CostBreakdown, LeaseAccountSnapshot, YearEntry};
pub use tax::{TaxCalculation, TaxImpact};
pub use validation::{DiscrepancyField, OverallAssessment, QuoteDiscrepancy, QuoteValidation};
