//! Policy constant types for novated lease calculations.
//!
//! This module contains the strongly-typed policy table that every formula
//! reads its rates from. It is deserialized from `policy.yaml` and also has a
//! built-in Australian 2025-26 default, so updating a tax year means editing
//! one table rather than hunting through formulas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifying information about a policy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// The jurisdiction code (e.g., "AU").
    pub jurisdiction: String,
    /// The income year the rates apply to (e.g., "2025-26").
    pub tax_year: String,
    /// URL to the published rates.
    pub source_url: String,
}

/// One progressive income tax bracket.
///
/// Income tax within the bracket is `base + (income - min) * rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The first whole dollar taxed at this bracket's rate.
    pub min: Decimal,
    /// The last whole dollar of the bracket; `None` for the top bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// The marginal rate as a decimal.
    pub rate: Decimal,
    /// Cumulative tax on all income below `min`.
    pub base: Decimal,
}

/// Income tax settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// Brackets in ascending order of `min`.
    pub brackets: Vec<TaxBracket>,
    /// Flat Medicare levy rate applied to all taxable income.
    pub medicare_levy_rate: Decimal,
}

/// GST settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstConfig {
    /// The GST rate as a decimal.
    pub rate: Decimal,
}

/// Fringe Benefits Tax settings for the statutory formula method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FbtConfig {
    /// FBT rate (top marginal rate plus Medicare levy).
    pub rate: Decimal,
    /// Type-1 gross-up factor for GST-creditable benefits.
    pub type1_gross_up: Decimal,
    /// Statutory fraction used when a quote does not supply one.
    pub default_statutory_rate: Decimal,
}

/// ATO minimum residual values by lease term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualConfig {
    /// Residual fraction of the vehicle price keyed by whole lease years.
    pub rates: BTreeMap<u32, Decimal>,
    /// The term whose rate is used for any term missing from `rates`.
    pub fallback_years: u32,
}

/// Market assumptions used by the buy-vs-lease and post-lease projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Flat annual depreciation rate applied to the vehicle price.
    pub depreciation_rate: Decimal,
    /// Simple annual return forgone on cash used to buy outright.
    pub opportunity_cost_rate: Decimal,
}

/// End-of-lease assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostLeaseConfig {
    /// Flat cost of handing the vehicle back to the lessor.
    pub return_handling_cost: Decimal,
    /// Interest rate assumed when the residual is refinanced.
    pub extension_interest_rate: Decimal,
    /// Term of the assumed refinance, independent of the original lease term.
    pub extension_years: u32,
}

/// Thresholds for flagging differences between a quote and the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Percentage difference above which cost and payment fields are significant.
    pub cost_threshold_percent: Decimal,
    /// Percentage difference above which savings fields are significant.
    pub savings_threshold_percent: Decimal,
}

/// The complete policy table.
///
/// # Example
///
/// ```
/// use novated_lease_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.metadata.tax_year, "2025-26");
/// assert_eq!(policy.gst.rate, Decimal::new(10, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Income tax brackets and Medicare levy.
    pub income_tax: IncomeTaxConfig,
    /// GST rate.
    pub gst: GstConfig,
    /// FBT statutory method constants.
    pub fbt: FbtConfig,
    /// ATO residual table.
    pub residual: ResidualConfig,
    /// Depreciation and opportunity cost assumptions.
    pub market: MarketConfig,
    /// End-of-lease assumptions.
    pub post_lease: PostLeaseConfig,
    /// Discrepancy thresholds.
    pub validation: ValidationConfig,
}

impl PolicyConfig {
    /// The Australian 2025-26 policy table.
    pub fn au_2025_26() -> Self {
        let bracket = |min: i64, max: Option<i64>, rate_pct: i64, base: i64| TaxBracket {
            min: Decimal::from(min),
            max: max.map(Decimal::from),
            rate: Decimal::new(rate_pct, 2),
            base: Decimal::from(base),
        };

        let rates = BTreeMap::from([
            (1, Decimal::new(6563, 4)),
            (2, Decimal::new(5625, 4)),
            (3, Decimal::new(4688, 4)),
            (4, Decimal::new(3750, 4)),
            (5, Decimal::new(2813, 4)),
        ]);

        Self {
            metadata: PolicyMetadata {
                jurisdiction: "AU".to_string(),
                tax_year: "2025-26".to_string(),
                source_url: "https://www.ato.gov.au/tax-rates-and-codes".to_string(),
            },
            income_tax: IncomeTaxConfig {
                brackets: vec![
                    bracket(0, Some(18_200), 0, 0),
                    bracket(18_201, Some(45_000), 16, 0),
                    bracket(45_001, Some(135_000), 30, 4_288),
                    bracket(135_001, Some(190_000), 37, 31_288),
                    bracket(190_001, None, 45, 51_638),
                ],
                medicare_levy_rate: Decimal::new(2, 2),
            },
            gst: GstConfig {
                rate: Decimal::new(10, 2),
            },
            fbt: FbtConfig {
                rate: Decimal::new(47, 2),
                type1_gross_up: Decimal::new(20802, 4),
                default_statutory_rate: Decimal::new(20, 2),
            },
            residual: ResidualConfig {
                rates,
                fallback_years: 5,
            },
            market: MarketConfig {
                depreciation_rate: Decimal::new(15, 2),
                opportunity_cost_rate: Decimal::new(5, 2),
            },
            post_lease: PostLeaseConfig {
                return_handling_cost: Decimal::from(500),
                extension_interest_rate: Decimal::new(7, 2),
                extension_years: 3,
            },
            validation: ValidationConfig {
                cost_threshold_percent: Decimal::from(5),
                savings_threshold_percent: Decimal::from(10),
            },
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::au_2025_26()
    }
}
