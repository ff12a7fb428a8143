//! Policy configuration for the novated lease engine.
//!
//! This module provides the policy constant table (tax brackets, Medicare
//! levy, GST, FBT, ATO residual values and market assumptions) and a loader
//! that reads it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use novated_lease_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/au_2025_26").unwrap();
//! println!("Loaded policy: {}", config.policy().metadata.tax_year);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{
    FbtConfig, GstConfig, IncomeTaxConfig, MarketConfig, PolicyConfig, PolicyMetadata,
    PostLeaseConfig, ResidualConfig, TaxBracket, ValidationConfig,
};
