//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a policy table
//! from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// The file name read from a policy directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to the policy table.
///
/// # Directory Structure
///
/// ```text
/// config/au_2025_26/
/// └── policy.yaml   # Tax brackets, GST, FBT, residual table, market assumptions
/// ```
///
/// # Example
///
/// ```no_run
/// use novated_lease_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/au_2025_26").unwrap();
/// println!("Loaded policy for {}", loader.policy().metadata.tax_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `policy.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML for a [`PolicyConfig`] (`ConfigParseError`)
    /// - the table cannot drive a calculation, e.g. it has no brackets
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let config = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Self::check(&config, &policy_path)?;

        debug!(
            path = %policy_path.display(),
            tax_year = %config.metadata.tax_year,
            "Loaded policy configuration"
        );

        Ok(Self { config })
    }

    /// Wraps the built-in 2025-26 policy table.
    pub fn builtin() -> Self {
        Self {
            config: PolicyConfig::default(),
        }
    }

    /// Wraps an already-constructed policy table.
    pub fn from_policy(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded policy table.
    pub fn policy(&self) -> &PolicyConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects tables the calculation functions cannot use.
    fn check(config: &PolicyConfig, path: &Path) -> EngineResult<()> {
        let fail = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let brackets = &config.income_tax.brackets;
        if brackets.is_empty() {
            return Err(fail("income_tax.brackets must not be empty".to_string()));
        }
        if brackets.windows(2).any(|pair| pair[0].min >= pair[1].min) {
            return Err(fail(
                "income_tax.brackets must be in ascending order of min".to_string(),
            ));
        }
        if brackets[..brackets.len() - 1].iter().any(|b| b.max.is_none()) {
            return Err(fail("only the last income tax bracket may omit max".to_string()));
        }
        if !config
            .residual
            .rates
            .contains_key(&config.residual.fallback_years)
        {
            return Err(fail(format!(
                "residual.rates has no entry for fallback_years {}",
                config.residual.fallback_years
            )));
        }
        let depreciation = config.market.depreciation_rate;
        if depreciation < Decimal::ZERO || depreciation > Decimal::ONE {
            return Err(fail(format!(
                "market.depreciation_rate must be between 0 and 1 (got {})",
                depreciation
            )));
        }

        Ok(())
    }
}
