//! Audit configuration.
//!
//! Loaded from TOML, overridable from the command line:
//!
//! ```toml
//! tolerance = 0.10
//! show_profiles = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::document::read_text;
use super::error::{BalanceError, Result};

/// Default outlier tolerance (10% from the tier mean).
pub const DEFAULT_TOLERANCE: f64 = 0.10;

/// Configuration for the read-only audit path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Relative deviation from the tier mean above which a card is flagged.
    /// A card exactly at the tolerance is not flagged.
    pub tolerance: f64,

    /// Include per-tier attribute profiles in the text report.
    pub show_profiles: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            show_profiles: true,
        }
    }
}

impl AuditConfig {
    /// Create a config with a custom tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Create a config with attribute profiles toggled.
    #[must_use]
    pub fn with_profiles(mut self, show: bool) -> Self {
        self.show_profiles = show;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(BalanceError::InvalidConfig(format!(
                "tolerance must be a non-negative finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AuditConfig =
            toml::from_str(text).map_err(|e| BalanceError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded audit config from {}", path.display());
        Ok(config)
    }
}
