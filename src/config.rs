use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Domain coefficients. The defaults reproduce the figures the dashboard
/// has always shipped with; none of them has a documented derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Quantile of response time that opens the high-risk cohort.
    pub high_risk_quantile: f64,
    /// Sanity ceiling; longer gaps are treated as corrupted timestamps.
    pub max_response_minutes: f64,
    pub lives_saved_fraction: f64,
    /// Social cost saving per life, in units of 100M KRW.
    pub cost_per_life_units: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            high_risk_quantile: 0.9,
            max_response_minutes: 720.0,
            lives_saved_fraction: 0.2,
            cost_per_life_units: 1.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub target_minutes: f64,
    pub survival_increase_pct: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            target_minutes: 15.0,
            survival_increase_pct: 20,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.analysis;
        if !(0.0..=1.0).contains(&a.high_risk_quantile) {
            return Err(invalid(
                "analysis.high_risk_quantile",
                format!("{} is outside [0, 1]", a.high_risk_quantile),
            ));
        }
        if !(a.max_response_minutes.is_finite() && a.max_response_minutes > 0.0) {
            return Err(invalid(
                "analysis.max_response_minutes",
                format!("{} must be a positive number", a.max_response_minutes),
            ));
        }
        if !(a.lives_saved_fraction.is_finite() && a.lives_saved_fraction >= 0.0) {
            return Err(invalid(
                "analysis.lives_saved_fraction",
                format!("{} must be non-negative", a.lives_saved_fraction),
            ));
        }
        if !(a.cost_per_life_units.is_finite() && a.cost_per_life_units >= 0.0) {
            return Err(invalid(
                "analysis.cost_per_life_units",
                format!("{} must be non-negative", a.cost_per_life_units),
            ));
        }
        let r = &self.report;
        if !(r.target_minutes.is_finite() && r.target_minutes > 0.0) {
            return Err(invalid(
                "report.target_minutes",
                format!("{} must be a positive number", r.target_minutes),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
