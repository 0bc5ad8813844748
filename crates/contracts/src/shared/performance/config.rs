use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// Thresholds and example counts used by the insight core.
///
/// Every section and field falls back to its default, so a partial TOML
/// document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub unit_economics: UnitEconomicsConfig,
    pub selection: SelectionConfig,
    pub polling: PollingConfig,
}

/// Bands around the latest unit cost that drive `UnitStatus`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitEconomicsConfig {
    /// Unit value below `cost * below_cost_ratio` is `below_cost`
    pub below_cost_ratio: f64,
    /// Unit value below `cost * thin_margin_ratio` is `thin`
    pub thin_margin_ratio: f64,
    /// Report zero-issuance products as `no_sales_data` instead of judging raw revenue
    pub flag_zero_issuance: bool,
}

impl Default for UnitEconomicsConfig {
    fn default() -> Self {
        Self {
            below_cost_ratio: 0.98,
            thin_margin_ratio: 1.10,
            flag_zero_issuance: false,
        }
    }
}

/// Number of representative products shown per quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub stars_top_n: usize,
    pub cash_cows_top_n: usize,
    pub question_marks_top_n: usize,
    pub dogs_top_n: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            stars_top_n: 3,
            cash_cows_top_n: 2,
            question_marks_top_n: 3,
            dogs_top_n: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Automatic refresh period of the dashboard
    pub interval_secs: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_secs: 300 }
    }
}

/// Default configuration, kept in sync with `InsightConfig::default()`
pub const DEFAULT_CONFIG: &str = r#"
[unit_economics]
below_cost_ratio = 0.98
thin_margin_ratio = 1.10
flag_zero_issuance = false

[selection]
stars_top_n = 3
cash_cows_top_n = 2
question_marks_top_n = 3
dogs_top_n = 3

[polling]
interval_secs = 300
"#;

impl InsightConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: InsightConfig =
            toml::from_str(contents).context("Failed to parse insight config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let ue = &self.unit_economics;
        ensure!(
            ue.below_cost_ratio >= 0.0 && ue.thin_margin_ratio >= 0.0,
            "unit_economics ratios must be non-negative (got {} / {})",
            ue.below_cost_ratio,
            ue.thin_margin_ratio
        );
        ensure!(
            ue.thin_margin_ratio >= ue.below_cost_ratio,
            "thin_margin_ratio ({}) must not be below below_cost_ratio ({})",
            ue.thin_margin_ratio,
            ue.below_cost_ratio
        );
        ensure!(
            self.polling.interval_secs > 0,
            "polling.interval_secs must be positive"
        );
        Ok(())
    }
}
