//! Tunable thresholds for health scoring and insight detection.
//!
//! Defaults reproduce the dashboard's observed behavior: a 1.8% blended
//! commission rate, an 85% approval benchmark, 30/70% health rate bands,
//! 30/90 day inactivity bands, and $15/month upkeep per idle integration.
//! Every field can be overridden from a JSON document; missing fields
//! fall back to these defaults.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;

/// Top-level analytics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Blended commission rate used to value volume (0.018 = 1.8%).
    pub commission_rate: f64,
    /// Divisor converting annual figures to monthly ones.
    pub months_per_year: f64,
    /// Minimum volume (USD) for a processor or merchant to be considered significant.
    pub significant_volume_usd: f64,
    pub health: HealthThresholds,
    pub insights: InsightThresholds,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            commission_rate: 0.018,
            months_per_year: 12.0,
            significant_volume_usd: 50_000.0,
            health: HealthThresholds::default(),
            insights: InsightThresholds::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Parse a (possibly partial) configuration from JSON.
    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Monthly commission revenue carried by `annual_volume`.
    pub fn monthly_commission(&self, annual_volume: f64) -> f64 {
        (annual_volume * self.commission_rate) / self.months_per_year
    }
}

/// Raw thresholds behind the merchant health level and score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HealthThresholds {
    /// Days without transactions beyond which a merchant is critical.
    pub critical_inactive_days: u32,
    /// Days without transactions beyond which a merchant is at risk.
    pub risk_inactive_days: u32,
    /// Success rate (%) below which a merchant is critical.
    pub critical_success_rate: f64,
    /// Success rate (%) below which a merchant is at risk.
    pub risk_success_rate: f64,
    /// Active window (days) used for the "active merchants" KPI.
    pub active_window_days: u32,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        HealthThresholds {
            critical_inactive_days: 90,
            risk_inactive_days: 30,
            critical_success_rate: 30.0,
            risk_success_rate: 70.0,
            active_window_days: 30,
        }
    }
}

/// Trigger thresholds for the insight detectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InsightThresholds {
    /// Top processor share (%) above which concentration is reported.
    pub concentration_share_pct: f64,
    /// Top processor share (%) above which concentration is high priority.
    pub concentration_high_pct: f64,
    /// Share of volume (%) proposed for diversion to a backup processor.
    pub backup_share_pct: f64,
    /// Approval benchmark (%) for processors.
    pub success_benchmark: f64,
    /// Minimum cost gap (percentage points) worth optimizing.
    pub min_cost_diff: f64,
    /// Share of volume (%) the cost detector proposes to migrate.
    pub cost_migration_pct: f64,
    /// Monthly savings above which cost optimization is high priority.
    pub cost_high_monthly_usd: f64,
    /// Share of volume (%) used in cost-analysis routing recommendations.
    pub partial_move_pct: f64,
    /// Monthly impact above which a success-rate opportunity is high priority.
    pub success_opportunity_high_monthly_usd: f64,
    /// Rate gap (pp) above which a low-rate processor is high priority.
    pub low_rate_high_gap: f64,
    /// Target share (%) of volume for digital processors.
    pub digital_target_pct: f64,
    /// Merchant success rate (%) under which digital adoption is suggested.
    pub digital_adoption_rate: f64,
    /// Top country share (%) above which geography is reported.
    pub geographic_top_pct: f64,
    /// Country share (%) below which a market is underserved.
    pub underserved_pct: f64,
    /// Share of total volume (%) assumed capturable through expansion.
    pub expansion_pct: f64,
    /// Unused processor count above which idle integrations are reported.
    pub unused_min_count: usize,
    /// Unused processor count above which idle integrations are medium priority.
    pub unused_medium_count: usize,
    /// Estimated upkeep per unused integration, USD per month.
    pub maintenance_cost_monthly_usd: f64,
    /// How many of the oldest unused processors to list.
    pub oldest_unused_listed: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        InsightThresholds {
            concentration_share_pct: 35.0,
            concentration_high_pct: 50.0,
            backup_share_pct: 30.0,
            success_benchmark: 85.0,
            min_cost_diff: 0.2,
            cost_migration_pct: 40.0,
            cost_high_monthly_usd: 1_000.0,
            partial_move_pct: 30.0,
            success_opportunity_high_monthly_usd: 500.0,
            low_rate_high_gap: 10.0,
            digital_target_pct: 15.0,
            digital_adoption_rate: 80.0,
            geographic_top_pct: 60.0,
            underserved_pct: 10.0,
            expansion_pct: 10.0,
            unused_min_count: 5,
            unused_medium_count: 30,
            maintenance_cost_monthly_usd: 15.0,
            oldest_unused_listed: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_constants() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.commission_rate, 0.018);
        assert_eq!(config.health.critical_inactive_days, 90);
        assert_eq!(config.health.risk_inactive_days, 30);
        assert_eq!(config.health.critical_success_rate, 30.0);
        assert_eq!(config.health.risk_success_rate, 70.0);
        assert_eq!(config.insights.success_benchmark, 85.0);
        assert_eq!(config.insights.maintenance_cost_monthly_usd, 15.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnalyticsConfig::from_json(
            r#"{ "commission_rate": 0.02, "insights": { "success_benchmark": 90.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.commission_rate, 0.02);
        assert_eq!(config.insights.success_benchmark, 90.0);
        assert_eq!(config.insights.min_cost_diff, 0.2);
        assert_eq!(config.health, HealthThresholds::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AnalyticsConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_monthly_commission() {
        let config = AnalyticsConfig::default();
        let monthly = config.monthly_commission(1_200_000.0);
        assert!((monthly - 1_800.0).abs() < 1e-9);
    }
}
