use serde::{Deserialize, Serialize};

use super::merchant::HealthLevel;

/// Portfolio-wide KPIs consumed by the dashboard and the prompt builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of registered merchants.
    pub total_merchants: usize,
    /// Merchants onboarded through the platform.
    pub on_platform_merchants: usize,
    /// Distinct country codes, in first-seen order.
    pub countries: Vec<String>,
    /// Merchants with a transaction aggregate in the period.
    pub merchants_with_transactions: usize,
    /// Merchants whose last transaction is within the active window.
    pub active_merchants: usize,
    pub total_transactions: u64,
    pub successful_transactions: u64,
    /// `successful / total × 100`, or 0.0 with no transactions.
    pub avg_success_rate: f64,
    /// Total processed volume in USD.
    pub total_volume_usd: f64,
    pub health: HealthDistribution,
    /// Per-merchant success rates, bucketed.
    pub success_rates: SuccessRateDistribution,
}

/// How many merchants fall into each health level.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HealthDistribution {
    pub healthy: usize,
    pub risk: usize,
    pub critical: usize,
}

impl HealthDistribution {
    /// Merchants in `risk` or `critical`.
    pub fn at_risk(&self) -> usize {
        self.risk + self.critical
    }
}

/// Merchants with a transaction aggregate, bucketed by success rate.
///
/// Buckets are `0%`, `1–30%`, `30–50%`, `50–70%`, `70–90%`, `90–100%`.
/// A rate of exactly 0 has its own bucket; every other upper edge is
/// exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SuccessRateDistribution {
    pub zero: usize,
    pub under_30: usize,
    pub under_50: usize,
    pub under_70: usize,
    pub under_90: usize,
    pub at_least_90: usize,
    /// Unweighted mean of per-merchant success rates.
    pub mean_rate: f64,
    /// Share (%) of merchants in the `0%` and `1–30%` buckets.
    pub critical_pct: f64,
}

impl SuccessRateDistribution {
    /// Count one merchant's success rate into its bucket.
    pub fn record(&mut self, rate: f64) {
        if rate == 0.0 {
            self.zero += 1;
        } else if rate < 30.0 {
            self.under_30 += 1;
        } else if rate < 50.0 {
            self.under_50 += 1;
        } else if rate < 70.0 {
            self.under_70 += 1;
        } else if rate < 90.0 {
            self.under_90 += 1;
        } else {
            self.at_least_90 += 1;
        }
    }

    /// Merchants counted across all buckets.
    pub fn total(&self) -> usize {
        self.zero + self.under_30 + self.under_50 + self.under_70 + self.under_90 + self.at_least_90
    }
}

/// A merchant row for the top-volume ("whale watch") table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantSnapshot {
    pub id: u64,
    pub name: String,
    /// Display id with the numeric id masked (e.g., "MIG-****-0391").
    pub masked_id: String,
    pub country: String,
    pub total_usd: f64,
    pub success_rate: f64,
    pub days_since_last_tx: u32,
    pub health_score: u8,
    pub health_level: HealthLevel,
}

/// API request body for the /api/merchant_health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantHealthRequest {
    pub merchant_id: u64,
}
