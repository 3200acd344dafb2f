//! Merchant health scoring.
//!
//! A merchant's score starts at 100 and loses points for each failed check.
//! The level is classified separately from the same raw inputs, so the
//! score and the level are not derived from one formula and can disagree
//! (two merchants with the same score may land in different levels).

use crate::config::{AnalyticsConfig, HealthThresholds};
use crate::data::DataStore;
use crate::models::merchant::{
    HealthLevel, Merchant, MerchantHealth, TransactionStats, DAYS_UNKNOWN,
};

const NO_TRANSACTIONS_PENALTY: i32 = 50;
const CRITICAL_INACTIVITY_PENALTY: i32 = 30;
const CRITICAL_RATE_PENALTY: i32 = 30;
const RISK_INACTIVITY_PENALTY: i32 = 15;
const RISK_RATE_PENALTY: i32 = 15;
const NO_DATA_PENALTY: i32 = 20;

/// Health of a merchant by id. Unknown merchants score as if their
/// counter were 0 and they had no transaction data.
pub fn merchant_health(
    store: &DataStore,
    config: &AnalyticsConfig,
    merchant_id: u64,
) -> MerchantHealth {
    compute_health(
        store.merchant(merchant_id),
        store.transaction_stats(merchant_id),
        &config.health,
    )
}

/// Score and classify a merchant from its profile and optional aggregate.
pub fn compute_health(
    merchant: Option<&Merchant>,
    stats: Option<&TransactionStats>,
    thresholds: &HealthThresholds,
) -> MerchantHealth {
    let counter = merchant.map_or(0, |m| m.counter);
    let days = stats.map_or(DAYS_UNKNOWN, |s| s.days_since_last_tx);
    // Only meaningful when stats are present; every rate check is guarded.
    let rate = stats.map(|s| s.success_rate);

    let mut reasons = Vec::new();
    let mut score: i32 = 100;

    let critically_inactive = days > thresholds.critical_inactive_days;
    let inactive =
        days > thresholds.risk_inactive_days && days <= thresholds.critical_inactive_days;
    let critical_rate = rate.is_some_and(|r| r < thresholds.critical_success_rate);
    let moderate_rate = rate
        .is_some_and(|r| r >= thresholds.critical_success_rate && r < thresholds.risk_success_rate);

    if counter == 0 {
        reasons.push("no transactions recorded".to_string());
        score -= NO_TRANSACTIONS_PENALTY;
    }
    if critically_inactive {
        reasons.push(format!(
            "inactive for {days} days (>{})",
            thresholds.critical_inactive_days
        ));
        score -= CRITICAL_INACTIVITY_PENALTY;
    }
    if let (true, Some(r)) = (critical_rate, rate) {
        reasons.push(format!(
            "success rate too low: {r}% (<{}%)",
            thresholds.critical_success_rate
        ));
        score -= CRITICAL_RATE_PENALTY;
    }
    if inactive {
        reasons.push(format!(
            "{days} days without transactions (>{})",
            thresholds.risk_inactive_days
        ));
        score -= RISK_INACTIVITY_PENALTY;
    }
    if let (true, Some(r)) = (moderate_rate, rate) {
        reasons.push(format!(
            "moderate success rate: {r}% (<{}%)",
            thresholds.risk_success_rate
        ));
        score -= RISK_RATE_PENALTY;
    }
    if stats.is_none() {
        reasons.push("no transaction data in period".to_string());
        score -= NO_DATA_PENALTY;
    }

    let level = if critically_inactive || critical_rate || counter == 0 {
        HealthLevel::Critical
    } else if inactive || moderate_rate {
        HealthLevel::Risk
    } else {
        if reasons.is_empty() {
            reasons.push("merchant healthy".to_string());
        }
        HealthLevel::Healthy
    };

    MerchantHealth {
        score: score.clamp(0, 100) as u8,
        level,
        reasons,
    }
}
