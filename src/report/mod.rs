//! Portfolio reporting for the dashboard and the prompt builder.
//!
//! Aggregates the merchant table, transaction aggregates, and health
//! levels into KPI counts, and ranks merchants by processed volume.

use crate::config::AnalyticsConfig;
use crate::data::DataStore;
use crate::health::merchant_health;
use crate::models::merchant::HealthLevel;
use crate::models::report::{
    HealthDistribution, MerchantSnapshot, PortfolioSummary, SuccessRateDistribution,
};

/// Compute portfolio-wide KPIs.
pub fn portfolio_summary(store: &DataStore, config: &AnalyticsConfig) -> PortfolioSummary {
    let merchants = store.merchants();

    let mut countries: Vec<String> = Vec::new();
    for m in merchants {
        if !countries.contains(&m.country) {
            countries.push(m.country.clone());
        }
    }

    let mut total_transactions = 0;
    let mut successful_transactions = 0;
    let mut total_volume_usd = 0.0;
    let mut active_merchants = 0;
    for stats in store.transactions().values() {
        total_transactions += stats.total_transactions;
        successful_transactions += stats.successful;
        total_volume_usd += stats.total_usd;
        if stats.days_since_last_tx <= config.health.active_window_days {
            active_merchants += 1;
        }
    }

    let mut health = HealthDistribution::default();
    for m in merchants {
        match merchant_health(store, config, m.id).level {
            HealthLevel::Healthy => health.healthy += 1,
            HealthLevel::Risk => health.risk += 1,
            HealthLevel::Critical => health.critical += 1,
        }
    }

    let avg_success_rate = if total_transactions > 0 {
        (successful_transactions as f64 / total_transactions as f64) * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_merchants: merchants.len(),
        on_platform_merchants: merchants.iter().filter(|m| m.on_platform).count(),
        countries,
        merchants_with_transactions: store.transactions().len(),
        active_merchants,
        total_transactions,
        successful_transactions,
        avg_success_rate,
        total_volume_usd,
        health,
        success_rates: success_rate_distribution(store),
    }
}

/// Bucket every merchant with a transaction aggregate by success rate.
///
/// Empty portfolios report zero counts, a 0.0 mean and 0.0 critical share.
pub fn success_rate_distribution(store: &DataStore) -> SuccessRateDistribution {
    let mut distribution = SuccessRateDistribution::default();
    let mut rate_sum = 0.0;
    for stats in store.transactions().values() {
        distribution.record(stats.success_rate);
        rate_sum += stats.success_rate;
    }

    let merchants = distribution.total();
    if merchants > 0 {
        distribution.mean_rate = rate_sum / merchants as f64;
        let critical = distribution.zero + distribution.under_30;
        distribution.critical_pct = critical as f64 / merchants as f64 * 100.0;
    }
    distribution
}

/// The `limit` merchants with the largest USD volume, with their health.
///
/// Only merchants with a transaction aggregate are ranked. Ties keep
/// merchant id order.
pub fn top_merchants(
    store: &DataStore,
    config: &AnalyticsConfig,
    limit: usize,
) -> Vec<MerchantSnapshot> {
    let mut snapshots: Vec<MerchantSnapshot> = store
        .transactions()
        .iter()
        .filter_map(|(id, stats)| {
            let merchant = store.merchant(*id)?;
            let health = merchant_health(store, config, merchant.id);
            Some(MerchantSnapshot {
                id: merchant.id,
                name: merchant.name.clone(),
                masked_id: mask_merchant_id(merchant.id),
                country: merchant.country.clone(),
                total_usd: stats.total_usd,
                success_rate: stats.success_rate,
                days_since_last_tx: stats.days_since_last_tx,
                health_score: health.score,
                health_level: health.level,
            })
        })
        .collect();

    snapshots.sort_by(|a, b| b.total_usd.total_cmp(&a.total_usd));
    snapshots.truncate(limit);
    snapshots
}

/// Masked display id, e.g. `MIG-****-0391`.
pub fn mask_merchant_id(id: u64) -> String {
    format!("MIG-****-{id:04}")
}
