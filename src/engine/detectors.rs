//! The seven insight detectors.
//!
//! Each detector is a pure function over the store and the configuration.
//! It returns `None` when its trigger condition is not met. Whenever a
//! detector picks "the" top or bottom processor, it takes the first one
//! after a stable sort, so ties resolve to catalog order.

use crate::config::AnalyticsConfig;
use crate::data::DataStore;
use crate::format::{format_usd, join_names};
use crate::health::merchant_health;
use crate::models::insight::{Insight, InsightCategory, InsightType, Priority};
use crate::models::merchant::HealthLevel;
use crate::models::processor::{ProcessorPerformance, ProcessorType};
use crate::simulator::simulate_routing;

/// Copy of `processors` sorted by `key`, largest first (stable).
fn sorted_desc<'a>(
    processors: &[&'a ProcessorPerformance],
    key: impl Fn(&ProcessorPerformance) -> f64,
) -> Vec<&'a ProcessorPerformance> {
    let mut sorted = processors.to_vec();
    sorted.sort_by(|a, b| key(*b).total_cmp(&key(*a)));
    sorted
}

/// Copy of `processors` sorted by `key`, smallest first (stable).
fn sorted_asc<'a>(
    processors: &[&'a ProcessorPerformance],
    key: impl Fn(&ProcessorPerformance) -> f64,
) -> Vec<&'a ProcessorPerformance> {
    let mut sorted = processors.to_vec();
    sorted.sort_by(|a, b| key(*a).total_cmp(&key(*b)));
    sorted
}

fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value}")
    } else {
        format!("{value}")
    }
}

/// One processor carrying too much of the active volume.
pub fn detect_concentration_risk(store: &DataStore, config: &AnalyticsConfig) -> Option<Insight> {
    let thresholds = &config.insights;
    let active = store.active_processors();
    let total_volume: f64 = active.iter().map(|p| p.total_volume).sum();
    if total_volume <= 0.0 {
        return None;
    }

    let by_volume = sorted_desc(&active, |p| p.total_volume);
    let top = *by_volume.first()?;
    let share = (top.total_volume / total_volume) * 100.0;
    if share <= thresholds.concentration_share_pct {
        log::debug!("concentration: top share {share:.1}% within limit");
        return None;
    }

    // Monthly commission revenue lost if the top processor goes down
    let monthly_at_risk = config.monthly_commission(top.total_volume);

    let backup_action = match by_volume
        .iter()
        .find(|p| p.id != top.id && p.success_rate >= thresholds.success_benchmark)
    {
        Some(backup) => format!(
            "Divert {}% to {} ({}% rate)",
            thresholds.backup_share_pct, backup.name, backup.success_rate
        ),
        None => format!(
            "Activate a backup processor with rate >= {}%",
            thresholds.success_benchmark
        ),
    };

    let contingency_action = match store
        .unused_processors()
        .into_iter()
        .find(|p| p.processor_type == ProcessorType::Card)
    {
        Some(card) => format!("Activate {} as contingency", card.name),
        None => "Evaluate an additional processor for redundancy".to_string(),
    };

    Some(Insight {
        id: "concentration-risk".to_string(),
        title: "Critical processor concentration".to_string(),
        description: format!(
            "{share:.0}% of volume ({}) depends on {}. If this processor fails, {}/month in commissions is at risk.",
            format_usd(top.total_volume),
            top.name,
            format_usd(monthly_at_risk)
        ),
        insight_type: InsightType::Risk,
        priority: if share > thresholds.concentration_high_pct {
            Priority::High
        } else {
            Priority::Medium
        },
        ebitda_impact: -monthly_at_risk,
        category: InsightCategory::Processor,
        actions: vec![backup_action, contingency_action],
    })
}

/// Volume sitting on the most expensive processor when a cheaper one exists.
pub fn detect_cost_optimization(store: &DataStore, config: &AnalyticsConfig) -> Option<Insight> {
    let thresholds = &config.insights;
    let active = store.active_processors();
    if active.len() < 2 {
        return None;
    }

    let expensive = *sorted_desc(&active, |p| p.avg_cost).first()?;
    let cheap = *sorted_asc(&active, |p| p.avg_cost).first()?;
    if expensive.id == cheap.id {
        return None;
    }

    let cost_diff = expensive.avg_cost - cheap.avg_cost;
    if cost_diff <= thresholds.min_cost_diff {
        log::debug!("cost: gap of {cost_diff:.2}pp not worth optimizing");
        return None;
    }

    let sim = simulate_routing(store, expensive.id, cheap.id, thresholds.cost_migration_pct);
    let monthly_savings = sim.impact_usd / config.months_per_year;
    if monthly_savings <= 0.0 {
        return None;
    }

    Some(Insight {
        id: "cost-optimization".to_string(),
        title: "Processing cost reduction".to_string(),
        description: format!(
            "{} costs {}% vs {} at {}% for similar processing. Migrating {}% of its volume saves {}/month.",
            expensive.name,
            expensive.avg_cost,
            cheap.name,
            cheap.avg_cost,
            thresholds.cost_migration_pct,
            format_usd(monthly_savings)
        ),
        insight_type: InsightType::Opportunity,
        priority: if monthly_savings > thresholds.cost_high_monthly_usd {
            Priority::High
        } else {
            Priority::Medium
        },
        ebitda_impact: monthly_savings,
        category: InsightCategory::Processor,
        actions: vec![
            format!(
                "Migrate {}% of {} to {}",
                thresholds.cost_migration_pct, expensive.name, cheap.name
            ),
            format!("Estimated rate change: {}pp", signed(sim.success_rate_change)),
        ],
    })
}

/// A large, otherwise healthy merchant approving below the best processor's rate.
pub fn detect_success_rate_opportunity(
    store: &DataStore,
    config: &AnalyticsConfig,
) -> Option<Insight> {
    let thresholds = &config.insights;
    let active = store.active_processors();
    if active.len() < 2 {
        return None;
    }

    let best = *sorted_desc(&active, |p| p.success_rate).first()?;

    let mut candidates: Vec<(&str, f64, f64)> = Vec::new();
    for merchant in store.merchants() {
        let Some(stats) = store.transaction_stats(merchant.id) else {
            continue;
        };
        if stats.total_usd < config.significant_volume_usd {
            continue;
        }
        let health = merchant_health(store, config, merchant.id);
        if health.level != HealthLevel::Healthy || stats.success_rate >= best.success_rate {
            continue;
        }
        candidates.push((merchant.name.as_str(), stats.total_usd, stats.success_rate));
    }

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    let Some(&(name, volume, rate)) = candidates.first() else {
        log::debug!("success-rate: no healthy high-volume merchant below {}%", best.success_rate);
        return None;
    };

    let rate_gap = best.success_rate - rate;
    let additional_volume = volume * (rate_gap / 100.0);
    let monthly_impact = config.monthly_commission(additional_volume);
    if monthly_impact <= 0.0 {
        return None;
    }

    Some(Insight {
        id: "success-rate-opportunity".to_string(),
        title: format!("{name} on a suboptimal processor"),
        description: format!(
            "High-volume merchant at {rate}% success rate while {} delivers {}%. Closing the {rate_gap:.1}pp gap can add {}/month.",
            best.name,
            best.success_rate,
            format_usd(monthly_impact)
        ),
        insight_type: InsightType::Opportunity,
        priority: if monthly_impact > thresholds.success_opportunity_high_monthly_usd {
            Priority::High
        } else {
            Priority::Medium
        },
        ebitda_impact: monthly_impact,
        category: InsightCategory::Merchant,
        actions: vec![
            format!("Pilot {name} on {} for 30 days", best.name),
            format!(
                "Potential: +{rate_gap:.1}pp approval rate on {} volume",
                format_usd(volume)
            ),
        ],
    })
}

/// A significant processor approving below the benchmark.
pub fn detect_low_rate_processor(store: &DataStore, config: &AnalyticsConfig) -> Option<Insight> {
    let thresholds = &config.insights;
    let active = store.active_processors();
    if active.len() < 2 {
        return None;
    }

    let significant: Vec<&ProcessorPerformance> = active
        .iter()
        .copied()
        .filter(|p| p.total_volume > config.significant_volume_usd)
        .collect();
    let worst = *sorted_asc(&significant, |p| p.success_rate).first()?;

    let benchmark = thresholds.success_benchmark;
    if worst.success_rate >= benchmark {
        log::debug!("low-rate: every significant processor meets {benchmark}%");
        return None;
    }

    let gap = benchmark - worst.success_rate;
    let recovered_volume = worst.total_volume * (gap / 100.0);
    let monthly_impact = config.monthly_commission(recovered_volume);
    let per_point = config.monthly_commission(worst.total_volume * 0.01);

    let better_pool: Vec<&ProcessorPerformance> = active
        .iter()
        .copied()
        .filter(|p| p.id != worst.id && p.success_rate > worst.success_rate)
        .collect();
    let actions = match sorted_desc(&better_pool, |p| p.success_rate).first() {
        Some(better) => vec![
            format!(
                "Migrate volume from {} ({}%) to {} ({}%)",
                worst.name, worst.success_rate, better.name, better.success_rate
            ),
            format!("Recoverable volume: {}/year", format_usd(recovered_volume)),
        ],
        None => vec![
            format!("Investigate decline causes on {}", worst.name),
            format!("Target benchmark: {benchmark}% success rate"),
        ],
    };

    Some(Insight {
        id: "low-rate-processor".to_string(),
        title: format!("{} below approval benchmark", worst.name),
        description: format!(
            "{} approves {}% of transactions (benchmark: {benchmark}%). With {} in volume, each point of improvement recovers {}/month.",
            worst.name,
            worst.success_rate,
            format_usd(worst.total_volume),
            format_usd(per_point)
        ),
        insight_type: InsightType::Risk,
        priority: if gap > thresholds.low_rate_high_gap {
            Priority::High
        } else {
            Priority::Medium
        },
        ebitda_impact: monthly_impact,
        category: InsightCategory::Processor,
        actions,
    })
}

/// Digital wallets carrying less than their target share of volume.
pub fn detect_digital_growth(store: &DataStore, config: &AnalyticsConfig) -> Option<Insight> {
    let thresholds = &config.insights;
    let active = store.active_processors();
    let total_volume: f64 = active.iter().map(|p| p.total_volume).sum();
    if total_volume <= 0.0 {
        return None;
    }

    let digital: Vec<&ProcessorPerformance> = active
        .iter()
        .copied()
        .filter(|p| p.processor_type == ProcessorType::Digital)
        .collect();
    let digital_volume: f64 = digital.iter().map(|p| p.total_volume).sum();
    let digital_pct = (digital_volume / total_volume) * 100.0;
    if digital_pct >= thresholds.digital_target_pct {
        log::debug!("digital: {digital_pct:.1}% share already at target");
        return None;
    }

    let target_volume = total_volume * (thresholds.digital_target_pct / 100.0);
    let additional_volume = target_volume - digital_volume;
    let monthly_impact = config.monthly_commission(additional_volume);

    let avg_digital_rate = if digital.is_empty() {
        0.0
    } else {
        digital.iter().map(|p| p.success_rate).sum::<f64>() / digital.len() as f64
    };
    let subject = if digital.is_empty() {
        "Digital processors".to_string()
    } else {
        let labels: Vec<String> = digital
            .iter()
            .map(|p| format!("{} ({}%)", p.name, p.success_rate))
            .collect();
        join_names(&labels)
    };

    Some(Insight {
        id: "digital-growth".to_string(),
        title: "Digital payments under-adopted".to_string(),
        description: format!(
            "{subject} represent only {digital_pct:.0}% of volume ({}). At a {avg_digital_rate:.0}% average success rate, growing to {}% adds {}/month.",
            format_usd(digital_volume),
            thresholds.digital_target_pct,
            format_usd(monthly_impact)
        ),
        insight_type: InsightType::Opportunity,
        priority: Priority::Medium,
        ebitda_impact: monthly_impact,
        category: InsightCategory::Processor,
        actions: vec![
            "Run a digital wallet adoption campaign with active merchants".to_string(),
            "Offer incentives to merchants that enable Apple Pay / Google Pay".to_string(),
            format!("Additional potential: {} in annual volume", format_usd(additional_volume)),
        ],
    })
}

/// Volume concentrated in one country while other markets stay marginal.
pub fn detect_geographic_concentration(
    store: &DataStore,
    config: &AnalyticsConfig,
) -> Option<Insight> {
    let thresholds = &config.insights;

    // Spread each processor's volume evenly over its countries; keep first-seen order
    let mut country_volume: Vec<(&str, f64)> = Vec::new();
    for p in store.active_processors() {
        if p.countries.is_empty() {
            continue;
        }
        let share = p.total_volume / p.countries.len() as f64;
        for country in &p.countries {
            match country_volume.iter_mut().find(|(c, _)| *c == country.as_str()) {
                Some((_, volume)) => *volume += share,
                None => country_volume.push((country.as_str(), share)),
            }
        }
    }
    country_volume.sort_by(|a, b| b.1.total_cmp(&a.1));
    if country_volume.len() < 2 {
        return None;
    }

    let total: f64 = country_volume.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return None;
    }
    let (top_country, top_volume) = country_volume[0];
    let top_pct = (top_volume / total) * 100.0;
    if top_pct <= thresholds.geographic_top_pct {
        log::debug!("geographic: top country {top_country} holds {top_pct:.1}%");
        return None;
    }

    let underserved: Vec<&str> = country_volume
        .iter()
        .filter(|(_, v)| (v / total) * 100.0 < thresholds.underserved_pct)
        .map(|(c, _)| *c)
        .collect();
    if underserved.is_empty() {
        return None;
    }

    let expansion_volume = total * (thresholds.expansion_pct / 100.0);
    let monthly_impact = config.monthly_commission(expansion_volume);
    let markets = underserved.join(", ");

    Some(Insight {
        id: "geographic-concentration".to_string(),
        title: "Regional expansion opportunity".to_string(),
        description: format!(
            "{top_pct:.0}% of volume is concentrated in {top_country}. Underserved markets: {markets}. Expanding local processing can capture {}/month.",
            format_usd(monthly_impact)
        ),
        insight_type: InsightType::Opportunity,
        priority: Priority::Medium,
        ebitda_impact: monthly_impact,
        category: InsightCategory::Geographic,
        actions: vec![
            format!("Activate local processors in {markets}"),
            format!("Goal: bring {top_country} below 50% of volume"),
            "Review local regulation for domestic processing".to_string(),
        ],
    })
}

/// Integrations that carry no volume but still cost upkeep.
pub fn detect_unused_resources(store: &DataStore, config: &AnalyticsConfig) -> Option<Insight> {
    let thresholds = &config.insights;
    let unused = store.unused_processors();
    if unused.len() <= thresholds.unused_min_count {
        return None;
    }

    let monthly_cost = unused.len() as f64 * thresholds.maintenance_cost_monthly_usd;

    let mut oldest = unused.clone();
    oldest.sort_by_key(|p| p.created_at);
    let oldest_names: Vec<&str> = oldest
        .iter()
        .take(thresholds.oldest_unused_listed)
        .map(|p| p.name.as_str())
        .collect();
    let idle_wallets = unused
        .iter()
        .filter(|p| p.processor_type == ProcessorType::Wallet)
        .count();

    Some(Insight {
        id: "unused-resources".to_string(),
        title: format!("{} unused processors", unused.len()),
        description: format!(
            "Operational overhead with no benefit. Oldest idle integrations: {}. Estimated maintenance cost: {}/month.",
            oldest_names.join(", "),
            format_usd(monthly_cost)
        ),
        insight_type: InsightType::Optimization,
        priority: if unused.len() > thresholds.unused_medium_count {
            Priority::Medium
        } else {
            Priority::Low
        },
        ebitda_impact: monthly_cost,
        category: InsightCategory::Operational,
        actions: vec![
            "Deprecate processors idle for more than 12 months".to_string(),
            "Consolidate duplicated configurations".to_string(),
            format!("Evaluate activating {idle_wallets} idle wallets"),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{merchant, perf, processor, processor_store, stats};
    use crate::models::processor::{PerformanceRecord, Processor};
    use std::collections::BTreeMap;

    fn config() -> AnalyticsConfig {
        AnalyticsConfig::default()
    }

    /// Three card processors splitting 100,000 of volume.
    fn split_store(volumes: [f64; 3]) -> DataStore {
        processor_store(
            vec![
                processor(1, "alpha", ProcessorType::Card, "2022-01-01"),
                processor(2, "beta", ProcessorType::Card, "2022-01-02"),
                processor(3, "gamma", ProcessorType::Card, "2022-01-03"),
            ],
            vec![
                perf("alpha", volumes[0], 80.0, 2.9, &["GT"]),
                perf("beta", volumes[1], 90.0, 2.9, &["GT"]),
                perf("gamma", volumes[2], 86.0, 2.9, &["GT"]),
            ],
        )
    }

    #[test]
    fn test_concentration_at_51_percent_is_high_risk() {
        let store = split_store([51_000.0, 25_000.0, 24_000.0]);
        let insight = detect_concentration_risk(&store, &config()).unwrap();
        assert_eq!(insight.insight_type, InsightType::Risk);
        assert_eq!(insight.priority, Priority::High);
        assert!((insight.ebitda_impact + 51_000.0 * 0.018 / 12.0).abs() < 1e-9);
        assert_eq!(insight.actions[0], "Divert 30% to beta (90% rate)");
        assert_eq!(insight.actions[1], "Evaluate an additional processor for redundancy");
    }

    #[test]
    fn test_concentration_at_35_percent_is_silent() {
        let store = split_store([35_000.0, 33_000.0, 32_000.0]);
        assert!(detect_concentration_risk(&store, &config()).is_none());
    }

    #[test]
    fn test_concentration_between_thresholds_is_medium() {
        let store = split_store([40_000.0, 30_000.0, 30_000.0]);
        let insight = detect_concentration_risk(&store, &config()).unwrap();
        assert_eq!(insight.priority, Priority::Medium);
    }

    #[test]
    fn test_concentration_suggests_unused_card() {
        let store = processor_store(
            vec![
                processor(1, "main", ProcessorType::Card, "2022-01-01"),
                processor(2, "idle-wallet", ProcessorType::Wallet, "2022-01-01"),
                processor(3, "idle-card", ProcessorType::Card, "2022-01-01"),
            ],
            vec![perf("main", 100_000.0, 80.0, 2.9, &["GT"])],
        );
        let insight = detect_concentration_risk(&store, &config()).unwrap();
        assert_eq!(insight.actions[0], "Activate a backup processor with rate >= 85%");
        assert_eq!(insight.actions[1], "Activate idle-card as contingency");
    }

    #[test]
    fn test_concentration_needs_volume() {
        let store = processor_store(
            vec![processor(1, "idle", ProcessorType::Card, "2022-01-01")],
            Vec::new(),
        );
        assert!(detect_concentration_risk(&store, &config()).is_none());
    }

    #[test]
    fn test_cost_optimization_uses_forty_percent_move() {
        let store = processor_store(
            vec![
                processor(1, "pricey", ProcessorType::Wallet, "2022-01-01"),
                processor(2, "cheap", ProcessorType::Cash, "2022-01-01"),
            ],
            vec![
                perf("pricey", 247_000.0, 91.0, 3.4, &["GT"]),
                perf("cheap", 41_000.0, 99.0, 1.5, &["GT"]),
            ],
        );
        let insight = detect_cost_optimization(&store, &config()).unwrap();
        let expected = 247_000.0 * 0.4 * (3.4 - 1.5) / 100.0 / 12.0;
        assert!((insight.ebitda_impact - expected).abs() < 1e-6);
        assert_eq!(insight.priority, Priority::Medium);
        assert_eq!(insight.actions[1], "Estimated rate change: +8pp");
    }

    #[test]
    fn test_cost_optimization_high_priority_over_1000() {
        let store = processor_store(
            vec![
                processor(1, "pricey", ProcessorType::Wallet, "2022-01-01"),
                processor(2, "cheap", ProcessorType::Cash, "2022-01-01"),
            ],
            vec![
                perf("pricey", 2_000_000.0, 91.0, 3.4, &["GT"]),
                perf("cheap", 41_000.0, 99.0, 1.5, &["GT"]),
            ],
        );
        let insight = detect_cost_optimization(&store, &config()).unwrap();
        assert_eq!(insight.priority, Priority::High);
    }

    #[test]
    fn test_cost_optimization_ignores_small_gap() {
        let store = processor_store(
            vec![
                processor(1, "a", ProcessorType::Card, "2022-01-01"),
                processor(2, "b", ProcessorType::Card, "2022-01-01"),
            ],
            vec![
                perf("a", 100_000.0, 90.0, 3.0, &["GT"]),
                perf("b", 100_000.0, 90.0, 2.85, &["GT"]),
            ],
        );
        assert!(detect_cost_optimization(&store, &config()).is_none());
    }

    fn merchant_store(merchant_rate: f64, merchant_usd: f64, days: u32) -> DataStore {
        let processors: Vec<Processor> = vec![
            processor(1, "best", ProcessorType::Digital, "2022-01-01"),
            processor(2, "other", ProcessorType::Card, "2022-01-01"),
        ];
        let performance: Vec<(String, PerformanceRecord)> = vec![
            perf("best", 100_000.0, 95.0, 3.0, &["GT"]),
            perf("other", 100_000.0, 80.0, 2.9, &["GT"]),
        ];
        DataStore::new(
            vec![merchant(10, "whale", 5_000), merchant(11, "minnow", 50)],
            BTreeMap::from([
                (10, stats(merchant_rate, days, merchant_usd)),
                (11, stats(75.0, 2, 60_000.0)),
            ]),
            processors,
            performance,
        )
    }

    #[test]
    fn test_success_rate_opportunity_picks_highest_volume_healthy_merchant() {
        let store = merchant_store(80.0, 4_000_000.0, 3);
        let insight = detect_success_rate_opportunity(&store, &config()).unwrap();
        assert_eq!(insight.title, "whale on a suboptimal processor");
        let expected = 4_000_000.0 * 0.15 * 0.018 / 12.0;
        assert!((insight.ebitda_impact - expected).abs() < 1e-6);
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.category, InsightCategory::Merchant);
    }

    #[test]
    fn test_success_rate_opportunity_skips_unhealthy_merchants() {
        // The whale is in the risk band (moderate rate), so only the minnow qualifies.
        let store = merchant_store(64.4, 400_000.0, 3);
        let insight = detect_success_rate_opportunity(&store, &config()).unwrap();
        assert_eq!(insight.title, "minnow on a suboptimal processor");
        assert_eq!(insight.priority, Priority::Medium);
    }

    #[test]
    fn test_success_rate_gap_prints_one_decimal() {
        // 95.0 - 82.1 is not exactly 12.9 in binary
        let store = merchant_store(82.1, 4_000_000.0, 3);
        let insight = detect_success_rate_opportunity(&store, &config()).unwrap();
        assert!(
            insight.description.contains("Closing the 12.9pp gap"),
            "{}",
            insight.description
        );
        assert!(insight.actions[1].starts_with("Potential: +12.9pp approval rate on $4.00M"));
    }

    #[test]
    fn test_success_rate_opportunity_needs_candidates() {
        let store = processor_store(
            vec![
                processor(1, "a", ProcessorType::Card, "2022-01-01"),
                processor(2, "b", ProcessorType::Card, "2022-01-01"),
            ],
            vec![
                perf("a", 100_000.0, 90.0, 3.0, &["GT"]),
                perf("b", 100_000.0, 80.0, 3.0, &["GT"]),
            ],
        );
        assert!(detect_success_rate_opportunity(&store, &config()).is_none());
    }

    #[test]
    fn test_low_rate_processor_gap() {
        let store = processor_store(
            vec![
                processor(1, "weak", ProcessorType::Local, "2022-01-01"),
                processor(2, "strong", ProcessorType::Card, "2022-01-01"),
                processor(3, "tiny", ProcessorType::Cash, "2022-01-01"),
            ],
            vec![
                perf("weak", 124_000.0, 79.0, 2.8, &["GT"]),
                perf("strong", 200_000.0, 92.0, 2.9, &["GT"]),
                // Below the volume floor, ignored even though its rate is worse
                perf("tiny", 40_000.0, 50.0, 1.5, &["GT"]),
            ],
        );
        let insight = detect_low_rate_processor(&store, &config()).unwrap();
        assert_eq!(insight.title, "weak below approval benchmark");
        assert_eq!(insight.priority, Priority::Medium);
        let expected = 124_000.0 * 0.06 * 0.018 / 12.0;
        assert!((insight.ebitda_impact - expected).abs() < 1e-6);
        assert_eq!(insight.actions[0], "Migrate volume from weak (79%) to strong (92%)");
    }

    #[test]
    fn test_low_rate_processor_high_priority_over_ten_points() {
        let store = processor_store(
            vec![
                processor(1, "weak", ProcessorType::Local, "2022-01-01"),
                processor(2, "weaker", ProcessorType::Card, "2022-01-01"),
            ],
            vec![
                perf("weak", 124_000.0, 80.0, 2.8, &["GT"]),
                perf("weaker", 200_000.0, 70.0, 2.9, &["GT"]),
            ],
        );
        let insight = detect_low_rate_processor(&store, &config()).unwrap();
        assert_eq!(insight.title, "weaker below approval benchmark");
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.actions[0], "Migrate volume from weaker (70%) to weak (80%)");
    }

    #[test]
    fn test_low_rate_processor_meets_benchmark() {
        let store = split_store([60_000.0, 60_000.0, 60_000.0]);
        // alpha at 80% is the worst and sits below 85%
        assert!(detect_low_rate_processor(&store, &config()).is_some());

        let strict = AnalyticsConfig {
            insights: crate::config::InsightThresholds {
                success_benchmark: 75.0,
                ..Default::default()
            },
            ..AnalyticsConfig::default()
        };
        assert!(detect_low_rate_processor(&store, &strict).is_none());
    }

    #[test]
    fn test_digital_growth_targets_fifteen_percent() {
        let store = processor_store(
            vec![
                processor(1, "card", ProcessorType::Card, "2022-01-01"),
                processor(2, "gpay", ProcessorType::Digital, "2022-01-01"),
            ],
            vec![
                perf("card", 950_000.0, 82.0, 2.9, &["GT"]),
                perf("gpay", 50_000.0, 94.0, 3.0, &["GT"]),
            ],
        );
        let insight = detect_digital_growth(&store, &config()).unwrap();
        let expected = (150_000.0 - 50_000.0) * 0.018 / 12.0;
        assert!((insight.ebitda_impact - expected).abs() < 1e-6);
        assert_eq!(insight.priority, Priority::Medium);
        assert!(insight.description.starts_with("gpay (94%) represent only 5% of volume"));
    }

    #[test]
    fn test_digital_growth_silent_at_target() {
        let store = processor_store(
            vec![
                processor(1, "card", ProcessorType::Card, "2022-01-01"),
                processor(2, "gpay", ProcessorType::Digital, "2022-01-01"),
            ],
            vec![
                perf("card", 800_000.0, 82.0, 2.9, &["GT"]),
                perf("gpay", 200_000.0, 94.0, 3.0, &["GT"]),
            ],
        );
        assert!(detect_digital_growth(&store, &config()).is_none());
    }

    #[test]
    fn test_geographic_concentration_lists_underserved_markets() {
        let store = processor_store(
            vec![
                processor(1, "domestic", ProcessorType::Local, "2022-01-01"),
                processor(2, "regional", ProcessorType::Card, "2022-01-01"),
            ],
            vec![
                perf("domestic", 800_000.0, 90.0, 2.8, &["GT"]),
                perf("regional", 200_000.0, 90.0, 2.9, &["GT", "SV", "HN", "CR"]),
            ],
        );
        let insight = detect_geographic_concentration(&store, &config()).unwrap();
        // GT: 850K of 1M; SV, HN, CR: 50K each
        assert!(insight.description.starts_with("85% of volume is concentrated in GT."));
        assert!(insight.description.contains("Underserved markets: SV, HN, CR."));
        let expected = 100_000.0 * 0.018 / 12.0;
        assert!((insight.ebitda_impact - expected).abs() < 1e-6);
        assert_eq!(insight.category, InsightCategory::Geographic);
    }

    #[test]
    fn test_geographic_concentration_needs_two_countries() {
        let store = processor_store(
            vec![processor(1, "domestic", ProcessorType::Local, "2022-01-01")],
            vec![perf("domestic", 800_000.0, 90.0, 2.8, &["GT"])],
        );
        assert!(detect_geographic_concentration(&store, &config()).is_none());
    }

    #[test]
    fn test_geographic_concentration_needs_underserved_market() {
        let store = processor_store(
            vec![
                processor(1, "domestic", ProcessorType::Local, "2022-01-01"),
                processor(2, "other", ProcessorType::Local, "2022-01-01"),
            ],
            vec![
                perf("domestic", 850_000.0, 90.0, 2.8, &["GT"]),
                perf("other", 150_000.0, 90.0, 2.8, &["SV"]),
            ],
        );
        assert!(detect_geographic_concentration(&store, &config()).is_none());
    }

    fn idle_store(count: u64) -> DataStore {
        let mut processors = vec![processor(1, "main", ProcessorType::Card, "2022-01-01")];
        for i in 0..count {
            let created = format!("2023-{:02}-01", (count - i) % 12 + 1);
            let kind = if i % 2 == 0 { ProcessorType::Wallet } else { ProcessorType::Other };
            processors.push(processor(100 + i, &format!("idle-{i}"), kind, &created));
        }
        processor_store(processors, vec![perf("main", 100_000.0, 90.0, 2.9, &["GT"])])
    }

    #[test]
    fn test_unused_resources_threshold() {
        assert!(detect_unused_resources(&idle_store(5), &config()).is_none());

        let insight = detect_unused_resources(&idle_store(6), &config()).unwrap();
        assert_eq!(insight.title, "6 unused processors");
        assert_eq!(insight.ebitda_impact, 90.0);
        assert_eq!(insight.priority, Priority::Low);
        assert_eq!(insight.insight_type, InsightType::Optimization);
        assert_eq!(insight.actions[2], "Evaluate activating 3 idle wallets");
    }

    #[test]
    fn test_unused_resources_medium_over_thirty() {
        let insight = detect_unused_resources(&idle_store(31), &config()).unwrap();
        assert_eq!(insight.priority, Priority::Medium);
        assert_eq!(insight.ebitda_impact, 465.0);
    }

    #[test]
    fn test_unused_resources_lists_oldest_first() {
        let store = processor_store(
            vec![
                processor(1, "newest", ProcessorType::Other, "2025-01-01"),
                processor(2, "old-a", ProcessorType::Other, "2022-03-07"),
                processor(3, "mid", ProcessorType::Other, "2023-06-01"),
                processor(4, "old-b", ProcessorType::Other, "2022-03-07"),
                processor(5, "later", ProcessorType::Other, "2024-01-01"),
                processor(6, "oldest", ProcessorType::Other, "2021-01-01"),
            ],
            Vec::new(),
        );
        let insight = detect_unused_resources(&store, &config()).unwrap();
        assert!(insight
            .description
            .contains("Oldest idle integrations: oldest, old-a, old-b, mid, later."));
    }
}
