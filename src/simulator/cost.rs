//! Processing cost analysis.
//!
//! Totals the annual commission paid across active processors and prices
//! a set of hypothetical reallocations toward the anchor processor (the
//! one carrying the most volume). Every processor charging more than the
//! anchor by over `min_cost_diff` percentage points is priced as a full
//! move: `volume × (cost − anchor_cost) / 100`.

use crate::config::AnalyticsConfig;
use crate::data::DataStore;
use crate::format::{format_usd, join_names};
use crate::models::processor::{CostAnalysis, ProcessorPerformance, ProcessorType};

/// A hypothetical full move of one processor's volume to the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsMove<'a> {
    pub from: &'a ProcessorPerformance,
    pub to: &'a ProcessorPerformance,
    /// Cost gap in percentage points.
    pub cost_diff: f64,
    /// Period saving if the whole volume moved.
    pub savings: f64,
}

/// Analyze processing cost and savings opportunities across active processors.
pub fn analyze_cost(store: &DataStore, config: &AnalyticsConfig) -> CostAnalysis {
    let active = store.active_processors();

    let total_annual_cost: f64 = active
        .iter()
        .map(|p| p.total_volume * (p.avg_cost / 100.0))
        .sum();

    let moves = savings_moves(&active, config.insights.min_cost_diff);
    let potential_savings: f64 = moves.iter().map(|m| m.savings).sum();

    let recommendations = build_recommendations(store, config, &active, &moves);

    log::info!(
        "cost analysis: annual cost {}, potential savings {} across {} moves",
        format_usd(total_annual_cost),
        format_usd(potential_savings),
        moves.len()
    );

    CostAnalysis {
        total_annual_cost,
        potential_savings,
        recommendations,
    }
}

/// The highest-volume active processor (first in catalog order on ties).
pub fn anchor_processor<'a>(
    active: &[&'a ProcessorPerformance],
) -> Option<&'a ProcessorPerformance> {
    let mut by_volume = active.to_vec();
    by_volume.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
    by_volume.first().copied()
}

/// Hypothetical moves toward the anchor, largest saving first.
pub fn savings_moves<'a>(
    active: &[&'a ProcessorPerformance],
    min_cost_diff: f64,
) -> Vec<SavingsMove<'a>> {
    let Some(anchor) = anchor_processor(active) else {
        return Vec::new();
    };

    let mut moves: Vec<SavingsMove<'a>> = active
        .iter()
        .filter(|p| p.id != anchor.id)
        .filter_map(|&p| {
            let cost_diff = p.avg_cost - anchor.avg_cost;
            (cost_diff > min_cost_diff).then(|| SavingsMove {
                from: p,
                to: anchor,
                cost_diff,
                savings: p.total_volume * (cost_diff / 100.0),
            })
        })
        .collect();
    moves.sort_by(|a, b| b.savings.total_cmp(&a.savings));
    moves
}

fn build_recommendations(
    store: &DataStore,
    config: &AnalyticsConfig,
    active: &[&ProcessorPerformance],
    moves: &[SavingsMove<'_>],
) -> Vec<String> {
    let thresholds = &config.insights;
    let mut recommendations = Vec::new();

    for m in moves {
        let partial_volume = m.from.total_volume * (thresholds.partial_move_pct / 100.0);
        let partial_savings = partial_volume * (m.cost_diff / 100.0);
        recommendations.push(format!(
            "Route {}% of {} volume ({}) to {} to save {} per period in fees ({}% → {}%)",
            thresholds.partial_move_pct,
            m.from.name,
            format_usd(partial_volume),
            m.to.name,
            format_usd(partial_savings),
            m.from.avg_cost,
            m.to.avg_cost
        ));
    }

    if let Some(anchor) = anchor_processor(active) {
        for p in active.iter().filter(|p| {
            p.id != anchor.id
                && p.total_volume > config.significant_volume_usd
                && p.success_rate < anchor.success_rate
        }) {
            recommendations.push(format!(
                "{} has {}% success rate vs {}% on {}. Evaluate migrating {} merchants to gain {:.1} approval points",
                p.name,
                p.success_rate,
                anchor.success_rate,
                anchor.name,
                join_names(&p.countries),
                anchor.success_rate - p.success_rate
            ));
        }
    }

    let digital: Vec<&&ProcessorPerformance> = active
        .iter()
        .filter(|p| p.processor_type == ProcessorType::Digital)
        .collect();
    if !digital.is_empty() {
        let names: Vec<&str> = digital.iter().map(|p| p.name.as_str()).collect();
        let low = digital.iter().map(|p| p.success_rate).fold(f64::INFINITY, f64::min);
        let high = digital.iter().map(|p| p.success_rate).fold(f64::NEG_INFINITY, f64::max);
        let range = if low == high {
            format!("{low}%")
        } else {
            format!("{low}-{high}%")
        };
        recommendations.push(format!(
            "{} show {} success rate. Prioritize adoption for merchants with success rate < {}%",
            join_names(&names),
            range,
            thresholds.digital_adoption_rate
        ));
    }

    let mut by_cost = active.to_vec();
    by_cost.sort_by(|a, b| a.avg_cost.total_cmp(&b.avg_cost));
    if let (Some(cheapest), Some(anchor)) = (by_cost.first(), anchor_processor(active)) {
        if cheapest.avg_cost < anchor.avg_cost {
            recommendations.push(format!(
                "{} has the lowest cost ({}%) and {}% success rate. Expand it to more merchants in {} to lower the average cost",
                cheapest.name,
                cheapest.avg_cost,
                cheapest.success_rate,
                join_names(&cheapest.countries)
            ));
        }
    }

    let unused = store.unused_processors().len();
    if unused > 0 {
        recommendations.push(format!(
            "{unused} processors without volume. Evaluate deactivation to reduce operational complexity and maintenance costs"
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{perf, processor, processor_store};

    #[test]
    fn test_bundled_totals_match_dashboard() {
        let store = DataStore::bundled().unwrap();
        let analysis = analyze_cost(&store, &AnalyticsConfig::default());

        let expected_total = 1_339_000.0 * 0.029
            + 247_000.0 * 0.034
            + 165_000.0 * 0.032
            + 124_000.0 * 0.028
            + 82_000.0 * 0.030
            + 62_000.0 * 0.030
            + 41_000.0 * 0.015;
        assert!((analysis.total_annual_cost - expected_total).abs() < 1e-6);
        // paypal 3.4% and mercadoPago 3.2% onto visa-cybersource 2.9%
        assert!((analysis.potential_savings - 1_730.0).abs() < 1e-6);
    }

    #[test]
    fn test_bundled_recommendation_order() {
        let store = DataStore::bundled().unwrap();
        let analysis = analyze_cost(&store, &AnalyticsConfig::default());
        let recs = &analysis.recommendations;
        assert_eq!(recs.len(), 6);
        assert!(recs[0].starts_with("Route 30% of paypal volume ($74.1K) to visa-cybersource"));
        assert!(recs[1].starts_with("Route 30% of mercadoPago"));
        assert!(recs[2].starts_with("bancoIndustrial has 79% success rate vs 82%"));
        assert!(recs[2].ends_with("to gain 3.0 approval points"));
        assert!(recs[3].starts_with("applePayFac and googlepay show 94-95% success rate"));
        assert!(recs[4].starts_with("cash has the lowest cost (1.5%)"));
        assert!(recs[5].starts_with("45 processors without volume"));
    }

    #[test]
    fn test_savings_moves_skip_small_gaps() {
        let store = processor_store(
            vec![
                processor(1, "anchor", ProcessorType::Card, "2022-01-01"),
                processor(2, "close", ProcessorType::Digital, "2022-01-01"),
                processor(3, "far", ProcessorType::Wallet, "2022-01-01"),
            ],
            vec![
                perf("anchor", 1_000_000.0, 80.0, 2.9, &["GT"]),
                perf("close", 100_000.0, 95.0, 3.0, &["GT"]),
                perf("far", 100_000.0, 90.0, 3.5, &["MX"]),
            ],
        );
        let active = store.active_processors();
        let moves = savings_moves(&active, 0.2);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from.name, "far");
        assert!((moves[0].savings - 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_active_processors() {
        let store = processor_store(
            vec![processor(1, "idle", ProcessorType::Card, "2022-01-01")],
            Vec::new(),
        );
        let analysis = analyze_cost(&store, &AnalyticsConfig::default());
        assert_eq!(analysis.total_annual_cost, 0.0);
        assert_eq!(analysis.potential_savings, 0.0);
        assert_eq!(
            analysis.recommendations,
            vec!["1 processors without volume. Evaluate deactivation to reduce operational complexity and maintenance costs"]
        );
    }
}
