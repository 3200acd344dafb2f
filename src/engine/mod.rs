//! Insight Engine — rule-based portfolio insights.
//!
//! Runs a fixed, ordered pipeline of independent detectors over the store
//! and ranks whatever they report by priority and monthly EBITDA impact.

pub mod detectors;
pub mod ordering;

use crate::config::AnalyticsConfig;
use crate::data::DataStore;
use crate::models::insight::Insight;

/// A detector inspects the store and optionally reports one insight.
pub type Detector = fn(&DataStore, &AnalyticsConfig) -> Option<Insight>;

/// The detector pipeline, in execution order.
pub const DETECTORS: [(&str, Detector); 7] = [
    ("concentration-risk", detectors::detect_concentration_risk),
    ("cost-optimization", detectors::detect_cost_optimization),
    ("success-rate-opportunity", detectors::detect_success_rate_opportunity),
    ("low-rate-processor", detectors::detect_low_rate_processor),
    ("digital-growth", detectors::detect_digital_growth),
    ("geographic-concentration", detectors::detect_geographic_concentration),
    ("unused-resources", detectors::detect_unused_resources),
];

/// Produces ranked insights from a store.
pub struct InsightEngine<'a> {
    store: &'a DataStore,
    config: &'a AnalyticsConfig,
}

impl<'a> InsightEngine<'a> {
    /// Creates an engine over the given store and thresholds.
    pub fn new(store: &'a DataStore, config: &'a AnalyticsConfig) -> Self {
        InsightEngine { store, config }
    }

    /// Run every detector and return the reported insights, ranked.
    pub fn generate(&self) -> Vec<Insight> {
        let mut insights: Vec<Insight> = DETECTORS
            .iter()
            .filter_map(|(name, detect)| {
                let insight = detect(self.store, self.config);
                let outcome = if insight.is_some() { "reported" } else { "silent" };
                log::debug!("detector {name}: {outcome}");
                insight
            })
            .collect();

        ordering::sort_insights(&mut insights);

        log::info!(
            "generated {} insights, net monthly impact {:.2}",
            insights.len(),
            insights.iter().map(|i| i.ebitda_impact).sum::<f64>()
        );
        insights
    }
}
