use serde::{Deserialize, Serialize};

/// What kind of signal an insight carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Risk,
    Opportunity,
    Optimization,
}

/// Insight priority. Variant order is the display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Business area an insight belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Processor,
    Merchant,
    Geographic,
    Operational,
}

/// A structured finding produced by one of the insight detectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    /// Stable detector identifier (e.g., "concentration-risk").
    pub id: String,
    pub title: String,
    /// Narrative with the computed figures embedded.
    pub description: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub priority: Priority,
    /// Estimated EBITDA effect in USD per month. Negative for exposure,
    /// positive for savings or extra revenue.
    pub ebitda_impact: f64,
    pub category: InsightCategory,
    /// Recommended next steps.
    pub actions: Vec<String>,
}
