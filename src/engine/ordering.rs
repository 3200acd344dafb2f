//! Insight ordering for the engine's output.
//!
//! Insights are ranked by priority (high, medium, low), the variant order
//! of [`Priority`](crate::models::insight::Priority). Within a priority,
//! the larger absolute monthly EBITDA impact comes first, whether it is
//! exposure or upside.

use std::cmp::Ordering;

use crate::models::insight::Insight;

/// Compare two insights for display order.
pub fn compare_insights(a: &Insight, b: &Insight) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| b.ebitda_impact.abs().total_cmp(&a.ebitda_impact.abs()))
}

/// Sort insights in place. Stable: equal insights keep detector order.
pub fn sort_insights(insights: &mut [Insight]) {
    insights.sort_by(compare_insights);
}
