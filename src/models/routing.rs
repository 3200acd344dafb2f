use serde::{Deserialize, Serialize};

/// Financial and quality impact of moving volume between two processors.
///
/// Costs are on the same (annual) basis as processor volumes; divide by 12
/// for a monthly figure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RoutingSimulation {
    /// Commission paid on the moved volume at the source processor.
    pub current_cost: f64,
    /// Commission the same volume would cost at the target processor.
    pub new_cost: f64,
    /// `current_cost - new_cost`. Positive means savings.
    pub impact_usd: f64,
    /// Target minus source success rate, in percentage points.
    pub success_rate_change: f64,
}

/// API request body for the /api/simulate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processor the volume is taken from.
    pub from_id: u64,
    /// Processor the volume is moved to.
    pub to_id: u64,
    /// Share of the source volume to move (0.0–100.0).
    pub percent: f64,
}

/// Monthly view of a routing move, as shown to operators.
///
/// Cost figures are monthly commission at each processor's own rate.
/// `additional_revenue` is the platform commission on transactions the
/// target approves that the source would have declined; it is zero when
/// the target does not approve more.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MonthlyBreakdown {
    /// Annual volume taken from the source processor.
    pub volume_to_move: f64,
    /// Annual volume left on the source processor.
    pub remaining_from: f64,
    pub monthly_cost_from: f64,
    pub new_monthly_cost_from: f64,
    /// Monthly commission on the moved volume at the target's rate.
    pub new_monthly_cost_to: f64,
    /// Monthly fee saving (`impact_usd / 12`). Negative means the move costs more.
    pub net_cost_savings: f64,
    /// Success-rate change in percentage points.
    pub rate_improvement: f64,
    pub additional_revenue: f64,
    /// `net_cost_savings + additional_revenue`.
    pub total_monthly_impact: f64,
}
