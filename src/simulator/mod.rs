//! Routing Simulator — what-if reallocation of volume between processors.
//!
//! Moving a share of one processor's volume to another changes the
//! commission paid and the expected approval rate. [`RoutingSimulation`]
//! figures are on the same (annual) basis as the processor volumes;
//! [`MonthlyBreakdown`] restates a move per month.

pub mod cost;

use crate::config::AnalyticsConfig;
use crate::data::DataStore;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::processor::ProcessorPerformance;
use crate::models::routing::{MonthlyBreakdown, RoutingSimulation};

/// Simulate moving `percent` of `from_id`'s volume to `to_id`.
///
/// Lenient: if either processor is unknown, returns an all-zero
/// simulation instead of failing. `percent` is not range-checked.
pub fn simulate_routing(
    store: &DataStore,
    from_id: u64,
    to_id: u64,
    percent: f64,
) -> RoutingSimulation {
    match (store.processor(from_id), store.processor(to_id)) {
        (Some(from), Some(to)) => simulate_between(from, to, percent),
        _ => {
            log::debug!("routing {from_id} -> {to_id}: unknown processor, returning zeros");
            RoutingSimulation::default()
        }
    }
}

/// Validating variant of [`simulate_routing`].
///
/// Fails with `NotFound` for an unknown processor and `InvalidRange` when
/// `percent` is outside [0, 100].
pub fn try_simulate_routing(
    store: &DataStore,
    from_id: u64,
    to_id: u64,
    percent: f64,
) -> AnalyticsResult<RoutingSimulation> {
    let (from, to) = resolve_move(store, from_id, to_id, percent)?;
    Ok(simulate_between(from, to, percent))
}

/// Validating monthly view of a move; fails like [`try_simulate_routing`].
pub fn try_monthly_breakdown(
    store: &DataStore,
    config: &AnalyticsConfig,
    from_id: u64,
    to_id: u64,
    percent: f64,
) -> AnalyticsResult<MonthlyBreakdown> {
    let (from, to) = resolve_move(store, from_id, to_id, percent)?;
    Ok(monthly_breakdown(config, from, to, percent))
}

fn resolve_move(
    store: &DataStore,
    from_id: u64,
    to_id: u64,
    percent: f64,
) -> AnalyticsResult<(&ProcessorPerformance, &ProcessorPerformance)> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(AnalyticsError::InvalidRange {
            field: "percent",
            value: percent,
        });
    }
    let from = store.processor(from_id).ok_or(AnalyticsError::NotFound {
        entity: "processor",
        id: from_id,
    })?;
    let to = store.processor(to_id).ok_or(AnalyticsError::NotFound {
        entity: "processor",
        id: to_id,
    })?;
    Ok((from, to))
}

/// Core formula shared by both entry points.
pub fn simulate_between(
    from: &ProcessorPerformance,
    to: &ProcessorPerformance,
    percent: f64,
) -> RoutingSimulation {
    let volume_to_move = from.total_volume * (percent / 100.0);
    let current_cost = volume_to_move * (from.avg_cost / 100.0);
    let new_cost = volume_to_move * (to.avg_cost / 100.0);

    RoutingSimulation {
        current_cost,
        new_cost,
        impact_usd: current_cost - new_cost,
        success_rate_change: to.success_rate - from.success_rate,
    }
}

/// Restate a move per month.
///
/// Fee figures use each processor's own cost rate. Extra approvals
/// (a positive success-rate change) are valued at the platform commission
/// via [`AnalyticsConfig::monthly_commission`].
pub fn monthly_breakdown(
    config: &AnalyticsConfig,
    from: &ProcessorPerformance,
    to: &ProcessorPerformance,
    percent: f64,
) -> MonthlyBreakdown {
    let months = config.months_per_year;
    let simulation = simulate_between(from, to, percent);

    let volume_to_move = from.total_volume * (percent / 100.0);
    let remaining_from = from.total_volume - volume_to_move;
    let net_cost_savings = simulation.impact_usd / months;
    let rate_improvement = simulation.success_rate_change;
    let additional_revenue = if rate_improvement > 0.0 {
        config.monthly_commission(volume_to_move * (rate_improvement / 100.0))
    } else {
        0.0
    };

    MonthlyBreakdown {
        volume_to_move,
        remaining_from,
        monthly_cost_from: from.total_volume * (from.avg_cost / 100.0) / months,
        new_monthly_cost_from: remaining_from * (from.avg_cost / 100.0) / months,
        new_monthly_cost_to: volume_to_move * (to.avg_cost / 100.0) / months,
        net_cost_savings,
        rate_improvement,
        additional_revenue,
        total_monthly_impact: net_cost_savings + additional_revenue,
    }
}
