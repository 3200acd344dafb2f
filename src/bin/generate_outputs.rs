//! CLI tool to export every derived view of the bundled portfolio.
//!
//! Usage: `generate_outputs [config.json]`
//!
//! Produces:
//! - `output/processor_performance.json` — Joined processor catalog and metrics
//! - `output/cost_analysis.json` — Annual commission, savings, recommendations
//! - `output/insights.json` — Ranked insights
//! - `output/portfolio_summary.json` — Portfolio KPIs and top merchants

use processor_insights::config::AnalyticsConfig;
use processor_insights::data::DataStore;
use processor_insights::engine::InsightEngine;
use processor_insights::error::AnalyticsResult;
use processor_insights::format::format_usd;
use processor_insights::report::{portfolio_summary, top_merchants};
use processor_insights::simulator::cost::analyze_cost;
use serde::Serialize;
use serde_json::json;

const OUTPUT_DIR: &str = "output";
const TOP_MERCHANTS: usize = 10;

fn write_json<T: Serialize>(file: &str, value: &T) -> AnalyticsResult<()> {
    let path = format!("{OUTPUT_DIR}/{file}");
    std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
    println!("Wrote {path}");
    Ok(())
}

fn main() -> AnalyticsResult<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading thresholds from {path}");
            AnalyticsConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => AnalyticsConfig::default(),
    };

    let store = DataStore::bundled()?;
    std::fs::create_dir_all(OUTPUT_DIR)?;

    write_json("processor_performance.json", &store.processor_performance())?;

    let cost = analyze_cost(&store, &config);
    write_json("cost_analysis.json", &cost)?;

    let insights = InsightEngine::new(&store, &config).generate();
    write_json("insights.json", &insights)?;

    let summary = portfolio_summary(&store, &config);
    let top = top_merchants(&store, &config, TOP_MERCHANTS);
    write_json(
        "portfolio_summary.json",
        &json!({ "summary": &summary, "top_merchants": &top }),
    )?;

    // Print summary
    println!();
    println!("=== PORTFOLIO SUMMARY ===");
    println!(
        "Merchants:           {} ({} on platform)",
        summary.total_merchants, summary.on_platform_merchants
    );
    println!("With transactions:   {}", summary.merchants_with_transactions);
    println!("Active (<= {}d):     {}", config.health.active_window_days, summary.active_merchants);
    println!(
        "Transactions:        {} ({} successful)",
        summary.total_transactions, summary.successful_transactions
    );
    println!("Avg Success Rate:    {:.1}%", summary.avg_success_rate);
    println!("Volume:              {}", format_usd(summary.total_volume_usd));
    println!();
    println!("--- Merchant Health ---");
    println!("  Healthy:  {}", summary.health.healthy);
    println!("  Risk:     {}", summary.health.risk);
    println!("  Critical: {}", summary.health.critical);
    println!();
    let rates = &summary.success_rates;
    println!("--- Success Rate Distribution ---");
    println!("  0%:       {}", rates.zero);
    println!("  1-30%:    {}", rates.under_30);
    println!("  30-50%:   {}", rates.under_50);
    println!("  50-70%:   {}", rates.under_70);
    println!("  70-90%:   {}", rates.under_90);
    println!("  90-100%:  {}", rates.at_least_90);
    println!("  Mean Rate:    {:.1}% ({:.0}% critical)", rates.mean_rate, rates.critical_pct);
    println!();
    println!("--- Top Merchants ---");
    for m in &top {
        println!("  {} {}: {} ({:.1}% success, {} {})",
            m.masked_id, m.name, format_usd(m.total_usd),
            m.success_rate, m.health_level, m.health_score);
    }
    println!();
    println!("--- Processors ---");
    println!("  Active: {}", store.active_processors().len());
    println!("  Unused: {}", store.unused_processors().len());
    println!("  Annual Commission:  {}", format_usd(cost.total_annual_cost));
    println!("  Potential Savings:  {}", format_usd(cost.potential_savings));
    for rec in &cost.recommendations {
        println!("  - {rec}");
    }
    println!();
    println!("--- Insights ---");
    for insight in &insights {
        println!("  [{}] {}: {}/month",
            insight.priority, insight.title, format_usd(insight.ebitda_impact));
    }

    Ok(())
}
