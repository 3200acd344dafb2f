use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use processor_insights::config::AnalyticsConfig;
use processor_insights::data::DataStore;
use processor_insights::simulator::cost::analyze_cost;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

/// GET /api/processors — Processor performance, grouped by type, with cost analysis.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use GET to list processor performance"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let store = DataStore::bundled()?;
    let config = AnalyticsConfig::default();

    let mut by_type = serde_json::Map::new();
    for (kind, processors) in store.processors_by_type() {
        by_type.insert(kind.to_string(), serde_json::to_value(processors)?);
    }

    let payload = json!({
        "processors": store.processor_performance(),
        "active": store.active_processors().len(),
        "unused": store.unused_processors().len(),
        "by_type": by_type,
        "cost_analysis": analyze_cost(&store, &config),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
