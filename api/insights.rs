use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use processor_insights::config::AnalyticsConfig;
use processor_insights::data::DataStore;
use processor_insights::engine::InsightEngine;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

/// GET /api/insights — Ranked portfolio insights.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use GET to fetch insights"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let store = DataStore::bundled()?;
    let config = AnalyticsConfig::default();
    let insights = InsightEngine::new(&store, &config).generate();

    let payload = json!({
        "count": insights.len(),
        "net_monthly_impact": insights.iter().map(|i| i.ebitda_impact).sum::<f64>(),
        "insights": insights,
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
