use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use processor_insights::config::AnalyticsConfig;
use processor_insights::data::DataStore;
use processor_insights::report::{portfolio_summary, top_merchants};

const TOP_MERCHANTS: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

/// GET /api/portfolio — Portfolio KPIs and the top merchants by volume.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use GET to fetch the portfolio summary"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let store = DataStore::bundled()?;
    let config = AnalyticsConfig::default();

    let payload = json!({
        "summary": portfolio_summary(&store, &config),
        "top_merchants": top_merchants(&store, &config, TOP_MERCHANTS),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
