use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use processor_insights::config::AnalyticsConfig;
use processor_insights::data::DataStore;
use processor_insights::health::merchant_health;
use processor_insights::models::report::MerchantHealthRequest;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

fn json_response(status: StatusCode, payload: serde_json::Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

/// POST /api/merchant_health — Score one merchant.
///
/// Body: `{"merchant_id": 391}`. Unknown merchants return 404.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({
                "error": "Method not allowed",
                "message": "Use POST with {\"merchant_id\": <id>}"
            }),
        );
    }

    let request: MerchantHealthRequest = match serde_json::from_slice(req.body()) {
        Ok(r) => r,
        Err(e) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request body", "message": e.to_string() }),
            );
        }
    };

    let store = DataStore::bundled()?;
    let config = AnalyticsConfig::default();

    let Some(merchant) = store.merchant(request.merchant_id) else {
        return json_response(
            StatusCode::NOT_FOUND,
            json!({
                "error": "Not found",
                "message": format!("merchant {} not found", request.merchant_id)
            }),
        );
    };

    let health = merchant_health(&store, &config, merchant.id);
    log::info!("merchant {} scored {} ({})", merchant.id, health.score, health.level);

    json_response(
        StatusCode::OK,
        json!({
            "merchant": merchant,
            "transactions": store.transaction_stats(merchant.id),
            "health": health,
        }),
    )
}
