use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use processor_insights::config::AnalyticsConfig;
use processor_insights::data::DataStore;
use processor_insights::error::AnalyticsError;
use processor_insights::models::routing::SimulationRequest;
use processor_insights::simulator::{try_monthly_breakdown, try_simulate_routing};

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

/// POST /api/simulate — What-if move of volume between two processors.
///
/// Body: `{"from_id": 1, "to_id": 2, "percent": 30}`.
/// Returns the annual simulation and its monthly breakdown.
/// 404 for an unknown processor, 422 for a percent outside [0, 100].
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({
                "error": "Method not allowed",
                "message": "Use POST with {\"from_id\", \"to_id\", \"percent\"}"
            }),
        );
    }

    let request: SimulationRequest = match serde_json::from_slice(req.body()) {
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
    let (from, to, percent) = (request.from_id, request.to_id, request.percent);
    let result = try_simulate_routing(&store, from, to, percent).and_then(|simulation| {
        try_monthly_breakdown(&store, &config, from, to, percent)
            .map(|monthly| (simulation, monthly))
    });

    match result {
        Ok((simulation, monthly)) => {
            log::info!(
                "simulated {}% from {} to {}: impact {:.2}",
                request.percent,
                request.from_id,
                request.to_id,
                simulation.impact_usd
            );
            json_response(
                StatusCode::OK,
                json!({ "request": request, "simulation": simulation, "monthly": monthly }),
            )
        }
        Err(e @ AnalyticsError::NotFound { .. }) => json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": "Not found", "message": e.to_string() }),
        ),
        Err(e @ AnalyticsError::InvalidRange { .. }) => json_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": "Invalid range", "message": e.to_string() }),
        ),
        Err(e) => Err(e.into()),
    }
}
