use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use processor_insights::data::DataStore;
use processor_insights::version;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

/// GET /api/health — Liveness plus a check that the bundled dataset loads.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let (status, payload) = match DataStore::bundled() {
        Ok(store) => (
            StatusCode::OK,
            json!({
                "status": "ok",
                "version": version(),
                "merchants": store.merchants().len(),
                "processors": store.processor_performance().len(),
            }),
        ),
        Err(e) => {
            log::error!("bundled dataset failed to load: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "status": "error",
                    "version": version(),
                    "message": e.to_string(),
                }),
            )
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
