//! HTTP relay surface for other frontends.
//!
//! `fehrist serve` exposes the two plan endpoints over HTTP and forwards
//! each request body verbatim to the configured plan service, mirroring
//! the upstream status in the response. No payload is interpreted or
//! reshaped on the way through; only an unreachable upstream produces a
//! response of our own (502).

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use fehrist_core::{PlanClient, StoreError};
use serde_json::Value;
use tower_http::cors::CorsLayer;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_gateway(err: StoreError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(client: PlanClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ping", get(ping))
        .route("/plan/generate", post(generate))
        .route("/plan/regenerate", post(regenerate))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(client))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(client: PlanClient, bind: &str, port: u16) -> Result<()> {
    let app = build_router(client);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    log::info!("fehrist serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("fehrist serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        log::warn!("Failed to install Ctrl+C handler; running without graceful shutdown");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn ping() -> Json<Value> {
    Json(serde_json::json!({ "pong": true }))
}

async fn generate(
    State(client): State<Arc<PlanClient>>,
    Json(body): Json<Value>,
) -> Result<axum::response::Response, AppError> {
    relay(&client, "/plan/generate", body).await
}

async fn regenerate(
    State(client): State<Arc<PlanClient>>,
    Json(body): Json<Value>,
) -> Result<axum::response::Response, AppError> {
    relay(&client, "/plan/regenerate", body).await
}

async fn relay(
    client: &PlanClient,
    path: &str,
    body: Value,
) -> Result<axum::response::Response, AppError> {
    let (status, value) = client
        .forward(path, body)
        .await
        .map_err(AppError::bad_gateway)?;

    // Mirror whatever the upstream said, status included
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(value)).into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use fehrist_core::PlanClient;
    use serde_json::json;
    use tower::ServiceExt;

    // -----------------------------------------------------------------------
    // HTTP helpers
    // -----------------------------------------------------------------------

    async fn send_get(client: PlanClient, uri: &str) -> axum::response::Response {
        let app = super::build_router(client);
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn send_post(
        client: PlanClient,
        uri: &str,
        payload: serde_json::Value,
    ) -> axum::response::Response {
        let app = super::build_router(client);
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1_048_576)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn unreachable_client() -> PlanClient {
        // Nothing listens on the discard port
        PlanClient::new("http://127.0.0.1:9").unwrap()
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn test_health() {
        let resp = send_get(unreachable_client(), "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_ping() {
        let resp = send_get(unreachable_client(), "/ping").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"pong": true}));
    }

    #[tokio::test]
    async fn test_generate_relays_upstream_response() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", "/plan/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "blocks": [],
                    "totalDurationMinutes": 0,
                    "totalBlocks": 0,
                    "quickTaskUsed": false,
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = PlanClient::new(server.url()).unwrap();
        let resp = send_post(client, "/plan/generate", json!({"tasks": []})).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["totalBlocks"], 0);
        upstream.assert_async().await;
    }

    #[tokio::test]
    async fn test_relay_mirrors_upstream_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _upstream = server
            .mock("POST", "/plan/regenerate")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(json!({"detail": "tasks field required"}).to_string())
            .create_async()
            .await;

        let client = PlanClient::new(server.url()).unwrap();
        let resp = send_post(client, "/plan/regenerate", json!({"randomness": 0.35})).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert_eq!(body["detail"], "tasks field required");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let resp = send_post(unreachable_client(), "/plan/generate", json!({"tasks": []})).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(resp).await;
        assert!(body.get("error").is_some());
    }
}
