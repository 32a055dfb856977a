// HTTP surface: axum router and handlers around the PaymentGateway
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::gateway::PaymentGateway;

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
const INVALID_XML_BODY: &str = "<error>Invalid XML</error>";

// Build the application router. The gateway is stateless, so a clone per
// handler invocation is all the shared state there is.
pub fn router(config: GatewayConfig) -> Router {
    let gateway = PaymentGateway::new(config);

    Router::new()
        .route("/", get(health_check).post(pay))
        .route("/cc5/pay", post(pay))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

// GET / - liveness probe for deploy platforms
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "service": "xml-mock",
        "time": Utc::now().to_rfc3339(),
    }))
}

// POST / and /cc5/pay - the mock endpoint. The body is read as text no
// matter what Content-Type the client declares; terminals send XML under
// JSON and wildcard content types too.
async fn pay(State(gateway): State<PaymentGateway>, body: String) -> Response {
    tracing::debug!(body = %body, "incoming transaction request");

    match gateway.handle(&body) {
        Ok(xml) => ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], xml).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "rejecting request");
            (StatusCode::BAD_REQUEST, INVALID_XML_BODY).into_response()
        }
    }
}
