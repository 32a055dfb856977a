// Request classification and response rendering for the mock gateway
use chrono::Utc;
use quick_xml::de::from_str;
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::request::{CC5Request, RequestFields};
use crate::xml_response::{LoyaltyQueryResponse, PaymentResponse, ThreeDSecureResponse};

// Error types for request handling
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("XML parse error: {0}")]
    MalformedXml(String),

    #[error("XML render error: {0}")]
    RenderError(String),
}

// The three mutually exclusive response templates, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    ThreeDSecure,
    LoyaltyPointsQuery,
    StandardPayment,
}

// STORETYPE values that select the 3D-Secure flow. Terminals send these
// in both casings, so the match is case-insensitive.
const THREE_D_MODES: [&str; 2] = ["3d", "3d_pay"];

// MAXIPUANSORGU sentinel, matched exactly (case-sensitive)
const LOYALTY_QUERY_SENTINEL: &str = "MAXIPUANSORGU";

// Pick a response kind from the extracted fields. First match wins; the
// decision depends on nothing but the fields and the configured variant.
pub fn classify(fields: &RequestFields, config: &GatewayConfig) -> ResponseKind {
    if config.enable_three_d_secure {
        if let Some(store_type) = &fields.store_type {
            let mode = store_type.to_ascii_lowercase();
            if THREE_D_MODES.contains(&mode.as_str()) {
                return ResponseKind::ThreeDSecure;
            }
        }
    }

    if fields.maxi_puan_sorgu.as_deref() == Some(LOYALTY_QUERY_SENTINEL) {
        return ResponseKind::LoyaltyPointsQuery;
    }

    ResponseKind::StandardPayment
}

// Use the caller's order id when present, otherwise synthesize one that is
// unique with high probability within this process: "ORDER-" + epoch
// millis + 9 random alphanumerics.
pub fn resolve_order_id(order_id: Option<&str>) -> String {
    match order_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let suffix: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(9)
                .map(char::from)
                .collect();
            format!("ORDER-{}{}", Utc::now().timestamp_millis(), suffix)
        }
    }
}

// The request classifier and responder. Stateless apart from its
// configuration; one instance is shared by all in-flight requests.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    config: GatewayConfig,
}

impl PaymentGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    // Full pipeline for one request body: parse, extract, classify,
    // render. Fails only on malformed XML; absent fields never error.
    pub fn handle(&self, body: &str) -> Result<String, GatewayError> {
        let request: CC5Request =
            from_str(body).map_err(|e| GatewayError::MalformedXml(e.to_string()))?;
        let fields = RequestFields::from(request);

        let order_id = resolve_order_id(fields.order_id.as_deref());
        let kind = classify(&fields, &self.config);

        tracing::info!(
            order_id = %order_id,
            store_type = fields.store_type.as_deref().unwrap_or(""),
            maxi_puan_sorgu = fields.maxi_puan_sorgu.as_deref().unwrap_or(""),
            kind = ?kind,
            "classified transaction request"
        );

        let xml = self.render(kind, &order_id)?;
        tracing::debug!(response = %xml, "rendered response");
        Ok(xml)
    }

    pub fn render(&self, kind: ResponseKind, order_id: &str) -> Result<String, GatewayError> {
        match kind {
            ResponseKind::ThreeDSecure => serialize(&ThreeDSecureResponse::new(order_id)),
            ResponseKind::LoyaltyPointsQuery => serialize(&LoyaltyQueryResponse::new(
                order_id,
                &self.config.loyalty_balance,
            )),
            ResponseKind::StandardPayment => serialize(&PaymentResponse::new(order_id)),
        }
    }
}

fn serialize<T: Serialize>(response: &T) -> Result<String, GatewayError> {
    quick_xml::se::to_string(response).map_err(|e| GatewayError::RenderError(e.to_string()))
}
