// Main library file for the CC5 XML mock payment gateway

// Export modules for each layer of the service
pub mod config;
pub mod gateway;
pub mod request;
pub mod server;
pub mod xml_response;

// Re-export key types for convenience
pub use config::GatewayConfig;
pub use gateway::{classify, resolve_order_id, GatewayError, PaymentGateway, ResponseKind};
pub use request::{CC5Request, Cc5Extra, RequestFields};
pub use xml_response::{LoyaltyQueryResponse, PaymentResponse, ThreeDSecureResponse};
