use std::net::SocketAddr;

use cc5_mock_gateway::{server, GatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cc5_mock_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GatewayConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = server::router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "XML mock gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}
