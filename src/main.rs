use asset_advisor::{advisor_router, AppState, Config, Store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("asset_advisor=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env(8080)?;

    let store = if config.seed_demo_assets {
        Store::with_demo_assets()
    } else {
        Store::new()
    };
    let app = advisor_router(AppState::new(store), config.allowed_origin.clone());

    let addr = config.bind_address();
    tracing::info!("Asset advisor running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
