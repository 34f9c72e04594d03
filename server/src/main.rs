use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ticketbay_server::catalog::Catalog;
use ticketbay_server::config::Config;
use ticketbay_server::routes::create_routes;
use ticketbay_server::state::AppState;
use ticketbay_server::utils::clock::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    let addr = config.bind_addr();

    let catalog = Catalog::builtin();
    tracing::info!(
        events = catalog.events().len(),
        matches = catalog.matches().len(),
        "Catalog loaded"
    );

    let app = create_routes(AppState::new(config, catalog, SystemClock));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
