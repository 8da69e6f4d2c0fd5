use salvo::conn::TcpListener;
use salvo::session::{CookieStore, SessionHandler};
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use parkside_core::config::load_web_config;
use parkside_web::client::{ApiClient, ApiClientHandler};
use parkside_web::pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Parkside front-end");

    let config = load_web_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let session_handler =
        SessionHandler::builder(CookieStore::new(), config.session.secret.as_bytes()).build()?;

    let client = ApiClient::new(&config.api.base_url)?;

    tracing::info!(api = %config.api.base_url, "API client constructed");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(session_handler)
        .hoop(ApiClientHandler { client })
        .push(pages::routes());

    tracing::info!("Front-end listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
