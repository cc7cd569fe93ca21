use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use food_ordering::api;
use food_ordering::config::Config;
use food_ordering::lifecycle::{seed_admin, seed_catalog, FoodSystem};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::parse();
    config.validate()?;

    let system = FoodSystem::new(config.channel_buffer);
    let admin = seed_admin(&system.user_client, &config).await?;
    if config.seed_catalog {
        seed_catalog(&system.food_client, &admin).await?;
    }

    let app = api::app(system.state(), &config)?;
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(address = %config.bind, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
