use anyhow::Context;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use sarkilar::build_router;
use sarkilar::config::CONFIG_MANAGER;
use sarkilar::db::{resolve_catalog_path, Catalog};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

async fn run() -> anyhow::Result<()> {
    // The catalog is loaded before anything binds; a bad file stops startup here.
    let catalog_path = resolve_catalog_path(&CONFIG_MANAGER.get("CATALOG_PATH"));
    let catalog = Catalog::load(&catalog_path)?;
    info!("🎵 Catalog ready with {} songs", catalog.len());

    let addr = CONFIG_MANAGER.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let app = build_router(catalog);

    info!("🎧 Sarkilar backend listening on {}", addr);
    info!("📡 Catalog endpoint: /sarkilar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        error!("❌ {:#}", e);
        return Err(e);
    }
    Ok(())
}
