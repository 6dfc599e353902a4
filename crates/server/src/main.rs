use anyhow::Context;

use shopporium_server::{app::build_app, config::ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopporium_observability::init();

    let config = ServerConfig::from_env()?;
    anyhow::ensure!(
        config.dist_dir.is_dir(),
        "bundle directory {} does not exist",
        config.dist_dir.display()
    );
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "index.html not found; build the web bundle first");
    }

    let app = build_app(&config.dist_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, dist_dir = %config.dist_dir.display(), "listening");

    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
