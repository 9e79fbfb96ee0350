use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::{build_router, ActivityRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    info!(build_id = env!("ACTIVITIES_BUILD_ID"), "starting activities server");

    // 2. Config and registry
    let config = AppConfig::from_env().context("reading server config")?;
    let registry = ActivityRegistry::seeded();
    info!(
        activities = registry.len(),
        static_dir = %config.static_dir.display(),
        "registry seeded"
    );

    // 3. Router
    let app = build_router(registry, &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);
    info!("open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
