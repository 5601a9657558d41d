use anyhow::Context;

use catalog_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env();
    let app = catalog_api::app::build_app_from_config(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        data_path = %config.data_path.display(),
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
