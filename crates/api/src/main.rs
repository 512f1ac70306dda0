use anyhow::Context;

use billable_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    billable_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = billable_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        prefix = %config.prefix,
        first_number = config.first_number,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
