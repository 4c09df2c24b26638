use pizza_storefront::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.max_connections).await?;
    run_migrations(&pool).await?;
    tracing::info!("migrations applied");

    pool.close().await;
    Ok(())
}
