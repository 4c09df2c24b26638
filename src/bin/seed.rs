use std::process::ExitCode;

use pizza_storefront::{
    config::AppConfig,
    db::{DbPool, create_pool, orm_from_pool, run_migrations},
    seed,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing("info,pizza_storefront=debug,sqlx=warn");

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = ?err, "could not prepare the database");
            return ExitCode::FAILURE;
        }
    };

    let outcome = seed::run(&orm_from_pool(pool.clone())).await;
    pool.close().await;

    ExitCode::from(seed::exit_status(&outcome))
}

async fn connect() -> anyhow::Result<DbPool> {
    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.max_connections).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
