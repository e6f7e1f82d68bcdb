//! Backend entry-point: configuration, persistence wiring, and the HTTP
//! server for the SafeSpace board and content API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::sample_data::{SampleDataSettings, seed_sample_questions_on_startup};
use server::{ServerConfig, ServerSettings};

async fn build_db_pool(settings: &ServerSettings) -> Result<Option<DbPool>> {
    let Some(database_url) = settings.database_url.as_deref() else {
        warn!("no database configured; board runs with fixture ports");
        return Ok(None);
    };

    run_pending_migrations(database_url)
        .await
        .wrap_err("database migrations failed")?;

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
    )
    .await
    .wrap_err("database pool construction failed")?;

    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("configuration loading failed")?;
    let bind_addr = settings
        .bind_addr()
        .parse()
        .wrap_err("invalid bind address")?;

    let db_pool = build_db_pool(&settings).await?;

    let sample_settings =
        SampleDataSettings::load().wrap_err("sample data configuration loading failed")?;
    seed_sample_questions_on_startup(&sample_settings, db_pool.as_ref())
        .await
        .wrap_err("sample data seeding failed")?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let http_server = server::create_server(health_state, config)?;
    info!(%bind_addr, "server started");

    http_server.await.wrap_err("server terminated abnormally")
}
