//! Backend entry-point: loads settings, prepares storage, and serves HTTP.

mod server;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use todo_list_backend::config::AppSettings;
use todo_list_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let mut config = ServerConfig::new(settings.bind_addr()?, settings.environment()?);

    if let Some(pool_config) = PoolConfig::from_settings(&settings)? {
        run_migrations(pool_config.database_url())
            .await
            .wrap_err("failed to migrate the database")?;
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to create the database pool")?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await.wrap_err("server terminated")?;
    Ok(())
}
