use std::time::Duration;

use anyhow::{Result, bail};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Storage engine picked from the database url scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        let url = url.trim();
        let lowered = url.to_ascii_lowercase();
        if lowered.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else if lowered.starts_with("postgres://") || lowered.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else {
            bail!(
                "unsupported database url scheme '{}'; expected postgres://, postgresql:// or sqlite:",
                scheme_of(url)
            )
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

// Only the scheme is ever echoed back; the rest may hold credentials.
fn scheme_of(url: &str) -> &str {
    url.split_once(':').map_or("<none>", |(scheme, _)| scheme)
}

pub fn connect_options(cfg: &DatabaseConfig, backend: Backend) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    if backend == Backend::Sqlite {
        // Applied per pooled connection; action rows cascade with their project.
        options.map_sqlx_sqlite_opts(|opts| {
            opts.foreign_keys(true).busy_timeout(SQLITE_BUSY_TIMEOUT)
        });
    }
    options
}

pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let backend = Backend::from_url(&cfg.url)?;
    info!(
        backend = backend.as_str(),
        max_connections = cfg.max_connections,
        "connecting to database"
    );

    let db = Database::connect(connect_options(cfg, backend)).await?;
    sync_schema(&db).await?;
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("project_tracker::db::entities::*")
        .sync(db)
        .await?;
    Ok(())
}
