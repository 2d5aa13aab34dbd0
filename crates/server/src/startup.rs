use std::net::SocketAddr;

use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::Storage;
use tracing::{info, warn};

use crate::auth::Authenticator;
use crate::errors::StartupError;
use crate::routes::{self, Repositories};

/// Connect the configured backend, running pending migrations on Postgres.
pub async fn connect_storage(cfg: &AppConfig) -> anyhow::Result<Storage> {
    match cfg.server.storage {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!("database connected and migrated");
            Ok(Storage::Postgres(db))
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage, records are lost on restart");
            Ok(Storage::Memory)
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg)?;
    let storage = connect_storage(&cfg).await?;
    let auth = Authenticator::from_config(&cfg.auth);
    let app = routes::build_router(Repositories::from_storage(&storage), auth);

    info!(%addr, storage = ?cfg.server.storage, admins = cfg.auth.admin_emails.len(), "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
