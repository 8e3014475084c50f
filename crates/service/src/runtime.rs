//! Runtime wiring helpers
//!
//! Picks the line store from configuration so binaries never touch
//! `models`/`migration` directly.

use std::sync::Arc;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use tracing::{info, warn};

use crate::line::{
    repo::{memory::InMemoryLineRepository, seaorm::SeaOrmLineRepository},
    LineRepository, LineService,
};

/// Which store backs the line service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Database,
}

impl StorageBackend {
    pub fn from_config(cfg: &DatabaseConfig) -> Self {
        if cfg.is_configured() { StorageBackend::Database } else { StorageBackend::Memory }
    }
}

/// Build the line service: connect and migrate when a database URL is
/// configured, otherwise fall back to the in-memory store.
pub async fn build_line_service(cfg: &DatabaseConfig) -> anyhow::Result<LineService<dyn LineRepository>> {
    let repo: Arc<dyn LineRepository> = match StorageBackend::from_config(cfg) {
        StorageBackend::Database => {
            let db = models::db::connect_with_config(cfg).await?;
            migration::Migrator::up(&db, None).await?;
            info!(sqlite = cfg.is_sqlite(), "line store: database (migrations applied)");
            Arc::new(SeaOrmLineRepository::new(db))
        }
        StorageBackend::Memory => {
            warn!("no database url configured; lines are kept in memory and lost on restart");
            Arc::new(InMemoryLineRepository::new())
        }
    };
    Ok(LineService::new(repo))
}
