//! Server State

use std::sync::Arc;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// Server state — shared handles passed to every handler
///
/// Cloning is cheap: the config sits behind an Arc and the database
/// service is a pool handle.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    /// Open the database and build the shared state
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: Arc::new(config.clone()),
            db,
        })
    }

    /// Build state over an in-memory database. Used by tests.
    pub async fn for_testing(config: Config) -> AppResult<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self {
            config: Arc::new(config),
            db,
        })
    }
}
