use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::auth::{gateway::IdentityGateway, provider::PgIdentity};
use crate::config::AppConfig;
use crate::store::{PgStore, RecordStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn RecordStore>,
    pub identity: Arc<dyn IdentityGateway>,
}

impl AppState {
    /// Connect to Postgres and wire the production store and identity provider.
    /// Also returns the pool so the caller can run migrations on it.
    pub async fn init() -> anyhow::Result<(Self, PgPool)> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let store = Arc::new(PgStore::new(db.clone())) as Arc<dyn RecordStore>;
        let identity = Arc::new(PgIdentity::new(db.clone(), &config)) as Arc<dyn IdentityGateway>;

        Ok((Self::from_parts(config, store, identity), db))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn RecordStore>,
        identity: Arc<dyn IdentityGateway>,
    ) -> Self {
        Self {
            config,
            store,
            identity,
        }
    }
}
