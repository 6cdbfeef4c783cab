use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmTriviaService, TriviaService};

/// Everything a request handler may reach. Holds no per-request state; the
/// store is only a pool handle.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub trivia_service: Arc<dyn TriviaService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;
        store.ping().await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let trivia_service =
            Arc::new(SeaOrmTriviaService::new(store.clone())) as Arc<dyn TriviaService>;

        Self {
            config: Arc::new(config),
            store,
            trivia_service,
        }
    }
}
