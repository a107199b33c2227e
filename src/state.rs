use std::sync::Arc;

use super::{
    config::Config,
    database::{init_db, DbPool},
};

pub struct AppState {
    pub config: Config,
    pub pool: DbPool,
}

impl AppState {
    /// Loads configuration and opens the database. Failures here are fatal;
    /// the server must not start serving without a working store.
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let pool = init_db(&config.database_url)
            .await
            .expect("Database misconfigured!");

        Arc::new(Self { config, pool })
    }
}
