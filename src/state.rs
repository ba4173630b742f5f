use std::sync::Arc;

use crate::{
    config::Config,
    storage::{FileStorage, Storage},
};

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let storage = Arc::new(FileStorage::new(config.db_path.clone()));

        Arc::new(Self { config, storage })
    }

    /// State over an alternative storage port, used by tests.
    pub fn with_storage(storage: Arc<dyn Storage>) -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            storage,
        })
    }
}
