use crate::services::storage::{FsStore, ObjectStore};
use crate::{Config, Database};
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        let store = Arc::new(FsStore::new(
            &config.storage.upload_dir,
            config.storage.public_base_url.clone(),
        ));
        Self { config, db, store }
    }
}
