use lexi_config::Config;
use tokio::sync::RwLock;

use crate::store::DictionaryStore;

pub struct AppState {
    pub config: Config,
    pub dictionary: RwLock<DictionaryStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = DictionaryStore::new(config.recent_capacity);

        Self {
            config,
            dictionary: RwLock::new(dictionary),
        }
    }
}
