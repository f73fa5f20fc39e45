use async_trait::async_trait;
use std::sync::Arc;

use habitual_domain::settings::{Settings, SettingsRepository};
use habitual_domain::storage::{KeyValueStore, SETTINGS_KEY};
use habitual_domain::DomainError;

use super::{decode, encode};

pub struct KvSettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvSettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for KvSettingsRepository {
    async fn load(&self) -> Result<Option<Settings>, DomainError> {
        self.store
            .get(SETTINGS_KEY)
            .await?
            .map(|raw| decode(SETTINGS_KEY, &raw))
            .transpose()
    }

    async fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        let raw = encode(SETTINGS_KEY, settings)?;
        self.store.set(SETTINGS_KEY, &raw).await
    }
}
