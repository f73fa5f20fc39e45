use async_trait::async_trait;
use std::sync::Arc;

use habitual_domain::quote::{DailyQuote, QuoteRepository};
use habitual_domain::storage::{KeyValueStore, QUOTE_KEY};
use habitual_domain::DomainError;

use super::{decode, encode};

pub struct KvQuoteRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvQuoteRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QuoteRepository for KvQuoteRepository {
    async fn load(&self) -> Result<Option<DailyQuote>, DomainError> {
        self.store
            .get(QUOTE_KEY)
            .await?
            .map(|raw| decode(QUOTE_KEY, &raw))
            .transpose()
    }

    async fn save(&self, quote: &DailyQuote) -> Result<(), DomainError> {
        let raw = encode(QUOTE_KEY, quote)?;
        self.store.set(QUOTE_KEY, &raw).await
    }
}
