use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::Arc;

use habitual_domain::quote::{DailyQuote, QuoteRepository, FALLBACK_QUOTE};
use habitual_domain::shared;

/// Quote of the day, cached per calendar day
pub struct QuoteService {
    quote_repo: Arc<dyn QuoteRepository>,
    today: fn() -> NaiveDate,
}

impl QuoteService {
    pub fn new(quote_repo: Arc<dyn QuoteRepository>) -> Self {
        Self {
            quote_repo,
            today: shared::today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Cached quote when fresh, otherwise pick and cache today's.
    /// Any storage error yields the fallback text.
    pub async fn daily_quote(&self) -> String {
        let today = (self.today)();

        match self.quote_repo.load().await {
            Ok(Some(cached)) if cached.is_fresh(today) => return cached.quote,
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to read quote cache: {}", e);
                return FALLBACK_QUOTE.to_string();
            }
        }

        let quote = DailyQuote::for_date(today);
        if let Err(e) = self.quote_repo.save(&quote).await {
            warn!("Failed to cache daily quote: {}", e);
            return FALLBACK_QUOTE.to_string();
        }
        debug!("Daily quote refreshed for {}", today);
        quote.quote
    }
}
