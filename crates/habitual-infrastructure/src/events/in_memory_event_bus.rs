use async_trait::async_trait;
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use habitual_domain::events::{DomainEvent, DynamicEventHandler, EventBus};
use habitual_domain::DomainError;

/// Dispatches events to subscribed handlers in-process, in subscription order.
/// A failing handler is logged and does not stop the others.
pub struct InMemoryEventBus {
    handlers: Arc<RwLock<HashMap<&'static str, Vec<Arc<dyn DynamicEventHandler>>>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn subscribe<E: DomainEvent + 'static>(&self, handler: Arc<dyn DynamicEventHandler>) {
        let event_type_name = std::any::type_name::<E>();
        self.handlers
            .write()
            .await
            .entry(event_type_name)
            .or_default()
            .push(handler);

        info!("Subscribed handler for event type: {}", event_type_name);
    }

    pub async fn handler_count<E: DomainEvent + 'static>(&self) -> usize {
        let handlers = self.handlers.read().await;
        handlers
            .get(std::any::type_name::<E>())
            .map_or(0, |h| h.len())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        let event_type_name = event.event_type_name();
        debug!("Publishing event: {}", event_type_name);

        let subscribers = {
            let handlers = self.handlers.read().await;
            handlers.get(event_type_name).cloned().unwrap_or_default()
        };

        for handler in subscribers {
            if let Err(e) = handler.handle_dynamic(event.as_any()).await {
                error!("Handler failed to process event {}: {}", event_type_name, e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use habitual_domain::events::{EventHandler, HabitCreated, HabitDeleted, TypedEventHandlerWrapper};
    use habitual_domain::HabitId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl EventHandler<HabitCreated> for CountingHandler {
        async fn handle(&self, _event: &HabitCreated) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler<HabitCreated> for FailingHandler {
        async fn handle(&self, _event: &HabitCreated) -> Result<(), DomainError> {
            Err(DomainError::Infrastructure("boom".to_string()))
        }
    }

    fn created() -> Box<HabitCreated> {
        Box::new(HabitCreated {
            habit_id: HabitId::from_string("1"),
            name: "Read".to_string(),
            occurred_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn test_event_bus_publishes_to_handlers() {
        let bus = InMemoryEventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<HabitCreated>(Arc::new(TypedEventHandlerWrapper::new(FailingHandler)))
            .await;
        bus.subscribe::<HabitCreated>(Arc::new(TypedEventHandlerWrapper::new(CountingHandler {
            calls: calls.clone(),
        })))
        .await;
        assert_eq!(bus.handler_count::<HabitCreated>().await, 2);

        bus.publish(created()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsubscribed_event_is_ignored() {
        let bus = InMemoryEventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        bus.subscribe::<HabitCreated>(Arc::new(TypedEventHandlerWrapper::new(CountingHandler {
            calls: calls.clone(),
        })))
        .await;

        bus.publish(Box::new(HabitDeleted {
            habit_id: HabitId::from_string("1"),
            occurred_at: Utc::now(),
        }))
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(bus.handler_count::<HabitDeleted>().await, 0);
    }
}
