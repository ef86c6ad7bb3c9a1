use std::future::Future;
use std::pin::Pin;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{Event, NewEvent};
use crate::store::EventStore;

/// Process-wide in-memory event store.
///
/// Backed by a `RwLock<Vec<Event>>`; every operation takes the lock exactly
/// once, which is all the coordination the workload needs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for MemoryStore {
    fn list<'a>(&'a self) -> Pin<Box<dyn Future<Output = Vec<Event>> + Send + 'a>> {
        Box::pin(async move { self.events.read().await.clone() })
    }

    fn get<'a>(&'a self, id: Uuid) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + 'a>> {
        Box::pin(async move {
            self.events
                .read()
                .await
                .iter()
                .find(|event| event.id == id)
                .cloned()
        })
    }

    #[tracing::instrument(skip(self, new), fields(title = %new.title))]
    fn insert<'a>(&'a self, new: NewEvent) -> Pin<Box<dyn Future<Output = Event> + Send + 'a>> {
        Box::pin(async move {
            let event = Event {
                id: Uuid::new_v4(),
                title: new.title,
                start_time_utc: new.start_time_utc,
                created_at: Utc::now(),
            };

            self.events.write().await.push(event.clone());

            tracing::debug!(event_id = %event.id, "Event stored");

            event
        })
    }

    #[tracing::instrument(skip(self))]
    fn remove<'a>(&'a self, id: Uuid) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            let mut events = self.events.write().await;
            let before = events.len();
            events.retain(|event| event.id != id);

            let removed = events.len() < before;
            if removed {
                tracing::debug!(event_id = %id, "Event removed");
            }

            removed
        })
    }
}
