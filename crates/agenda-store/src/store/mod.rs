pub mod memory;

use std::future::Future;
use std::pin::Pin;

use uuid::Uuid;

use crate::model::{Event, NewEvent};

/// Storage seam for events.
///
/// Handlers hold the store as `Arc<dyn EventStore>`, so the methods return
/// boxed futures to stay object-safe. Each method is a single atomic step
/// relative to the others; records are immutable once inserted, so readers
/// can never observe a partially-written event.
pub trait EventStore: Send + Sync {
    /// Returns a snapshot of all events in insertion order.
    fn list<'a>(&'a self) -> Pin<Box<dyn Future<Output = Vec<Event>> + Send + 'a>>;

    /// Looks up a single event by id.
    fn get<'a>(&'a self, id: Uuid) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + 'a>>;

    /// Inserts a new event, assigning its id and creation timestamp.
    fn insert<'a>(&'a self, new: NewEvent) -> Pin<Box<dyn Future<Output = Event> + Send + 'a>>;

    /// Removes an event by id. Returns false if no such event exists.
    fn remove<'a>(&'a self, id: Uuid) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}
