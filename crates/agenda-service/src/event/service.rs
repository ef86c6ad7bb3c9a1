//! Event operations over the storage seam.
//!
//! Handlers stay thin; the date-filtering logic and the record-level rules
//! live here, against `dyn EventStore` rather than a concrete store.

use uuid::Uuid;

use agenda_store::model::{Event, NewEvent};
use agenda_store::store::EventStore;

use crate::error::{ServiceError, ServiceResult};
use crate::schedule::localdate::{RangeError, resolve_local_date_range};

/// Returns every stored event, in insertion order.
pub async fn list_events(store: &dyn EventStore) -> Vec<Event> {
    store.list().await
}

/// ## Summary
/// Returns the events whose start time falls on the given civil date in the
/// given timezone.
///
/// ## Errors
/// Returns `ServiceError::RangeError` if the date or timezone is invalid.
pub async fn events_on_local_date(
    store: &dyn EventStore,
    date: &str,
    timezone: &str,
) -> ServiceResult<Vec<Event>> {
    let events = store.list().await;
    Ok(filter_events_by_local_date(events, date, timezone)?)
}

/// ## Summary
/// Keeps the events whose `start_time_utc` lies within the local date's
/// inclusive UTC range. The range is resolved once, not per event, and the
/// filter is stable: surviving events keep their relative order.
///
/// ## Errors
/// Returns `RangeError` if the date or timezone is invalid; no partial
/// result is produced.
pub fn filter_events_by_local_date(
    events: Vec<Event>,
    date: &str,
    timezone: &str,
) -> Result<Vec<Event>, RangeError> {
    let range = resolve_local_date_range(date, timezone)?;

    Ok(events
        .into_iter()
        .filter(|event| range.contains(event.start_time_utc))
        .collect())
}

/// ## Summary
/// Creates an event from client-supplied fields.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` if the title is empty.
pub async fn create_event(store: &dyn EventStore, new: NewEvent) -> ServiceResult<Event> {
    if new.title.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "title must not be empty".to_string(),
        ));
    }

    Ok(store.insert(new).await)
}

/// ## Summary
/// Deletes an event by id.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event has the given id.
pub async fn delete_event(store: &dyn EventStore, id: Uuid) -> ServiceResult<()> {
    if store.remove(id).await {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("event {id}")))
    }
}
