use chrono::{DateTime, Utc};
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::store_handler::get_store_from_depot;
use agenda_core::constants::EVENTS_ROUTE_COMPONENT;
use agenda_service::error::ServiceError;
use agenda_service::event::service as event_service;
use agenda_store::model::{NewEvent, utc_millis};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Create event request payload
///
/// `startTimeUTC` is the canonical UTC instant string; the client converts
/// local wall-clock input before sending, so no timezone arrives here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(rename = "startTimeUTC", with = "utc_millis")]
    pub start_time_utc: DateTime<Utc>,
}

/// ## Summary
/// GET /api/events - List events, optionally filtered by local calendar date.
///
/// With `date` and `timezone` query parameters, returns only the events
/// whose start time falls on that civil date in that timezone (inclusive at
/// both day boundaries). With neither, returns all events. The two
/// parameters are only meaningful together.
///
/// ## Errors
/// Returns HTTP 400 if exactly one of `date`/`timezone` is present, the
/// date is not a `YYYY-MM-DD` civil date, or the timezone is unrecognized.
#[handler]
async fn list_events_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing list events request");

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get event store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let (date, timezone) = match (req.query::<String>("date"), req.query::<String>("timezone")) {
        (None, None) => {
            let events = event_service::list_events(store.as_ref()).await;
            res.render(Json(events));
            return;
        }
        (Some(date), Some(timezone)) => (date, timezone),
        _ => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "timezone is required when date is provided".to_string(),
            }));
            return;
        }
    };

    match event_service::events_on_local_date(store.as_ref(), &date, &timezone).await {
        Ok(events) => {
            tracing::debug!(
                count = events.len(),
                %date,
                %timezone,
                "Filtered events by local date"
            );
            res.render(Json(events));
        }
        Err(ServiceError::RangeError(e)) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: e.to_string(),
            }));
        }
        Err(e) => {
            error!(error = ?e, "Failed to filter events");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
        }
    }
}

/// ## Summary
/// POST /api/events - Create a new event.
///
/// ## Side Effects
/// - Appends an event record to the store, with a generated id and creation
///   timestamp.
///
/// ## Errors
/// Returns HTTP 400 if the body is not valid JSON, `startTimeUTC` is not an
/// RFC 3339 instant, or the title is empty.
#[handler]
async fn create_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing create event request");

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get event store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let create_req: CreateEventRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse create event request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let new = NewEvent {
        title: create_req.title,
        start_time_utc: create_req.start_time_utc,
    };

    match event_service::create_event(store.as_ref(), new).await {
        Ok(event) => {
            tracing::info!(event_id = %event.id, title = %event.title, "Event created");
            res.status_code(StatusCode::CREATED);
            res.render(Json(event));
        }
        Err(e @ ServiceError::ValidationError(_)) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: e.to_string(),
            }));
        }
        Err(e) => {
            error!(error = ?e, "Failed to create event");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
        }
    }
}

/// ## Summary
/// DELETE /api/events/{id} - Delete an event by id.
///
/// ## Errors
/// Returns HTTP 400 if the id is not a UUID
/// Returns HTTP 404 if no event has the given id
#[handler]
async fn delete_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing delete event request");

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get event store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let Some(id_str) = req.param::<String>("id") else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Event ID required".to_string(),
        }));
        return;
    };

    let Ok(id) = Uuid::parse_str(&id_str) else {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ErrorResponse {
            error: "Invalid event ID format".to_string(),
        }));
        return;
    };

    match event_service::delete_event(store.as_ref(), id).await {
        Ok(()) => {
            tracing::info!(event_id = %id, "Event deleted");
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(ServiceError::NotFound(_)) => {
            res.status_code(StatusCode::NOT_FOUND);
            res.render(Json(ErrorResponse {
                error: "Event not found".to_string(),
            }));
        }
        Err(e) => {
            error!(error = ?e, "Failed to delete event");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .get(list_events_handler)
        .post(create_event_handler)
        .push(Router::with_path("{id}").delete(delete_event_handler))
}
