//! Tests for the event endpoints.
//!
//! Covers listing, local-date filtering with its boundary semantics,
//! creation, and deletion.

use salvo::http::StatusCode;

use agenda_test::component::constants::EVENTS_ROUTE_PREFIX;
use agenda_test::component::store::model::Event;

use super::helpers::{create_event, delete, get, post_json, test_service};

fn events_path(suffix: &str) -> String {
    format!("{EVENTS_ROUTE_PREFIX}{suffix}")
}

// ============================================================================
// Listing
// ============================================================================

#[test_log::test(tokio::test)]
async fn list_is_empty_initially() {
    let service = test_service();

    let response = get(&service, EVENTS_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.json::<Vec<Event>>(), vec![]);
}

#[test_log::test(tokio::test)]
async fn list_returns_events_in_creation_order() {
    let service = test_service();

    create_event(&service, "first", "2025-01-15T09:00:00.000Z").await;
    create_event(&service, "second", "2025-01-14T09:00:00.000Z").await;
    create_event(&service, "third", "2025-01-16T09:00:00.000Z").await;

    let events: Vec<Event> = get(&service, EVENTS_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

// ============================================================================
// Local-date filtering
// ============================================================================

#[test_log::test(tokio::test)]
async fn filter_keeps_boundary_start_and_drops_preceding_millisecond() {
    let service = test_service();

    // Jan 15 in Los Angeles spans [08:00:00.000Z, 07:59:59.999Z next day].
    create_event(&service, "at local midnight", "2025-01-15T08:00:00.000Z").await;
    create_event(&service, "mid-day", "2025-01-15T12:00:00.000Z").await;
    create_event(&service, "just before midnight", "2025-01-15T07:59:59.999Z").await;

    let events: Vec<Event> = get(
        &service,
        &events_path("?date=2025-01-15&timezone=America/Los_Angeles"),
    )
    .await
    .assert_status(StatusCode::OK)
    .json();

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["at local midnight", "mid-day"]);
}

#[test_log::test(tokio::test)]
async fn filter_includes_late_evening_event_from_next_utc_day() {
    let service = test_service();

    // 07:00Z on Jan 16 is 23:00 on Jan 15 in Los Angeles; 08:00Z is not.
    create_event(&service, "late evening", "2025-01-16T07:00:00.000Z").await;
    create_event(&service, "next local day", "2025-01-16T08:00:00.000Z").await;

    let events: Vec<Event> = get(
        &service,
        &events_path("?date=2025-01-15&timezone=America/Los_Angeles"),
    )
    .await
    .assert_status(StatusCode::OK)
    .json();

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["late evening"]);
}

#[test_log::test(tokio::test)]
async fn filter_requires_both_date_and_timezone() {
    let service = test_service();

    for suffix in ["?date=2025-01-15", "?timezone=America/Los_Angeles"] {
        let response = get(&service, &events_path(suffix))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        assert_eq!(
            response.error_message(),
            "timezone is required when date is provided"
        );
    }
}

#[test_log::test(tokio::test)]
async fn filter_rejects_malformed_date() {
    let service = test_service();

    let response = get(
        &service,
        &events_path("?date=Jan-15-2025&timezone=America/Los_Angeles"),
    )
    .await
    .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(response.error_message(), "Invalid date format: Jan-15-2025");
}

#[test_log::test(tokio::test)]
async fn filter_rejects_unknown_timezone() {
    let service = test_service();

    let response = get(&service, &events_path("?date=2025-01-15&timezone=Not/AZone"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(response.error_message(), "Unknown timezone: Not/AZone");
}

// ============================================================================
// Creation
// ============================================================================

#[test_log::test(tokio::test)]
async fn create_returns_created_event_with_canonical_timestamps() {
    let service = test_service();

    let response = post_json(
        &service,
        EVENTS_ROUTE_PREFIX,
        &serde_json::json!({
            "title": "Standup",
            "startTimeUTC": "2025-01-15T17:00:00.000Z",
        }),
    )
    .await
    .assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Standup");
    assert_eq!(body["startTimeUTC"], "2025-01-15T17:00:00.000Z");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[test_log::test(tokio::test)]
async fn create_normalizes_offset_timestamps_to_utc() {
    let service = test_service();

    let event = create_event(&service, "offset input", "2025-01-15T09:00:00.000-08:00").await;

    let listed: Vec<Event> = get(&service, EVENTS_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listed, vec![event]);

    let body: serde_json::Value = get(&service, EVENTS_ROUTE_PREFIX).await.json();
    assert_eq!(body[0]["startTimeUTC"], "2025-01-15T17:00:00.000Z");
}

#[test_log::test(tokio::test)]
async fn create_rejects_blank_title() {
    let service = test_service();

    let response = post_json(
        &service,
        EVENTS_ROUTE_PREFIX,
        &serde_json::json!({
            "title": "   ",
            "startTimeUTC": "2025-01-15T17:00:00.000Z",
        }),
    )
    .await
    .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(
        response.error_message(),
        "Validation error: title must not be empty"
    );
}

#[test_log::test(tokio::test)]
async fn create_rejects_malformed_timestamp() {
    let service = test_service();

    let response = post_json(
        &service,
        EVENTS_ROUTE_PREFIX,
        &serde_json::json!({
            "title": "Standup",
            "startTimeUTC": "tomorrow at noon",
        }),
    )
    .await
    .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(response.error_message(), "Invalid request body");
}

#[test_log::test(tokio::test)]
async fn create_rejects_missing_fields() {
    let service = test_service();

    post_json(
        &service,
        EVENTS_ROUTE_PREFIX,
        &serde_json::json!({ "title": "no start time" }),
    )
    .await
    .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Deletion
// ============================================================================

#[test_log::test(tokio::test)]
async fn delete_removes_only_the_target_event() {
    let service = test_service();

    let keep = create_event(&service, "keep", "2025-01-15T09:00:00.000Z").await;
    let doomed = create_event(&service, "doomed", "2025-01-15T10:00:00.000Z").await;

    let response = delete(&service, &events_path(&format!("/{}", doomed.id)))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let remaining: Vec<Event> = get(&service, EVENTS_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(remaining, vec![keep]);
}

#[test_log::test(tokio::test)]
async fn delete_missing_event_responds_not_found() {
    let service = test_service();

    let doomed = create_event(&service, "doomed", "2025-01-15T10:00:00.000Z").await;

    delete(&service, &events_path(&format!("/{}", doomed.id)))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = delete(&service, &events_path(&format!("/{}", doomed.id)))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Event not found");
}

#[test_log::test(tokio::test)]
async fn delete_rejects_malformed_id() {
    let service = test_service();

    let response = delete(&service, &events_path("/not-a-uuid"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(response.error_message(), "Invalid event ID format");
}
