use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled event.
///
/// Events are immutable once created; there is no update operation, and
/// deletion removes the whole record by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "startTimeUTC", with = "utc_millis")]
    pub start_time_utc: DateTime<Utc>,
    #[serde(with = "utc_millis")]
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a new event. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub start_time_utc: DateTime<Utc>,
}

/// Serde adapter pinning timestamps to the canonical wire form: RFC 3339
/// with millisecond precision and a `Z` suffix (`2025-01-15T17:00:00.000Z`).
/// Deserialization accepts any RFC 3339 instant and renormalizes to UTC.
pub mod utc_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// ## Errors
    /// Never fails; the canonical form is always representable.
    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// ## Errors
    /// Fails if the input is not an RFC 3339 date-time.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
