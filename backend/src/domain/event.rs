//! Event catalogue entries.
//!
//! An [`Event`] is an organization-issued activity opportunity carrying a
//! fixed point value, a category label, a venue, and an optional poster
//! attachment. Events are owned by the organization identified by
//! `org_email_login`, which is the key used for ownership-filtered listing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, ErrorCode};

/// Lifecycle label for an event.
///
/// The store never transitions this automatically; organizations update it
/// explicitly through the event update operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    /// Stable wire label for the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    /// Parse a wire label back into a status.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "upcoming" => Some(Self::Upcoming),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Geographic coordinates attached to an event location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }
}

/// Venue descriptor: an address plus optional geodata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub place_id: String,
}

impl Location {
    /// Parse a location submitted as a serialized string.
    ///
    /// Multipart clients send the location as a JSON string. When the string
    /// does not parse as a structured location, the whole string becomes the
    /// address with zero coordinates and an empty place id. That fallback is
    /// part of the wire contract and must not be "improved".
    pub fn parse_or_fallback(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self {
            address: raw.to_owned(),
            coordinates: Coordinates::default(),
            place_id: String::new(),
        })
    }
}

/// Stored attachment descriptor for an event poster.
///
/// The descriptor only names the stored file; the bytes live in the poster
/// store behind the [`crate::domain::ports::PosterStore`] port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PosterDescriptor {
    pub filename: String,
    pub path: String,
    pub mimetype: String,
}

/// An AICTE-eligible activity published by an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Category label (e.g. "Technical", "Sports", "Cultural").
    pub domain: String,
    pub points: i32,
    pub poster: Option<PosterDescriptor>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Location,
    pub organized_by: String,
    /// Owning organization's login email; the ownership-filter key.
    #[serde(rename = "org_email_login")]
    pub org_email_login: String,
    pub created_at: DateTime<Utc>,
    pub status: EventStatus,
}

impl Event {
    /// Merge the supplied fields into this event.
    pub fn apply_patch(&mut self, patch: &EventPatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &patch.$field {
                        self.$field = value.clone();
                    }
                )*
            };
        }
        merge!(title, description, domain, organized_by, location);
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(start) = patch.start_date {
            self.start_date = start;
        }
        if let Some(end) = patch.end_date {
            self.end_date = end;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Fields accepted by the event update operation.
///
/// All fields optional; absent fields leave the stored value untouched.
/// Poster, owner, and creation timestamp are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organized_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

impl EventPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Parse an event date supplied as text.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (interpreted as
/// midnight UTC), the two shapes the browser clients send.
pub fn parse_event_date(field: &str, raw: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(Error::new(
        ErrorCode::InvalidRequest,
        format!("{field} must be an RFC 3339 timestamp or YYYY-MM-DD date"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn unparsable_location_falls_back_to_address_with_zero_coordinates() {
        let location = Location::parse_or_fallback("not json");
        assert_eq!(
            location,
            Location {
                address: "not json".into(),
                coordinates: Coordinates { lat: 0.0, lng: 0.0 },
                place_id: String::new(),
            }
        );
    }

    #[test]
    fn structured_location_string_is_parsed() {
        let raw = r#"{"address":"Main Auditorium","coordinates":{"lat":10.7,"lng":78.7},"placeId":"pl-1"}"#;
        let location = Location::parse_or_fallback(raw);
        assert_eq!(location.address, "Main Auditorium");
        assert_eq!(location.coordinates.lat, 10.7);
        assert_eq!(location.place_id, "pl-1");
    }

    #[test]
    fn location_string_without_geodata_gets_defaults() {
        let location = Location::parse_or_fallback(r#"{"address":"Block C"}"#);
        assert_eq!(location.address, "Block C");
        assert_eq!(location.coordinates, Coordinates::default());
        assert_eq!(location.place_id, "");
    }

    #[rstest]
    #[case("2026-03-14T09:30:00Z")]
    #[case("2026-03-14T09:30:00+05:30")]
    #[case("2026-03-14")]
    fn accepted_date_shapes_parse(#[case] raw: &str) {
        assert!(parse_event_date("startDate", raw).is_ok());
    }

    #[test]
    fn bare_date_means_midnight_utc() {
        let parsed = parse_event_date("startDate", "2026-03-14").expect("parse date");
        assert_eq!(parsed.to_rfc3339(), "2026-03-14T00:00:00+00:00");
    }

    #[test]
    fn garbage_date_is_rejected() {
        let err = parse_event_date("endDate", "next tuesday").expect_err("reject");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(err.message().contains("endDate"));
    }

    #[rstest]
    #[case(EventStatus::Upcoming, "upcoming")]
    #[case(EventStatus::Ongoing, "ongoing")]
    #[case(EventStatus::Completed, "completed")]
    fn status_labels_round_trip(#[case] status: EventStatus, #[case] label: &str) {
        assert_eq!(status.as_str(), label);
        assert_eq!(EventStatus::parse(label), Some(status));
        assert_eq!(serde_json::to_value(status).expect("serialise"), json!(label));
    }

    #[test]
    fn default_status_is_upcoming() {
        assert_eq!(EventStatus::default(), EventStatus::Upcoming);
    }

    #[test]
    fn patch_leaves_absent_fields_untouched() {
        let mut event = Event {
            id: Uuid::new_v4(),
            title: "Hackathon".into(),
            description: "24h build".into(),
            domain: "Technical".into(),
            points: 10,
            poster: None,
            start_date: Utc::now(),
            end_date: Utc::now(),
            location: Location::parse_or_fallback("Lab 2"),
            organized_by: "CSE Society".into(),
            org_email_login: "cse@org.edu".into(),
            created_at: Utc::now(),
            status: EventStatus::Upcoming,
        };

        event.apply_patch(&EventPatch {
            points: Some(20),
            status: Some(EventStatus::Ongoing),
            ..EventPatch::default()
        });

        assert_eq!(event.points, 20);
        assert_eq!(event.status, EventStatus::Ongoing);
        assert_eq!(event.title, "Hackathon");
        assert_eq!(event.org_email_login, "cse@org.edu");
    }

    #[test]
    fn event_serialises_with_wire_field_names() {
        let event = Event {
            id: Uuid::new_v4(),
            title: "Hackathon".into(),
            description: "24h build".into(),
            domain: "Technical".into(),
            points: 10,
            poster: None,
            start_date: Utc::now(),
            end_date: Utc::now(),
            location: Location::parse_or_fallback("Lab 2"),
            organized_by: "CSE Society".into(),
            org_email_login: "cse@org.edu".into(),
            created_at: Utc::now(),
            status: EventStatus::Upcoming,
        };

        let value = serde_json::to_value(&event).expect("serialise event");
        assert!(value.get("org_email_login").is_some());
        assert!(value.get("organizedBy").is_some());
        assert!(value.get("startDate").is_some());
        assert_eq!(
            value.get("status").and_then(|v| v.as_str()),
            Some("upcoming")
        );
    }
}
