//! Widget-side event shapes.
//!
//! The calendar widget consumes a flat event list plus an open-ended
//! extended-properties bag for the domain fields it does not model natively
//! (description, location, attendees, status).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A start/end value as the widget accepts it: an ISO-8601 string or a
/// concrete timestamp (widget callbacks hand back real date values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDate {
    Iso(String),
    Timestamp(DateTime<Utc>),
}

impl EventDate {
    /// Coerce to ISO-8601 string form.
    pub fn to_iso(&self) -> String {
        match self {
            EventDate::Iso(s) => s.clone(),
            EventDate::Timestamp(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// The widget's open-ended bag for fields it does not natively model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An event in the shape the calendar widget expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub id: String,
    pub title: String,
    pub start: EventDate,
    pub end: EventDate,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub all_day: bool,
    #[serde(default)]
    pub extended_props: ExtendedProps,
}
