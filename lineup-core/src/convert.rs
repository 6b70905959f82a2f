//! Conversions between the backend record shape and the widget shape.
//!
//! Both directions are pure and total: a missing optional field resolves to
//! a documented default, never an error.

use crate::constants::{DEFAULT_EVENT_COLOR, EVENT_TEXT_COLOR};
use crate::display::{DisplayEvent, EventDate, ExtendedProps};
use crate::event::{EventDraft, EventRecord, EventStatus};

/// Backend record -> widget event.
///
/// Identifier, title, and dates are copied verbatim. Background and border
/// both take the record color, or `#3788d8` when absent; text is white.
/// The remaining domain fields ride along in the extended-properties bag.
pub fn to_display_event(record: &EventRecord) -> DisplayEvent {
    let color = record
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string());

    DisplayEvent {
        id: record.id.clone(),
        title: record.title.clone(),
        start: EventDate::Iso(record.start_date.clone()),
        end: EventDate::Iso(record.end_date.clone()),
        background_color: color.clone(),
        border_color: color,
        text_color: EVENT_TEXT_COLOR.to_string(),
        all_day: record.all_day.unwrap_or(false),
        extended_props: ExtendedProps {
            description: record.description.clone(),
            location: record.location.clone(),
            attendees: record.attendees.clone(),
            status: record.status.map(|s| s.as_str().to_string()),
            color: record.color.clone(),
        },
    }
}

/// Widget event -> create/update request.
///
/// Start/end are coerced to ISO-8601 strings when given as timestamps, the
/// color comes from the background color, and a missing or unrecognized
/// status defaults to `confirmed`.
pub fn to_event_draft(event: &DisplayEvent) -> EventDraft {
    EventDraft {
        title: event.title.clone(),
        description: event.extended_props.description.clone(),
        start_date: event.start.to_iso(),
        end_date: event.end.to_iso(),
        color: Some(event.background_color.clone()),
        all_day: Some(event.all_day),
        location: event.extended_props.location.clone(),
        attendees: event.extended_props.attendees.clone(),
        status: Some(EventStatus::parse_or_default(
            event.extended_props.status.as_deref(),
        )),
    }
}
