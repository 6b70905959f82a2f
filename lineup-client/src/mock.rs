//! Placeholder data used when the backend is unreachable.
//!
//! A dead backend must not leave the calendar blank, so reads substitute a
//! small sample set for today instead of propagating the failure.

use chrono::{Local, NaiveDate};
use lineup_core::display::{DisplayEvent, EventDate, ExtendedProps};

/// Two sample events for today: 14:00-15:00 and 14:30-15:00.
pub fn sample_events() -> Vec<DisplayEvent> {
    let today = Local::now().date_naive();

    vec![
        sample_event(
            today,
            "mock-1",
            "Reunión de equipo",
            "#3788d8",
            "Evento simulado 14:00-15:00",
            "14:00:00",
            "15:00:00",
        ),
        sample_event(
            today,
            "mock-2",
            "Llamada rápida",
            "#ff7f50",
            "Evento simulado 14:30-15:00",
            "14:30:00",
            "15:00:00",
        ),
    ]
}

fn sample_event(
    day: NaiveDate,
    id: &str,
    title: &str,
    color: &str,
    description: &str,
    start: &str,
    end: &str,
) -> DisplayEvent {
    DisplayEvent {
        id: id.to_string(),
        title: title.to_string(),
        start: EventDate::Iso(format!("{day}T{start}")),
        end: EventDate::Iso(format!("{day}T{end}")),
        background_color: color.to_string(),
        border_color: color.to_string(),
        text_color: "#fff".to_string(),
        all_day: false,
        extended_props: ExtendedProps {
            description: Some(description.to_string()),
            ..ExtendedProps::default()
        },
    }
}
