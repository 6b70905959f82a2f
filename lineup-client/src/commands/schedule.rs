//! Emit the widget options for one festival day.
//!
//! Prints the declarative options object (with that day's events inlined)
//! as JSON, ready to hand to the calendar widget.

use anyhow::Result;
use lineup_core::display::DisplayEvent;

use crate::feed::EventFeed;
use crate::view::{CalendarOptions, DayView, FestivalDay, day_options};

pub async fn run(feed: &EventFeed, day: FestivalDay) -> Result<()> {
    let view = DayView::new();
    view.show(day);

    let events = feed.refresh().await;
    let options = options_for(&view, events);
    println!("{}", serde_json::to_string_pretty(&options)?);

    Ok(())
}

/// Options for the day the view currently shows, keeping only that day's
/// events.
fn options_for(view: &DayView, events: Vec<DisplayEvent>) -> CalendarOptions {
    let day = view.current();
    let day_events = events
        .into_iter()
        .filter(|e| e.start.to_iso().starts_with(day.date()))
        .collect();

    day_options(day, day_events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::display::{EventDate, ExtendedProps};

    fn event_on(id: &str, start: &str) -> DisplayEvent {
        DisplayEvent {
            id: id.to_string(),
            title: id.to_string(),
            start: EventDate::Iso(start.to_string()),
            end: EventDate::Iso(start.to_string()),
            background_color: "#3788d8".to_string(),
            border_color: "#3788d8".to_string(),
            text_color: "#fff".to_string(),
            all_day: false,
            extended_props: ExtendedProps::default(),
        }
    }

    #[test]
    fn test_options_follow_the_shown_day() {
        let events = vec![
            event_on("sat", "2026-02-14T19:00:00-03:00"),
            event_on("sun", "2026-02-15T19:00:00-03:00"),
        ];

        let view = DayView::new();
        view.show(FestivalDay::Day15);

        let options = options_for(&view, events);
        assert_eq!(options.initial_date, "2026-02-15");
        assert_eq!(options.events.len(), 1);
        assert_eq!(options.events[0].id, "sun");
    }
}
