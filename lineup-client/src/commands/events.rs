//! List the schedule, grouped by day.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use lineup_core::display::EventDate;
use owo_colors::OwoColorize;

use crate::feed::EventFeed;

pub async fn run(feed: &EventFeed) -> Result<()> {
    let mut events = feed.refresh().await;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Offsets vary across records, so sort on the instant rather than the
    // raw string; unparseable dates fall back to string order.
    events.sort_by_key(|e| (event_instant(&e.start), e.start.to_iso()));

    let mut current_date: Option<String> = None;
    for event in &events {
        let date_label = format_date_label(&event.start);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let time = format_time(&event.start);
        let stage = event
            .extended_props
            .location
            .as_deref()
            .map(|l| format!("[{l}]"))
            .unwrap_or_default();

        print!("  {} {} {}", time, event.title, stage.dimmed());
        if let Some(first) = event
            .extended_props
            .attendees
            .as_ref()
            .and_then(|a| a.first())
        {
            print!(" {}", first.dimmed());
        }
        println!();
    }

    Ok(())
}

/// The UTC instant a widget date names, if it carries an offset.
fn event_instant(date: &EventDate) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&date.to_iso())
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Parse a widget date into a naive local timestamp, best effort.
fn parse_when(date: &EventDate) -> Option<NaiveDateTime> {
    let iso = date.to_iso();
    if let Ok(dt) = DateTime::parse_from_rfc3339(&iso) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M:%S").ok()
}

fn format_date_label(date: &EventDate) -> String {
    match parse_when(date) {
        Some(dt) => dt.format("%a %b %e").to_string(),
        None => date.to_iso(),
    }
}

fn format_time(date: &EventDate) -> String {
    match parse_when(date) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_when_accepts_offset_and_naive_forms() {
        let offset = EventDate::Iso("2026-02-14T19:00:00-03:00".to_string());
        assert_eq!(format_time(&offset), "19:00");

        let naive = EventDate::Iso("2026-02-14T14:30:00".to_string());
        assert_eq!(format_time(&naive), "14:30");

        let junk = EventDate::Iso("whenever".to_string());
        assert_eq!(format_time(&junk), "--:--");
    }

    #[test]
    fn test_date_label() {
        let date = EventDate::Iso("2026-02-14T19:00:00-03:00".to_string());
        assert_eq!(format_date_label(&date), "Sat Feb 14");
    }

    #[test]
    fn test_sort_orders_mixed_offsets_chronologically() {
        // 20:00Z is 17:00-03:00, so it comes first even though the raw
        // strings sort the other way round
        let utc = EventDate::Iso("2026-02-14T20:00:00Z".to_string());
        let local = EventDate::Iso("2026-02-14T18:00:00-03:00".to_string());
        assert!(event_instant(&utc) < event_instant(&local));

        // Same day in matching offsets still orders by time of day
        let early = EventDate::Iso("2026-02-14T18:00:00-03:00".to_string());
        let late = EventDate::Iso("2026-02-15T01:00:00-03:00".to_string());
        assert!(event_instant(&early) < event_instant(&late));
    }
}
