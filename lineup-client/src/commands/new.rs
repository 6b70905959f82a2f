//! Create a schedule event.

use anyhow::Result;
use lineup_core::event::{EventDraft, EventStatus};
use owo_colors::OwoColorize;

use crate::api::ApiClient;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    api: &ApiClient,
    title: String,
    start: String,
    end: String,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
    attendees: Vec<String>,
    all_day: bool,
) -> Result<()> {
    let draft = EventDraft {
        title,
        description,
        start_date: start,
        end_date: end,
        color,
        all_day: Some(all_day),
        location,
        attendees: if attendees.is_empty() {
            None
        } else {
            Some(attendees)
        },
        status: Some(EventStatus::Confirmed),
    };

    let event = api.create_event(&draft).await?;
    println!("{} Created event {} ({})", "✓".green(), event.title.bold(), event.id);

    Ok(())
}
