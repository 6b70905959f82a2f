//! Update a schedule event.

use anyhow::Result;
use lineup_core::event::EventDraft;
use owo_colors::OwoColorize;

use crate::api::ApiClient;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    api: &ApiClient,
    id: String,
    title: String,
    start: String,
    end: String,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut draft = EventDraft::new(title, start, end);
    draft.color = color;
    draft.location = location;
    draft.description = description;

    let event = api.update_event(&id, &draft).await?;
    println!("{} Updated event {} ({})", "✓".green(), event.title.bold(), event.id);

    Ok(())
}
