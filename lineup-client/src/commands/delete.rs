//! Delete a schedule event.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::api::ApiClient;

pub async fn run(api: &ApiClient, id: String) -> Result<()> {
    api.delete_event(&id).await?;
    println!("{} Deleted event {}", "✓".green(), id);
    Ok(())
}
