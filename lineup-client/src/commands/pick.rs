//! Save a person's band picks.

use anyhow::Result;
use lineup_core::band::SelectionRequest;
use owo_colors::OwoColorize;

use crate::api::ApiClient;

pub async fn run(api: &ApiClient, ids: Vec<i64>, person: String) -> Result<()> {
    let bands = api.fetch_bands().await;

    if bands.is_empty() {
        anyhow::bail!("No bands available to pick from");
    }

    let mut selected = Vec::new();
    for id in &ids {
        match bands.iter().find(|b| b.id == *id) {
            Some(band) => {
                let mut band = band.clone();
                band.selected = true;
                selected.push(band);
            }
            None => log::warn!("Unknown band id {id}, skipping"),
        }
    }

    if selected.is_empty() {
        anyhow::bail!("None of the given ids matched a band");
    }

    let request = SelectionRequest {
        bands: selected,
        person,
    };

    api.save_selection(&request).await?;

    let titles: Vec<&str> = request.bands.iter().map(|b| b.title.as_str()).collect();
    println!(
        "{} Saved {} picks for {}: {}",
        "✓".green(),
        request.bands.len(),
        request.person.bold(),
        titles.join(", ")
    );

    Ok(())
}
