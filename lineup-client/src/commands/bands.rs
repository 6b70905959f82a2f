//! List the band lineup in a random presentation order.

use anyhow::Result;
use lineup_core::band::shuffle;
use lineup_core::color::selection_highlight;
use owo_colors::OwoColorize;

use crate::api::ApiClient;
use crate::view::stage_color;

pub async fn run(api: &ApiClient) -> Result<()> {
    let mut bands = api.fetch_bands().await;

    if bands.is_empty() {
        println!("{}", "No bands available".dimmed());
        return Ok(());
    }

    shuffle(&mut bands);

    for band in &bands {
        let stage = band
            .location
            .as_deref()
            .map(|l| format!("[{l}]"))
            .unwrap_or_default();

        // Bands without a color fall back to their stage's palette entry
        let swatch = band
            .color
            .as_deref()
            .or_else(|| band.location.as_deref().and_then(stage_color))
            .and_then(selection_highlight)
            .map(|style| style.color)
            .unwrap_or_default();

        println!(
            "  {:>3}  {} {} {}",
            band.id.bold(),
            band.title,
            stage.dimmed(),
            swatch.dimmed()
        );
    }

    println!("\n{} bands. Pick with: lineup pick --ids <id,...> --person <name>", bands.len());

    Ok(())
}
