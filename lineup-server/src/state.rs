//! In-memory store behind the REST contract.

use std::sync::Arc;

use lineup_core::band::{Band, SelectionRequest};
use lineup_core::envelope::now_timestamp;
use lineup_core::event::{EventRecord, EventStatus};
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

#[derive(Default)]
pub struct Store {
    pub events: Vec<EventRecord>,
    pub bands: Vec<Band>,
    pub selections: Vec<SelectionRequest>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Dev state with the festival lineup and schedule pre-loaded.
    pub fn seeded() -> Self {
        AppState::new(Store {
            events: seed_events(),
            bands: seed_bands(),
            selections: Vec::new(),
        })
    }
}

fn band(id: i64, title: &str, stage: &str, color: &str) -> Band {
    let mut band = Band::new(id, title);
    band.location = Some(stage.to_string());
    band.color = Some(color.to_string());
    band.status = Some("confirmed".to_string());
    band.created_at = Some(now_timestamp());
    band
}

/// One band per stage, using the stage palette.
fn seed_bands() -> Vec<Band> {
    vec![
        band(1, "Los Ritmos del Sur", "sur", "#79D8B2"),
        band(2, "Cumbre Andina", "montana", "#FF5D38"),
        band(3, "Arpa Guaraní", "Paraguay", "#6E1F98"),
        band(4, "Blues de la Casita", "La Casita del Blues", "#FFBD42"),
        band(5, "Plaza Pulse", "La plaza electronic stage", "#FFB8C1"),
        band(6, "Acto Sorpresa", "Sorpresa", "#F3F7A1"),
        band(7, "Viento Norte", "Norte", "#690571"),
        band(8, "Los Boomerangs", "Boomerang", "#3788d8"),
    ]
}

fn event(
    id: &str,
    title: &str,
    stage: &str,
    color: &str,
    start: &str,
    end: &str,
) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        start_date: start.to_string(),
        end_date: end.to_string(),
        color: Some(color.to_string()),
        all_day: Some(false),
        location: Some(stage.to_string()),
        attendees: None,
        status: Some(EventStatus::Confirmed),
        created_at: Some(now_timestamp()),
        updated_at: None,
    }
}

/// Opening slots on both festival days, inside the 14:00-27:00 window.
fn seed_events() -> Vec<EventRecord> {
    vec![
        event(
            "evt-1",
            "Los Ritmos del Sur",
            "sur",
            "#79D8B2",
            "2026-02-14T18:00:00-03:00",
            "2026-02-14T19:00:00-03:00",
        ),
        event(
            "evt-2",
            "Blues de la Casita",
            "La Casita del Blues",
            "#FFBD42",
            "2026-02-14T22:00:00-03:00",
            "2026-02-14T23:30:00-03:00",
        ),
        event(
            "evt-3",
            "Plaza Pulse",
            "La plaza electronic stage",
            "#FFB8C1",
            "2026-02-15T01:00:00-03:00",
            "2026-02-15T02:30:00-03:00",
        ),
        event(
            "evt-4",
            "Viento Norte",
            "Norte",
            "#690571",
            "2026-02-15T19:00:00-03:00",
            "2026-02-15T20:00:00-03:00",
        ),
    ]
}
