//! Schedule event endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use lineup_core::envelope::{Envelope, StatusEnvelope, now_timestamp};
use lineup_core::event::{EventDraft, EventRecord};
use uuid::Uuid;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
}

/// GET /api/events - List all schedule events
async fn list_events(State(state): State<AppState>) -> Json<Envelope<Vec<EventRecord>>> {
    let store = state.store.read().await;
    Json(Envelope::ok(store.events.clone()))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Json<Envelope<EventRecord>> {
    let record = record_from_draft(Uuid::new_v4().to_string(), &draft);

    let mut store = state.store.write().await;
    store.events.push(record.clone());

    log::info!("Created event '{}' ({})", record.title, record.id);
    Json(Envelope::ok(record))
}

/// PUT /api/events/:id - Update an existing event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Envelope<EventRecord>>, (StatusCode, Json<StatusEnvelope>)> {
    let mut store = state.store.write().await;

    match store.events.iter_mut().find(|e| e.id == id) {
        Some(existing) => {
            let mut record = record_from_draft(id, &draft);
            record.created_at = existing.created_at.clone();
            record.updated_at = Some(now_timestamp());
            *existing = record.clone();
            Ok(Json(Envelope::ok(record)))
        }
        None => Err(not_found(&id)),
    }
}

/// DELETE /api/events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusEnvelope>, (StatusCode, Json<StatusEnvelope>)> {
    let mut store = state.store.write().await;

    let before = store.events.len();
    store.events.retain(|e| e.id != id);
    if store.events.len() == before {
        return Err(not_found(&id));
    }

    Ok(Json(StatusEnvelope::ok(format!("Event {id} deleted"))))
}

fn not_found(id: &str) -> (StatusCode, Json<StatusEnvelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(StatusEnvelope::error(format!("Event not found: {id}"))),
    )
}

fn record_from_draft(id: String, draft: &EventDraft) -> EventRecord {
    EventRecord {
        id,
        title: draft.title.clone(),
        description: draft.description.clone(),
        start_date: draft.start_date.clone(),
        end_date: draft.end_date.clone(),
        color: draft.color.clone(),
        all_day: draft.all_day,
        location: draft.location.clone(),
        attendees: draft.attendees.clone(),
        status: draft.status,
        created_at: Some(now_timestamp()),
        updated_at: None,
    }
}
