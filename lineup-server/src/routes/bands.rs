//! Band lineup endpoints.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use lineup_core::band::SelectionRequest;
use lineup_core::envelope::{BandsEnvelope, StatusEnvelope};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/getBands", get(get_bands))
        .route("/api/bandByPerson", post(save_selection))
}

/// GET /api/getBands - List the festival lineup
async fn get_bands(State(state): State<AppState>) -> Json<BandsEnvelope> {
    let store = state.store.read().await;
    Json(BandsEnvelope::ok(store.bands.clone()))
}

/// POST /api/bandByPerson - Record a person's picks
async fn save_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> Json<StatusEnvelope> {
    log::info!(
        "Saving {} band picks for '{}'",
        request.bands.len(),
        request.person
    );

    let mut store = state.store.write().await;
    store.selections.push(request);

    Json(StatusEnvelope::ok("Selection saved"))
}
