pub mod bands;
pub mod events;

use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(events::router())
        .merge(bands::router())
        .with_state(state)
}
