use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/clicks",
            get(handlers::get_clicks).post(handlers::record_click),
        )
        .route("/click.mp3", get(handlers::click_audio))
        .with_state(state)
}
