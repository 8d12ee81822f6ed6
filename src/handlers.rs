use crate::errors::ApiError;
use crate::models::{CountResponse, DailyCount};
use crate::state::AppState;
use crate::store::today_key;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use tracing::warn;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn get_clicks(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let date = today_key();
    let row = state
        .store
        .count_for(&date)
        .await
        .map_err(ApiError::retrieval)?;
    let count = row.map(|row| row.count).unwrap_or(0);

    Ok(Json(CountResponse { count }))
}

pub async fn record_click(State(state): State<AppState>) -> Result<Json<DailyCount>, ApiError> {
    let date = today_key();
    let row = state.store.increment(&date).await.map_err(ApiError::update)?;

    Ok(Json(row))
}

pub async fn click_audio(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::read(&state.audio_path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response(),
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to read click audio: {err}");
            }
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
