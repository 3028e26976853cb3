use crate::errors::AppError;
use crate::history::build_history;
use crate::models::{
    HistoryItem, HistoryQuery, LogMoodRequest, MoodEntryResponse, MoodRecord, StatsResponse,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(payload): Json<LogMoodRequest>,
) -> Result<Json<MoodEntryResponse>, AppError> {
    if !(1..=10).contains(&payload.rating) {
        return Err(AppError::bad_request("rating must be between 1 and 10"));
    }

    let note = payload
        .note
        .map(|note| note.trim().to_string())
        .filter(|note| !note.is_empty());

    let date = today_string();
    let mut data = state.data.lock().await;
    data.moods.insert(
        date.clone(),
        MoodRecord {
            rating: payload.rating,
            note: note.clone(),
        },
    );

    persist_data(&state.data_path, &data).await?;

    Ok(Json(MoodEntryResponse {
        date,
        rating: payload.rating,
        note,
    }))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<MoodEntryResponse>, AppError> {
    let date = today_string();
    let data = state.data.lock().await;

    match data.moods.get(&date) {
        Some(record) => Ok(Json(MoodEntryResponse {
            date,
            rating: record.rating,
            note: record.note.clone(),
        })),
        None => Err(AppError::not_found("no mood logged today")),
    }
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data)))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryItem>>, AppError> {
    let days = query.days.unwrap_or(30);
    let data = state.data.lock().await;
    Ok(Json(build_history(days, &data)))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
