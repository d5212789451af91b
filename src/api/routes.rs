use axum::{
    routing::get,
    Router,
    extract::{Query, State},
    Json,
};
use tower_http::cors::{CorsLayer, Any};
use std::time::Instant;

use crate::error::{Result, AppError};
use crate::api::models::{UrlQuery, ArticleSummary, VideoSummary};
use crate::article::fetch_article;
use crate::youtube::fetch_video;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/article", get(article_handler))
        .route("/youtube", get(youtube_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn article_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<ArticleSummary>> {
    let url = query.url().ok_or(AppError::MissingUrl)?;
    tracing::info!(url = %url, "processing article request");
    let start_time = Instant::now();

    let result = fetch_article(state.http.as_ref(), &state.config, url).await;
    log_outcome("article", url, start_time, &result);

    result.map(Json)
}

async fn youtube_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<VideoSummary>> {
    let url = query.url().ok_or(AppError::MissingUrl)?;
    tracing::info!(url = %url, "processing youtube request");
    let start_time = Instant::now();

    let result = fetch_video(state.http.as_ref(), &state.config, url).await;
    log_outcome("youtube", url, start_time, &result);

    result.map(Json)
}

fn log_outcome<T>(kind: &str, url: &str, start_time: Instant, result: &Result<T>) {
    let elapsed = start_time.elapsed();
    match result {
        Ok(_) => tracing::info!(kind, url = %url, ?elapsed, "request succeeded"),
        Err(err) => tracing::warn!(kind, url = %url, ?elapsed, error = %err, "request failed"),
    }
}
