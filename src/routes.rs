use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::TranslateError;
use crate::presets::{Preset, PRESETS};
use crate::script::detect_language;
use crate::state::AppState;
use crate::translate::{DetectResponse, TextRequest, TranslateResponse};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/examples", get(examples))
        .route("/api/detect", post(detect))
        .route("/api/translate", post(translate))
        .route("/api/models", get(models))
}

/// Full application router with middleware and state attached
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<Value>);

fn error_response(err: &TranslateError) -> ApiError {
    match err {
        TranslateError::EmptyInput => (
            StatusCode::BAD_REQUEST,
            Json(json!({"warning": err.to_string()})),
        ),
        TranslateError::Http(_) | TranslateError::Api { .. } => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": err.to_string()})),
        ),
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.translator.model(),
        "base_url": state.config.translator_config.base_url,
    }))
}

async fn examples() -> Json<&'static [Preset]> {
    Json(PRESETS)
}

async fn detect(Json(payload): Json<TextRequest>) -> Json<DetectResponse> {
    Json(detect_language(&payload.text).into())
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let detected = detect_language(&payload.text);

    let translation = state
        .translator
        .translate(&payload.text)
        .instrument(info_span!("translate", %request_id, detected = detected.code()))
        .await
        .map_err(|e| {
            match &e {
                TranslateError::EmptyInput => warn!("Rejected empty input ({})", request_id),
                _ => error!("Translation {} failed: {}", request_id, e),
            }
            error_response(&e)
        })?;

    info!("Translation {} complete ({})", request_id, detected.code());
    Ok(Json(TranslateResponse {
        request_id,
        detected: detected.into(),
        translation,
    }))
}

async fn models(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let names = state
        .translator
        .service()
        .list_models()
        .await
        .map_err(|e| {
            error!("Listing models failed: {}", e);
            error_response(&e)
        })?;

    Ok(Json(json!({ "models": names })))
}
