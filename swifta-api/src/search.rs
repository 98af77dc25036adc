use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use swifta_catalog::{CatalogError, JourneySearchRequest, JourneySearchResult};
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/journeys/search", post(search_journeys))
}

pub(crate) async fn search_journeys(
    State(state): State<AppState>,
    Json(req): Json<JourneySearchRequest>,
) -> Result<Json<JourneySearchResult>, AppError> {
    let options = state.journeys.search(&req).await.map_err(|e| match e {
        CatalogError::InvalidSearch(msg) => AppError::ValidationError(msg),
        other => AppError::InternalServerError(other.to_string()),
    })?;

    info!(
        origin = %req.origin,
        destination = %req.destination,
        results = options.len(),
        "journey search"
    );
    Ok(Json(JourneySearchResult { options }))
}
