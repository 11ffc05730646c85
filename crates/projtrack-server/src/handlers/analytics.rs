//! Analytics endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use projtrack_core::application::AnalysisResponse;
use projtrack_core::domain::analytics::GraphicsData;

use crate::{error::ApiResult, state::AppState};

/// `GET /analytics/graphics`
pub async fn get_graphics(State(state): State<AppState>) -> ApiResult<Json<GraphicsData>> {
    Ok(Json(state.analytics.get_graphics_data().await?))
}

/// `GET /analytics/:id`
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AnalysisResponse>> {
    Ok(Json(state.analytics.generate_analysis(&id).await?))
}
