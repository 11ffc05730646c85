//! Project CRUD endpoints

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use projtrack_core::application::ProjectValidator;
use projtrack_core::domain::projects::Project;
use serde_json::Value;

use crate::{error::ApiResult, state::AppState};

/// `GET /project`
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.list().await?))
}

/// `GET /project/:id`
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    Ok(Json(state.projects.get_by_id(&id).await?))
}

/// `POST /project`
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let Json(body) = payload?;
    let input = ProjectValidator::check_create(&body)?;
    let project = state.projects.create(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// `PUT /project/:id`
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Project>> {
    let Json(body) = payload?;
    let input = ProjectValidator::check_update(&body)?;
    Ok(Json(state.projects.update(&id, input).await?))
}

/// `DELETE /project/:id`; responds with the removed record
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    Ok(Json(state.projects.delete(&id).await?))
}
