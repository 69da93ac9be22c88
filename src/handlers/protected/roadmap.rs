use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{NewRoadmapStep, RoadmapStep, RoadmapStepPatch};
use crate::error::ApiError;

/// GET /api/roadmap/:user_id
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<RoadmapStep>>, ApiError> {
    Ok(Json(state.career.roadmap(user_id).await?))
}

/// POST /api/roadmap/add/:user_id
pub async fn add(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<NewRoadmapStep>,
) -> Result<Json<RoadmapStep>, ApiError> {
    Ok(Json(state.career.add_step(user_id, payload).await?))
}

/// PUT /api/roadmap/update/:step_id
///
/// Any of `status`, `title`, `description`, `duration`, `topics`; absent keys
/// keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(step_id): Path<i64>,
    Json(patch): Json<RoadmapStepPatch>,
) -> Result<Json<RoadmapStep>, ApiError> {
    Ok(Json(state.career.update_step(step_id, patch).await?))
}

/// DELETE /api/roadmap/delete/:step_id - 200 with an empty body, even on a miss
pub async fn delete(
    State(state): State<AppState>,
    Path(step_id): Path<i64>,
) -> Result<(), ApiError> {
    state.career.delete_step(step_id).await?;
    Ok(())
}
