use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{NewSkill, Skill, SkillPatch};
use crate::error::ApiError;

/// GET /api/skills/:user_id
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(state.career.skills(user_id).await?))
}

/// POST /api/skills/add/:user_id - 404 when the user does not exist
pub async fn add(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<NewSkill>,
) -> Result<Json<Skill>, ApiError> {
    Ok(Json(state.career.add_skill(user_id, payload).await?))
}

/// PUT /api/skills/update/:skill_id - body `{ "level": "..." }`, other keys ignored
pub async fn update(
    State(state): State<AppState>,
    Path(skill_id): Path<i64>,
    Json(patch): Json<SkillPatch>,
) -> Result<Json<Skill>, ApiError> {
    Ok(Json(state.career.update_skill(skill_id, patch).await?))
}
