//! Handlers for the `/activities` resource.

use axum::extract::State;
use axum::Json;
use gearlog_db::models::activity_template::ActivityTemplate;
use gearlog_db::repositories::ActivityTemplateRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /activities
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ActivityTemplate>>>> {
    let activities = ActivityTemplateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: activities }))
}
