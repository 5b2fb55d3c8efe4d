//! Administrative handlers.

use axum::extract::State;
use axum::Json;
use gearlog_db::repositories::ActivityTemplateRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InitDbResult {
    pub migrated: bool,
    /// Activity templates inserted by this call (0 if already seeded).
    pub seeded_activities: u64,
    pub message: String,
}

/// GET /init-db
///
/// Applies pending migrations and seeds default activity templates. Safe to
/// call repeatedly; existing data is never dropped.
pub async fn init_db(State(state): State<AppState>) -> AppResult<Json<DataResponse<InitDbResult>>> {
    gearlog_db::run_migrations(&state.pool).await?;
    let seeded_activities = ActivityTemplateRepo::seed_defaults(&state.pool).await?;
    tracing::info!(seeded_activities, "Database initialized");

    Ok(Json(DataResponse {
        data: InitDbResult {
            migrated: true,
            seeded_activities,
            message: "Database initialized".to_string(),
        },
    }))
}
