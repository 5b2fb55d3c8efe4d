//! Handlers for a trip's packing checklist.

use axum::extract::{Path, State};
use axum::Json;
use gearlog_core::error::CoreError;
use gearlog_core::packing;
use gearlog_core::types::DbId;
use gearlog_db::models::trip_gear::{ToggleOutcome, TripGear};
use gearlog_db::repositories::{GearItemRepo, PackingAssociationRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::trip::find_trip;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DetachResult {
    pub trip_id: DbId,
    pub gear_item_id: DbId,
    /// False when the gear was not on the checklist (no-op).
    pub removed: bool,
}

fn gear_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GearItem",
        id,
    })
}

/// GET /trips/{id}/add_gear/{gid}
pub async fn add_gear(
    State(state): State<AppState>,
    Path((trip_id, gear_item_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse<TripGear>>>> {
    let trip = find_trip(&state, trip_id).await?;
    let gear = GearItemRepo::find_by_id(&state.pool, gear_item_id)
        .await?
        .ok_or_else(|| gear_not_found(gear_item_id))?;

    let row = PackingAssociationRepo::attach(&state.pool, trip_id, gear_item_id)
        .await?
        .ok_or(AppError::Core(CoreError::AlreadyAttached {
            trip_id,
            gear_item_id,
        }))?;
    tracing::info!(trip_id, gear_item_id, "Gear attached to trip");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: format!("{} added to {}", gear.name, trip.name),
            item: row,
        },
    }))
}

/// GET /trips/{id}/remove_gear/{gid}
pub async fn remove_gear(
    State(state): State<AppState>,
    Path((trip_id, gear_item_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse<DetachResult>>>> {
    let trip = find_trip(&state, trip_id).await?;
    let removed = PackingAssociationRepo::detach(&state.pool, trip_id, gear_item_id).await?;
    if removed {
        tracing::info!(trip_id, gear_item_id, "Gear detached from trip");
    }

    let message = if removed {
        format!("Gear removed from {}", trip.name)
    } else {
        format!("Gear was not on {}", trip.name)
    };

    Ok(Json(DataResponse {
        data: MessageResponse {
            message,
            item: DetachResult {
                trip_id,
                gear_item_id,
                removed,
            },
        },
    }))
}

/// GET /trips/{id}/toggle_packed/{gid}
pub async fn toggle_packed(
    State(state): State<AppState>,
    Path((trip_id, gear_item_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse<ToggleOutcome>>>> {
    find_trip(&state, trip_id).await?;
    let outcome = PackingAssociationRepo::toggle_packed(&state.pool, trip_id, gear_item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip gear item",
            id: gear_item_id,
        }))?;
    tracing::info!(
        trip_id,
        gear_item_id,
        state = outcome.state.label(),
        "Packed state toggled"
    );

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: packing::toggle_message(&outcome.gear_name, outcome.state),
            item: outcome,
        },
    }))
}
