//! Handlers for the `/trips` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use chrono::Utc;
use gearlog_core::error::CoreError;
use gearlog_core::packing::{self, PackingSummary};
use gearlog_core::trip::{self as trip_rules, TripForm};
use gearlog_core::types::DbId;
use gearlog_db::models::activity_template::ActivityTemplate;
use gearlog_db::models::gear_item::GearItem;
use gearlog_db::models::trip::Trip;
use gearlog_db::models::trip_gear::ChecklistItem;
use gearlog_db::repositories::{ActivityTemplateRepo, PackingAssociationRepo, TripRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Context for rendering the create/edit trip form.
#[derive(Debug, Serialize)]
pub struct TripFormContext {
    /// The trip being edited; `None` on the create form.
    pub trip: Option<Trip>,
    pub activities: Vec<ActivityTemplate>,
}

/// One checklist row with a humanized pack time.
#[derive(Debug, Serialize)]
pub struct ChecklistEntry {
    #[serde(flatten)]
    pub item: ChecklistItem,
    pub packed_ago: Option<String>,
}

/// Trip detail view.
#[derive(Debug, Serialize)]
pub struct TripDetail {
    pub trip: Trip,
    pub duration_days: Option<i64>,
    pub checklist: Vec<ChecklistEntry>,
    /// Gear not yet on this trip.
    pub available_gear: Vec<GearItem>,
    /// Gear id to packed flag; ids absent here are not on the checklist.
    pub packed_status: HashMap<DbId, bool>,
    pub summary: PackingSummary,
}

#[derive(Debug, Serialize)]
pub struct DeletedTrip {
    pub id: DbId,
}

pub(crate) fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Trip", id })
}

/// Load a trip or fail with `NotFound`.
pub(crate) async fn find_trip(state: &AppState, id: DbId) -> AppResult<Trip> {
    TripRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn form_context(state: &AppState, trip: Option<Trip>) -> AppResult<TripFormContext> {
    let activities = ActivityTemplateRepo::list(&state.pool).await?;
    Ok(TripFormContext { trip, activities })
}

/// GET /trips
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Trip>>>> {
    let trips = TripRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: trips }))
}

/// GET /trips/create
pub async fn create_form(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TripFormContext>>> {
    let context = form_context(&state, None).await?;
    Ok(Json(DataResponse { data: context }))
}

/// POST /trips/create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TripForm>,
) -> AppResult<(StatusCode, Json<DataResponse<MessageResponse<Trip>>>)> {
    let fields = form
        .validate()
        .map_err(|msg| AppError::invalid_form(msg, &form))?;
    let trip = TripRepo::create(&state.pool, &fields).await?;
    tracing::info!(trip_id = trip.id, name = %trip.name, "Trip created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MessageResponse {
                message: format!("Trip {} created", trip.name),
                item: trip,
            },
        }),
    ))
}

/// GET /trips/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TripDetail>>> {
    let trip = find_trip(&state, id).await?;
    let items = PackingAssociationRepo::list_for_trip(&state.pool, id).await?;
    let available_gear = PackingAssociationRepo::available_gear_for(&state.pool, id).await?;
    let packed_status = PackingAssociationRepo::packed_status_for(&state.pool, id).await?;

    let summary = PackingSummary::from_items(items.iter().map(|i| (i.is_packed, i.weight_grams)));
    let now = Utc::now();
    let checklist = items
        .into_iter()
        .map(|item| ChecklistEntry {
            packed_ago: item.date_packed.map(|at| packing::packed_ago(at, now)),
            item,
        })
        .collect();

    Ok(Json(DataResponse {
        data: TripDetail {
            duration_days: trip_rules::duration_days(trip.start_date, trip.end_date),
            trip,
            checklist,
            available_gear,
            packed_status,
            summary,
        },
    }))
}

/// GET /trips/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TripFormContext>>> {
    let trip = find_trip(&state, id).await?;
    let context = form_context(&state, Some(trip)).await?;
    Ok(Json(DataResponse { data: context }))
}

/// POST /trips/edit/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<TripForm>,
) -> AppResult<Json<DataResponse<MessageResponse<Trip>>>> {
    let fields = form
        .validate()
        .map_err(|msg| AppError::invalid_form(msg, &form))?;
    let trip = TripRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(trip_id = id, "Trip updated");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: format!("Trip {} updated", trip.name),
            item: trip,
        },
    }))
}

/// POST /trips/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse<DeletedTrip>>>> {
    let trip = find_trip(&state, id).await?;
    if !TripRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(trip_id = id, "Trip deleted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: format!("Trip {} deleted", trip.name),
            item: DeletedTrip { id },
        },
    }))
}
