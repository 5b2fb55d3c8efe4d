//! Handlers for the `/gear` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use gearlog_core::error::CoreError;
use gearlog_core::gear::{self, GearForm, CATEGORY_FILTER_ALL, CONDITIONS, DEFAULT_CONDITION};
use gearlog_core::types::DbId;
use gearlog_db::models::gear_item::GearItem;
use gearlog_db::repositories::{GearItemRepo, PackingAssociationRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::CategoryParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Gear list view: items plus the category filter state.
#[derive(Debug, Serialize)]
pub struct GearList {
    pub items: Vec<GearItem>,
    /// Distinct categories currently in use.
    pub categories: Vec<String>,
    /// The active filter, or `"all"`.
    pub selected_category: String,
}

/// Context for rendering the add/edit gear form.
#[derive(Debug, Serialize)]
pub struct GearFormContext {
    /// The item being edited; `None` on the add form.
    pub item: Option<GearItem>,
    pub categories: Vec<String>,
    pub conditions: &'static [&'static str],
    pub default_condition: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DeletedGear {
    pub id: DbId,
    /// Number of trip checklists the item was removed from.
    pub detached_from_trips: i64,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GearItem",
        id,
    })
}

async fn form_context(state: &AppState, item: Option<GearItem>) -> AppResult<GearFormContext> {
    let in_use = GearItemRepo::list_categories(&state.pool).await?;
    Ok(GearFormContext {
        item,
        categories: gear::category_choices(&in_use),
        conditions: CONDITIONS,
        default_condition: DEFAULT_CONDITION,
    })
}

/// GET /gear?category=<c|all>
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<DataResponse<GearList>>> {
    let filter = gear::category_filter(params.category.as_deref());
    let items = GearItemRepo::list(&state.pool, filter.as_deref()).await?;
    let categories = GearItemRepo::list_categories(&state.pool).await?;

    Ok(Json(DataResponse {
        data: GearList {
            items,
            categories,
            selected_category: filter.unwrap_or_else(|| CATEGORY_FILTER_ALL.to_string()),
        },
    }))
}

/// GET /gear/add
pub async fn add_form(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<GearFormContext>>> {
    let context = form_context(&state, None).await?;
    Ok(Json(DataResponse { data: context }))
}

/// POST /gear/add
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<GearForm>,
) -> AppResult<(StatusCode, Json<DataResponse<MessageResponse<GearItem>>>)> {
    let fields = form
        .validate()
        .map_err(|msg| AppError::invalid_form(msg, &form))?;
    let item = GearItemRepo::create(&state.pool, &fields).await?;
    tracing::info!(gear_item_id = item.id, name = %item.name, "Gear item created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MessageResponse {
                message: format!("{} added", item.name),
                item,
            },
        }),
    ))
}

/// GET /gear/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GearFormContext>>> {
    let item = GearItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let context = form_context(&state, Some(item)).await?;
    Ok(Json(DataResponse { data: context }))
}

/// POST /gear/edit/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<GearForm>,
) -> AppResult<Json<DataResponse<MessageResponse<GearItem>>>> {
    let fields = form
        .validate()
        .map_err(|msg| AppError::invalid_form(msg, &form))?;
    let item = GearItemRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(gear_item_id = id, "Gear item updated");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: format!("{} updated", item.name),
            item,
        },
    }))
}

/// POST /gear/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse<DeletedGear>>>> {
    let item = GearItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let detached_from_trips = PackingAssociationRepo::count_for_gear(&state.pool, id).await?;

    if !GearItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(gear_item_id = id, detached_from_trips, "Gear item deleted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: format!("{} deleted", item.name),
            item: DeletedGear {
                id,
                detached_from_trips,
            },
        },
    }))
}
