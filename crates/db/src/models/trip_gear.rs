//! Packing association models for the `trip_gear` table.

use gearlog_core::packing::PackState;
use gearlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `trip_gear` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripGear {
    pub trip_id: DbId,
    pub gear_item_id: DbId,
    pub is_packed: bool,
    pub date_packed: Option<Timestamp>,
}

/// A gear item on a trip's checklist, joined with its packing columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistItem {
    pub gear_item_id: DbId,
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub weight_grams: Option<i32>,
    pub condition: String,
    pub is_packed: bool,
    pub date_packed: Option<Timestamp>,
}

/// Result of toggling one association.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleOutcome {
    pub trip_id: DbId,
    pub gear_item_id: DbId,
    pub state: PackState,
    pub date_packed: Option<Timestamp>,
    /// Display name of the gear item, for confirmation messages.
    pub gear_name: String,
}
