//! Gear item entity model.

use gearlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `gear_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GearItem {
    pub id: DbId,
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub weight_grams: Option<i32>,
    pub condition: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}
