use gearlog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `activity_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityTemplate {
    pub id: DbId,
    pub name: String,
    pub description: String,
}
