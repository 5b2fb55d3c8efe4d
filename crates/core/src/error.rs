use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Gear item {gear_item_id} is already on trip {trip_id}")]
    AlreadyAttached { trip_id: DbId, gear_item_id: DbId },
}
