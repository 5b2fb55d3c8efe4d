//! Repository for the `trips` table.

use gearlog_core::trip::TripFields;
use gearlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::trip::Trip;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, activity_type, start_date, end_date, location, notes, created_at";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    pub async fn create(pool: &PgPool, input: &TripFields) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (name, activity_type, start_date, end_date, location, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(&input.name)
            .bind(&input.activity_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trips, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Trip>(&query).fetch_all(pool).await
    }

    /// Replace every editable field of a trip. `created_at` is untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TripFields,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET
                name = $2,
                activity_type = $3,
                start_date = $4,
                end_date = $5,
                location = $6,
                notes = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.activity_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip and, by cascade, its packing checklist. Gear items stay.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
