//! Repository for the `gear_items` table.

use gearlog_core::gear::GearFields;
use gearlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::gear_item::GearItem;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, brand, category, weight_grams, condition, notes, created_at";

/// Provides CRUD operations for the gear catalog.
pub struct GearItemRepo;

impl GearItemRepo {
    /// Insert a new gear item, returning the created row.
    pub async fn create(pool: &PgPool, input: &GearFields) -> Result<GearItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gear_items (name, brand, category, weight_grams, condition, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GearItem>(&query)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.category)
            .bind(input.weight_grams)
            .bind(&input.condition)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a gear item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GearItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gear_items WHERE id = $1");
        sqlx::query_as::<_, GearItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gear ordered by name, optionally restricted to one category.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<GearItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gear_items
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, GearItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Distinct categories currently in use, sorted.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT category FROM gear_items ORDER BY category")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(c,)| c).collect())
    }

    /// Replace every editable field of a gear item. `created_at` is untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GearFields,
    ) -> Result<Option<GearItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gear_items SET
                name = $2,
                brand = $3,
                category = $4,
                weight_grams = $5,
                condition = $6,
                notes = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GearItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.category)
            .bind(input.weight_grams)
            .bind(&input.condition)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gear item. Its `trip_gear` rows go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gear_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
