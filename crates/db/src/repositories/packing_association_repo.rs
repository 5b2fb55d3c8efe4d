//! Repository for the `trip_gear` packing association table.
//!
//! All reads and writes of the `is_packed` / `date_packed` pair go through
//! here. The pair is only ever written together, in one statement, with the
//! new values computed by [`gearlog_core::packing::toggle`].

use std::collections::HashMap;

use chrono::Utc;
use gearlog_core::packing::{self, PackState};
use gearlog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::gear_item::GearItem;
use crate::models::trip_gear::{ChecklistItem, ToggleOutcome, TripGear};

const COLUMNS: &str = "trip_id, gear_item_id, is_packed, date_packed";

/// Gear columns qualified for joins against `gear_items g`.
const GEAR_COLUMNS: &str =
    "g.id, g.name, g.brand, g.category, g.weight_grams, g.condition, g.notes, g.created_at";

/// Attach, detach, toggle and query packing associations.
pub struct PackingAssociationRepo;

impl PackingAssociationRepo {
    /// Attach a gear item to a trip in the unpacked state.
    ///
    /// Returns `None` if the pair is already attached; the existing row is
    /// left as it was.
    pub async fn attach(
        pool: &PgPool,
        trip_id: DbId,
        gear_item_id: DbId,
    ) -> Result<Option<TripGear>, sqlx::Error> {
        let query = format!(
            "INSERT INTO trip_gear (trip_id, gear_item_id, is_packed, date_packed)
             VALUES ($1, $2, $3, NULL)
             ON CONFLICT (trip_id, gear_item_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripGear>(&query)
            .bind(trip_id)
            .bind(gear_item_id)
            .bind(PackState::INITIAL.is_packed())
            .fetch_optional(pool)
            .await
    }

    /// Remove a gear item from a trip. Missing pairs are a no-op.
    ///
    /// Returns `true` if a row was removed.
    pub async fn detach(
        pool: &PgPool,
        trip_id: DbId,
        gear_item_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trip_gear WHERE trip_id = $1 AND gear_item_id = $2")
            .bind(trip_id)
            .bind(gear_item_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the packed state of one association.
    ///
    /// The row is locked for the duration of the transaction, so concurrent
    /// toggles serialize (last write wins). Returns `None` if the gear item
    /// is not on the trip's checklist.
    pub async fn toggle_packed(
        pool: &PgPool,
        trip_id: DbId,
        gear_item_id: DbId,
    ) -> Result<Option<ToggleOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(bool, String)> = sqlx::query_as(
            "SELECT tg.is_packed, g.name
             FROM trip_gear tg
             JOIN gear_items g ON g.id = tg.gear_item_id
             WHERE tg.trip_id = $1 AND tg.gear_item_id = $2
             FOR UPDATE OF tg",
        )
        .bind(trip_id)
        .bind(gear_item_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((is_packed, gear_name)) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        let transition = packing::toggle(is_packed, Utc::now());

        let (stored_packed, date_packed): (bool, Option<Timestamp>) = sqlx::query_as(
            "UPDATE trip_gear SET is_packed = $3, date_packed = $4
             WHERE trip_id = $1 AND gear_item_id = $2
             RETURNING is_packed, date_packed",
        )
        .bind(trip_id)
        .bind(gear_item_id)
        .bind(transition.state.is_packed())
        .bind(transition.date_packed)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(ToggleOutcome {
            trip_id,
            gear_item_id,
            state: PackState::from_flag(stored_packed),
            date_packed,
            gear_name,
        }))
    }

    /// Map of gear item id to `is_packed` for every item on the trip.
    ///
    /// A gear id missing from the map is not on the checklist at all.
    pub async fn packed_status_for(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<HashMap<DbId, bool>, sqlx::Error> {
        let rows: Vec<(DbId, bool)> =
            sqlx::query_as("SELECT gear_item_id, is_packed FROM trip_gear WHERE trip_id = $1")
                .bind(trip_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().collect())
    }

    /// Find a single association row.
    pub async fn find(
        pool: &PgPool,
        trip_id: DbId,
        gear_item_id: DbId,
    ) -> Result<Option<TripGear>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trip_gear WHERE trip_id = $1 AND gear_item_id = $2");
        sqlx::query_as::<_, TripGear>(&query)
            .bind(trip_id)
            .bind(gear_item_id)
            .fetch_optional(pool)
            .await
    }

    /// The trip's checklist: attached gear with packing columns, grouped by
    /// category then name.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<ChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(
            "SELECT g.id AS gear_item_id, g.name, g.brand, g.category, g.weight_grams,
                    g.condition, tg.is_packed, tg.date_packed
             FROM trip_gear tg
             JOIN gear_items g ON g.id = tg.gear_item_id
             WHERE tg.trip_id = $1
             ORDER BY g.category, g.name, g.id",
        )
        .bind(trip_id)
        .fetch_all(pool)
        .await
    }

    /// Gear items not yet attached to the trip, ordered by name.
    pub async fn available_gear_for(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<GearItem>, sqlx::Error> {
        let query = format!(
            "SELECT {GEAR_COLUMNS}
             FROM gear_items g
             WHERE NOT EXISTS (
                 SELECT 1 FROM trip_gear tg
                 WHERE tg.trip_id = $1 AND tg.gear_item_id = g.id
             )
             ORDER BY g.name, g.id"
        );
        sqlx::query_as::<_, GearItem>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Number of trips a gear item is attached to.
    pub async fn count_for_gear(pool: &PgPool, gear_item_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM trip_gear WHERE gear_item_id = $1")
                .bind(gear_item_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
