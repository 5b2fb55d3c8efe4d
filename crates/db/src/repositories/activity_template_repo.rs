//! Repository for the `activity_templates` table.

use gearlog_core::activity::DEFAULT_ACTIVITIES;
use sqlx::PgPool;

use crate::models::activity_template::ActivityTemplate;

const COLUMNS: &str = "id, name, description";

/// Read access to activity templates plus the one-time seeding step.
pub struct ActivityTemplateRepo;

impl ActivityTemplateRepo {
    /// List all templates ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ActivityTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_templates ORDER BY name");
        sqlx::query_as::<_, ActivityTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert the default templates if, and only if, the catalog is empty.
    ///
    /// Returns the number of rows inserted (0 when already seeded).
    pub async fn seed_defaults(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Serializes concurrent seeders so the emptiness check holds until commit.
        sqlx::query("LOCK TABLE activity_templates IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activity_templates")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.commit().await?;
            return Ok(0);
        }

        let mut inserted = 0;
        for activity in DEFAULT_ACTIVITIES {
            let result = sqlx::query(
                "INSERT INTO activity_templates (name, description) VALUES ($1, $2)
                 ON CONFLICT (name) DO NOTHING",
            )
            .bind(activity.name)
            .bind(activity.description)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        tracing::info!(inserted, "Seeded default activity templates");
        Ok(inserted)
    }
}
