use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    gearlog_db::health_check(&pool).await.unwrap();

    let tables = ["gear_items", "activity_templates", "trips", "trip_gear"];
    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Re-running migrations on an up-to-date schema is a no-op and keeps data.
#[sqlx::test(migrations = "./migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    sqlx::query("INSERT INTO gear_items (name, category) VALUES ('Tent', 'Shelter')")
        .execute(&pool)
        .await
        .unwrap();

    gearlog_db::run_migrations(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gear_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1, "migrations must not drop existing rows");
}

/// The table constraint rejects a packed row without a pack date.
#[sqlx::test(migrations = "./migrations")]
async fn test_trip_gear_rejects_inconsistent_pack_date(pool: PgPool) {
    sqlx::query("INSERT INTO gear_items (id, name, category) VALUES (1, 'Tent', 'Shelter')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO trips (id, name, activity_type) VALUES (1, 'Weekend', 'Camping')")
        .execute(&pool)
        .await
        .unwrap();

    let result = sqlx::query(
        "INSERT INTO trip_gear (trip_id, gear_item_id, is_packed, date_packed) VALUES (1, 1, TRUE, NULL)",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "packed row without date_packed must be rejected");

    let result = sqlx::query(
        "INSERT INTO trip_gear (trip_id, gear_item_id, is_packed, date_packed) VALUES (1, 1, FALSE, NOW())",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "unpacked row with date_packed must be rejected");
}
