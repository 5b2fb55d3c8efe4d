//! HTTP-level integration tests for the trip registry routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, count_rows, create_gear, create_trip, get, post_form};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trip_with_dates(pool: PgPool) {
    let response = post_form(
        build_test_app(pool.clone()),
        "/trips/create",
        "name=Ridge+Hike&activity_type=Hiking&start_date=2024-07-04&end_date=2024-07-06&location=Cascades",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ridge Hike");
    assert_eq!(json["data"]["start_date"], "2024-07-04");
    assert_eq!(json["data"]["end_date"], "2024-07-06");
    assert_eq!(json["data"]["message"], "Trip Ridge Hike created");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trip_bad_date_creates_nothing(pool: PgPool) {
    let response = post_form(
        build_test_app(pool.clone()),
        "/trips/create",
        "name=Ridge+Hike&activity_type=Hiking&start_date=not-a-date",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["form"]["start_date"], "not-a-date");
    assert_eq!(count_rows(&pool, "trips").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trip_requires_activity(pool: PgPool) {
    let response = post_form(build_test_app(pool.clone()), "/trips/create", "name=Ridge+Hike").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Activity type is required");
    assert_eq!(count_rows(&pool, "trips").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_lists_activities(pool: PgPool) {
    get(build_test_app(pool.clone()), "/init-db").await;

    let response = get(build_test_app(pool), "/trips/create").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["trip"].is_null());
    assert_eq!(json["data"]["activities"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_trips_newest_first(pool: PgPool) {
    let first = create_trip(&pool, "name=First&activity_type=Hiking").await;
    let second = create_trip(&pool, "name=Second&activity_type=Camping").await;

    let response = get(build_test_app(pool), "/trips").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_trip_detail(pool: PgPool) {
    let trip = create_trip(
        &pool,
        "name=Weekend&activity_type=Camping&start_date=2024-08-01&end_date=2024-08-03",
    )
    .await;
    let tent = create_gear(&pool, "name=Tent&category=Shelter&weight=2100").await;
    let stove = create_gear(&pool, "name=Stove&category=Cooking&weight=300").await;
    let kayak = create_gear(&pool, "name=Kayak&category=Other").await;
    get(build_test_app(pool.clone()), &format!("/trips/{trip}/add_gear/{tent}")).await;
    get(build_test_app(pool.clone()), &format!("/trips/{trip}/add_gear/{stove}")).await;
    get(build_test_app(pool.clone()), &format!("/trips/{trip}/toggle_packed/{tent}")).await;

    let response = get(build_test_app(pool), &format!("/trips/{trip}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();

    assert_eq!(data["trip"]["name"], "Weekend");
    assert_eq!(data["duration_days"], 3);

    let checklist = data["checklist"].as_array().unwrap();
    assert_eq!(checklist.len(), 2);
    assert_eq!(checklist[0]["name"], "Stove");
    assert!(checklist[0]["packed_ago"].is_null());
    assert_eq!(checklist[1]["name"], "Tent");
    assert_eq!(checklist[1]["is_packed"], true);
    assert_eq!(checklist[1]["packed_ago"], "just now");

    let available = data["available_gear"].as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0]["id"], kayak);

    assert_eq!(data["packed_status"][tent.to_string()], true);
    assert_eq!(data["packed_status"][stove.to_string()], false);
    assert!(data["packed_status"].get(kayak.to_string()).is_none());

    assert_eq!(data["summary"]["item_count"], 2);
    assert_eq!(data["summary"]["packed_count"], 1);
    assert_eq!(data["summary"]["total_weight_grams"], 2400);
    assert_eq!(data["summary"]["packed_weight_grams"], 2100);
    assert_eq!(data["summary"]["percent_packed"], 50);
    assert_eq!(data["summary"]["is_complete"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_trip_detail_missing_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/trips/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Trip with id 9999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_trip(pool: PgPool) {
    let trip = create_trip(&pool, "name=Draft&activity_type=Hiking").await;

    let response = get(build_test_app(pool.clone()), &format!("/trips/edit/{trip}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["trip"]["name"], "Draft");

    let response = post_form(
        build_test_app(pool.clone()),
        &format!("/trips/edit/{trip}"),
        "name=Final&activity_type=Climbing&start_date=2024-09-02&end_date=2024-09-01",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_form(
        build_test_app(pool),
        &format!("/trips/edit/{trip}"),
        "name=Final&activity_type=Climbing",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Final");
    assert_eq!(json["data"]["activity_type"], "Climbing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_trip_keeps_gear(pool: PgPool) {
    let trip = create_trip(&pool, "name=Weekend&activity_type=Camping").await;
    let tent = create_gear(&pool, "name=Tent&category=Shelter").await;
    get(build_test_app(pool.clone()), &format!("/trips/{trip}/add_gear/{tent}")).await;

    let response = post_form(build_test_app(pool.clone()), &format!("/trips/delete/{trip}"), "").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(count_rows(&pool, "trips").await, 0);
    assert_eq!(count_rows(&pool, "trip_gear").await, 0);
    assert_eq!(count_rows(&pool, "gear_items").await, 1);

    let response = post_form(build_test_app(pool), &format!("/trips/delete/{trip}"), "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
