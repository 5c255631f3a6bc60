//! Integration tests for the CSV import and assignment activation endpoints.
//!
//! Tests that only exercise request validation run against a pool that
//! never connects. The rest need PostgreSQL and are ignored by default.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_multipart, unreachable_pool, Part};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let app = common::build_test_app(unreachable_pool());
    let response = post_multipart(
        app,
        "/api/v1/imports/cabins",
        &[Part::text("dry_run", "on")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(
        json["error"],
        "A CSV file is required in the 'csv_file' field"
    );
}

#[tokio::test]
async fn camper_upload_must_be_named_csv() {
    let app = common::build_test_app(unreachable_pool());
    let response = post_multipart(
        app,
        "/api/v1/imports/campers",
        &[Part::file("campers.xlsx", b"first_name,last_name\nAda,Lovelace\n")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "File must be a CSV file");
}

#[tokio::test]
async fn undecodable_file_is_rejected() {
    let app = common::build_test_app(unreachable_pool());
    let response = post_multipart(
        app,
        "/api/v1/imports/cabins",
        &[Part::file("cabins.csv", b"\xff\xfe,name\n")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_CSV");
}

#[tokio::test]
async fn activation_needs_ids() {
    let app = common::build_test_app(unreachable_pool());
    let response = post_json(app, "/api/v1/bunk-assignments/deactivate", json!({ "ids": [] })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Against the database
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn cabin_import_returns_summary_and_messages(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/api/v1/imports/cabins",
        &[Part::file("cabins.csv", b"name,capacity\nOak,10\n,5\n")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["importer"], "cabins");
    assert_eq!(data["success_count"], 1);
    assert_eq!(data["error_count"], 1);
    assert_eq!(data["errors"][0]["row"]["capacity"], "5");
    assert_eq!(data["errors"][0]["error"], "Cabin name is required");
    assert_eq!(data["messages"][0]["level"], "success");
    assert_eq!(data["messages"][0]["text"], "Successfully imported 1 cabins.");
    assert_eq!(data["messages"][1]["level"], "error");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cabins")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn dry_run_checkbox_prevents_writes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/api/v1/imports/campers",
        &[
            Part::file("campers.csv", b"first_name,last_name\nAda,Lovelace\n"),
            Part::text("dry_run", "on"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["dry_run"], true);
    assert_eq!(
        json["data"]["messages"][0]["text"],
        "Dry run completed. 1 campers would be imported."
    );

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM campers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn assignment_import_then_deactivate(pool: PgPool) {
    sqlx::query("INSERT INTO cabins (name) VALUES ('Oak')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO sessions (name, start_date, end_date) VALUES ('Summer', '2025-06-30', '2025-08-10')",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO bunks (cabin_id, session_id) SELECT c.id, s.id FROM cabins c, sessions s",
    )
    .execute(&pool)
    .await
    .unwrap();

    let csv = b"camper_first_name,camper_last_name,cabin_name,session_name,start_date,end_date,is_active\n\
                Ada,Lovelace,Oak,Summer,2025-07-01,,yes\n\
                Grace,Hopper,Birch,Summer,,,\n";
    let response = post_multipart(
        common::build_test_app(pool.clone()),
        "/api/v1/imports/bunk-assignments",
        &[Part::file("assignments.csv", csv)],
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["success_count"], 1);
    assert_eq!(json["data"]["errors"][0]["error"], "Cabin 'Birch' not found");

    // Grace's camper row was rolled back with the failed assignment.
    let (campers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM campers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(campers, 1);

    let (id,): (i64,) = sqlx::query_as("SELECT id FROM camper_bunk_assignments")
        .fetch_one(&pool)
        .await
        .unwrap();
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/bunk-assignments/deactivate",
        json!({ "ids": [id] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["updated"], 1);
    assert_eq!(json["data"]["message"], "1 assignments have been deactivated.");
}
