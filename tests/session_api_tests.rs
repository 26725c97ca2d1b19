// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session logging, soft delete and account deletion endpoint tests.

use serde_json::json;

mod common;

use common::{post_json, session_doc, NOW};

#[tokio::test]
async fn test_create_session_document() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(
        app,
        "/api/sessions",
        json!({
            "ownerId": "user-1",
            "exerciseName": "Push-ups",
            "sets": "3",
            "reps": "10",
            "weight": "0",
            "now": NOW
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "ownerId": "user-1",
            "exerciseName": "Push-ups",
            "sets": 3.0,
            "reps": 10.0,
            "weight": 0.0,
            "timestamp": NOW,
            "isDeleted": false
        })
    );
}

#[tokio::test]
async fn test_create_session_rejects_invalid_form() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(
        app,
        "/api/sessions",
        json!({
            "ownerId": "user-1",
            "exerciseName": "Push-ups",
            "sets": "",
            "reps": "10",
            "weight": "0"
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"].as_str().unwrap().contains("sets"));
}

#[tokio::test]
async fn test_create_session_rejects_unknown_exercise() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(
        app,
        "/api/sessions",
        json!({
            "ownerId": "user-1",
            "exerciseName": "Burpees",
            "sets": 3,
            "reps": 10,
            "weight": 0
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_soft_delete_session() {
    let (app, _) = common::create_test_app();

    let records = json!([session_doc("a", 0), session_doc("b", 1)]);
    let (status, body) = post_json(
        app,
        "/api/sessions/a/delete",
        json!({ "records": records, "now": NOW }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], "a");
    assert_eq!(body["patch"], json!({ "isDeleted": true }));
    assert_eq!(body["changed"], true);
    assert_eq!(body["stats"]["totalCount"], 1);
    assert_eq!(body["stats"]["streakDays"], 1);
    assert_eq!(body["stats"]["activeSessions"][0]["id"], "b");
}

#[tokio::test]
async fn test_soft_delete_already_deleted() {
    let (app, _) = common::create_test_app();

    let mut deleted = session_doc("a", 0);
    deleted["isDeleted"] = json!(true);
    let (status, body) = post_json(
        app,
        "/api/sessions/a/delete",
        json!({ "records": [deleted], "now": NOW }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["changed"], false);
    assert_eq!(body["stats"]["totalCount"], 0);
}

#[tokio::test]
async fn test_soft_delete_duplicate_id_deleted_first() {
    let (app, _) = common::create_test_app();

    let mut stale = session_doc("a", 2);
    stale["isDeleted"] = json!(true);
    let records = json!([stale, session_doc("a", 0), session_doc("b", 1)]);
    let (status, body) = post_json(
        app,
        "/api/sessions/a/delete",
        json!({ "records": records, "now": NOW }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["changed"], true);
    assert_eq!(body["stats"]["totalCount"], 1);
    assert_eq!(body["stats"]["activeSessions"][0]["id"], "b");
}

#[tokio::test]
async fn test_soft_delete_unknown_session() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(
        app,
        "/api/sessions/missing/delete",
        json!({ "records": [session_doc("a", 0)], "now": NOW }),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_account_deletion_confirmed() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(
        app,
        "/api/account/delete",
        json!({ "confirmation": "DELETE" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["patch"], json!({ "accountStatus": "deleted" }));
}

#[tokio::test]
async fn test_account_deletion_cancelled() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(
        app,
        "/api/account/delete",
        json!({ "confirmation": "delete" }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["details"], "Account deletion cancelled");
}
