//! Integration tests for GET /tasks and GET /tasks/{id}.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

// ============================================================
// Listing
// ============================================================

#[rstest]
#[tokio::test]
async fn list_tasks_returns_creation_order() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;
    for title in ["first", "second", "third"] {
        client
            .create_task(&TaskFactory::create_request(title, "d"))
            .await
            .expect("create should succeed");
    }

    let result = client.list_tasks(None).await;

    assert_success(&result);
    let titles: Vec<String> = result.unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[rstest]
#[tokio::test]
async fn list_tasks_includes_other_users_tasks() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app, "alice@example.com").await;
    let bob = authenticated_client(&app, "bob@example.com").await;
    alice
        .create_task(&TaskFactory::create_request("hers", "d"))
        .await
        .expect("create should succeed");

    let result = bob.list_tasks(None).await;

    assert_success(&result);
    let tasks = result.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "hers");
}

#[rstest]
#[tokio::test]
async fn list_tasks_filters_by_status() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;
    let kept = client
        .create_task(&TaskFactory::create_request("open", "d"))
        .await
        .expect("create should succeed");
    let finished = client
        .create_task(&TaskFactory::create_request("closed", "d"))
        .await
        .expect("create should succeed");
    client
        .update_task(&finished.id, &TaskFactory::status_update("done"))
        .await
        .expect("update should succeed");

    let pending = client.list_tasks(Some("pending")).await;
    let done = client.list_tasks(Some("done")).await;

    assert_success(&pending);
    let pending = pending.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, kept.id);

    assert_success(&done);
    let done = done.unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, finished.id);
}

#[rstest]
#[tokio::test]
async fn list_tasks_rejects_unknown_status_filter() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;

    let result = client.list_tasks(Some("archived")).await;

    assert_api_error(&result, "VALIDATION_FAILED", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn list_tasks_empty_store_returns_empty_list() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;

    let result = client.list_tasks(None).await;

    assert_success(&result);
    assert!(result.unwrap().is_empty());
}

// ============================================================
// Fetching by id
// ============================================================

#[rstest]
#[tokio::test]
async fn get_task_round_trips() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;
    let created = client
        .create_task(&TaskFactory::create_request("t1", "d1"))
        .await
        .expect("create should succeed");

    let result = client.get_task(&created.id).await;

    assert_success(&result);
    assert_eq!(result.unwrap(), created);
}

#[rstest]
#[tokio::test]
async fn get_missing_task_is_not_found() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;

    let result = client.get_task(&non_existent_uuid()).await;

    assert_api_error(&result, "NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn get_task_rejects_malformed_id() {
    let app = spawn_app().await;
    let client = authenticated_client(&app, "alice@example.com").await;

    let result = client.get_task("not-a-uuid").await;

    assert_api_error(&result, "VALIDATION_FAILED", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn get_task_requires_authentication() {
    let app = spawn_app().await;
    let client = TaskboardClient::new(&app.base_url);

    let result = client.get_task(&non_existent_uuid()).await;

    assert_api_error(&result, "INVALID_CREDENTIALS", StatusCode::UNAUTHORIZED);
}
