//! End-to-end walkthrough exercising the whole API surface in order.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn full_task_lifecycle() {
    let app = spawn_app().await;
    let anonymous = TaskboardClient::new(&app.base_url);

    // Register and log in.
    anonymous
        .register(&RegisterRequest {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        })
        .await
        .expect("registration should succeed");
    let token = anonymous
        .login(&LoginRequest {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        })
        .await
        .expect("login should succeed");
    let alice = anonymous.with_token(&token.access_token);

    // Create a task; it starts pending.
    let task = alice
        .create_task(&TaskFactory::create_request("t1", "d1"))
        .await
        .expect("create should succeed");
    assert_eq!(task.status, "pending");

    // Move it to done.
    let updated = alice
        .update_task(&task.id, &TaskFactory::status_update("done"))
        .await
        .expect("update should succeed");
    assert_eq!(updated.status, "done");
    assert_eq!(updated.title, "t1");

    // A second user cannot touch it.
    let bob = authenticated_client(&app, "b@x.com").await;
    let forbidden = bob
        .update_task(&task.id, &TaskFactory::status_update("pending"))
        .await;
    assert_api_error(&forbidden, "FORBIDDEN", StatusCode::FORBIDDEN);

    // But can comment on it.
    let comment = bob
        .create_comment(&task.id, &CommentFactory::create_request("nice work"))
        .await
        .expect("comment should succeed");
    assert_eq!(comment.task_id, task.id);

    // The comment listing carries the commenter's identity.
    let comments = alice
        .list_comments(&task.id)
        .await
        .expect("listing should succeed");
    assert_eq!(comments.len(), 1);
    let author = comments[0].author.as_ref().expect("author should be embedded");
    assert_eq!(author.email, "b@x.com");

    // The creator deletes the task, taking the comments with it.
    alice
        .delete_task(&task.id)
        .await
        .expect("delete should succeed");
    let gone = alice.get_task(&task.id).await;
    assert_api_error(&gone, "NOT_FOUND", StatusCode::NOT_FOUND);
}
