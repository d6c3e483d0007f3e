mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn full_tracking_session() {
    let app = TestApp::new().await;

    let (status, _) = app.register("alice", "secret123").await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.login("alice", "wrong-password").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, body) = app.login("alice", "secret123").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string();

    let project = app.create_project(&token, "Thesis").await;
    let first = app.create_todo(&token, &project, "Outline").await;
    let second = app.create_todo(&token, &project, "Draft").await;

    let (status, _) = app
        .patch(
            &format!("/api/todos/{first}"),
            &token,
            json!({ "status": "done" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let entry = app.log_time(&token, &first, 1500).await;
    assert_eq!(entry["project_id"], project.as_str());

    let todos = app.list("/api/todos", &token).await;
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["id"], first.as_str());
    assert_eq!(todos[0]["status"], "done");
    assert_eq!(todos[1]["id"], second.as_str());
    assert_eq!(todos[1]["status"], "todo");

    let (status, _) = app.delete(&format!("/api/projects/{project}"), &token).await;
    assert_eq!(status, StatusCode::OK);

    assert!(app.list("/api/projects", &token).await.is_empty());
    assert!(app.list("/api/todos", &token).await.is_empty());
    assert!(app.list("/api/timeentries", &token).await.is_empty());
}
