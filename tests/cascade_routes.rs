mod common;

use axum::http::StatusCode;

use common::TestApp;

#[tokio::test]
async fn deleting_project_removes_its_todos_and_time() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    let doomed = app.create_project(&token, "Doomed").await;
    let kept = app.create_project(&token, "Kept").await;
    let doomed_todo = app.create_todo(&token, &doomed, "Goes away").await;
    let kept_todo = app.create_todo(&token, &kept, "Stays").await;
    app.log_time(&token, &doomed_todo, 300).await;
    app.log_time(&token, &doomed_todo, 200).await;
    app.log_time(&token, &kept_todo, 100).await;

    let (status, body) = app.delete(&format!("/api/projects/{doomed}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Project deleted successfully");

    let projects = app.list("/api/projects", &token).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], kept.as_str());

    let todos = app.list("/api/todos", &token).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], kept_todo.as_str());

    let entries = app.list("/api/timeentries", &token).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["todo_id"], kept_todo.as_str());

    let (status, _) = app.delete(&format!("/api/projects/{doomed}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_todo_removes_only_its_time() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    let project = app.create_project(&token, "Work").await;
    let doomed = app.create_todo(&token, &project, "Goes away").await;
    let sibling = app.create_todo(&token, &project, "Sibling").await;
    app.log_time(&token, &doomed, 300).await;
    app.log_time(&token, &sibling, 900).await;

    let (status, body) = app.delete(&format!("/api/todos/{doomed}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted successfully");

    assert_eq!(app.list("/api/projects", &token).await.len(), 1);
    let todos = app.list("/api/todos", &token).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], sibling.as_str());
    let entries = app.list("/api/timeentries", &token).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["duration"], 900);
}
