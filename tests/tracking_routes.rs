mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, id_of};

#[tokio::test]
async fn project_create_patch_and_list_in_insertion_order() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let (status, body) = app
        .post("/api/projects", &token, json!({ "name": "Work", "color": "#ff0000" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["is_completed"], false);
    let work = id_of(&body);
    let home = app.create_project(&token, "Home").await;

    let (status, body) = app
        .patch(
            &format!("/api/projects/{work}"),
            &token,
            json!({ "is_completed": true }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_completed"], true);
    assert_eq!(body["data"]["name"], "Work");
    assert_eq!(body["data"]["color"], "#ff0000");

    let projects = app.list("/api/projects", &token).await;
    let ids: Vec<&str> = projects
        .iter()
        .filter_map(|project| project["id"].as_str())
        .collect();
    assert_eq!(ids, vec![work.as_str(), home.as_str()]);
}

#[tokio::test]
async fn blank_project_fields_are_validation_errors() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let (status, body) = app
        .post("/api/projects", &token, json!({ "name": "  ", "color": "" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

    let project = app.create_project(&token, "Work").await;
    let (status, _) = app
        .patch(&format!("/api/projects/{project}"), &token, json!({ "name": "" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn todo_status_moves_freely_between_states() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    let project = app.create_project(&token, "Work").await;
    let (status, body) = app
        .post(
            "/api/todos",
            &token,
            json!({ "project_id": project, "title": "Report" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "todo");
    let todo = id_of(&body);
    let path = format!("/api/todos/{todo}");

    for next in ["in-progress", "done", "todo", "done", "done"] {
        let (status, body) = app.patch(&path, &token, json!({ "status": next })).await;
        assert_eq!(status, StatusCode::OK, "transition to {next}");
        assert_eq!(body["data"]["status"], next);
    }

    let (status, body) = app
        .patch(&path, &token, json!({ "title": "Final report" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Final report");
    assert_eq!(body["data"]["status"], "done");
}

#[tokio::test]
async fn invalid_status_is_rejected_and_leaves_todo_unchanged() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    let project = app.create_project(&token, "Work").await;
    let todo = app.create_todo(&token, &project, "Report").await;
    let path = format!("/api/todos/{todo}");
    app.patch(&path, &token, json!({ "status": "in-progress" })).await;

    let (status, body) = app
        .patch(&path, &token, json!({ "title": "Renamed", "status": "archived" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .expect("message")
            .to_lowercase()
            .contains("invalid status")
    );

    let todos = app.list("/api/todos", &token).await;
    assert_eq!(todos[0]["status"], "in-progress");
    assert_eq!(todos[0]["title"], "Report");
}

#[tokio::test]
async fn time_entry_takes_project_from_its_todo() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    let project = app.create_project(&token, "Work").await;
    let other = app.create_project(&token, "Other").await;
    let todo = app.create_todo(&token, &project, "Report").await;

    let entry = app.log_time(&token, &todo, 1500).await;
    assert_eq!(entry["project_id"], project.as_str());
    assert_eq!(entry["duration"], 1500);
    assert!(entry["timestamp"].is_string());

    let (status, body) = app
        .post(
            "/api/timeentries",
            &token,
            json!({ "todo_id": todo, "duration": 60, "project_id": project }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["project_id"], project.as_str());

    // A project_id that disagrees with the todo is refused, not stored as sent.
    let (status, _) = app
        .post(
            "/api/timeentries",
            &token,
            json!({ "todo_id": todo, "duration": 60, "project_id": other }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Negative durations are refused outright.
    let (status, _) = app
        .post(
            "/api/timeentries",
            &token,
            json!({ "todo_id": todo, "duration": -5 }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .post(
            "/api/timeentries",
            &token,
            json!({ "todo_id": todo, "duration": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let durations: Vec<i64> = app
        .list("/api/timeentries", &token)
        .await
        .iter()
        .filter_map(|entry| entry["duration"].as_i64())
        .collect();
    assert_eq!(durations, vec![1500, 60, 0]);
}

#[tokio::test]
async fn settings_are_created_once_and_patched_partially() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let (status, first) = app.get("/api/settings", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["focus_duration"], 25);
    assert_eq!(first["data"]["break_duration"], 5);

    let (_, second) = app.get("/api/settings", &token).await;
    assert_eq!(first["data"], second["data"]);

    let (status, body) = app
        .put("/api/settings", &token, json!({ "focus_duration": 50 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], first["data"]["id"]);
    assert_eq!(body["data"]["focus_duration"], 50);
    assert_eq!(body["data"]["break_duration"], 5);

    let (status, _) = app
        .put("/api/settings", &token, json!({ "break_duration": 0 }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app.get("/api/settings", &token).await;
    assert_eq!(body["data"]["focus_duration"], 50);
    assert_eq!(body["data"]["break_duration"], 5);
}

#[tokio::test]
async fn put_settings_before_any_get_creates_the_row() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let (status, body) = app
        .put(
            "/api/settings",
            &token,
            json!({ "focus_duration": 45, "break_duration": 15 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].clone();

    let (_, body) = app.get("/api/settings", &token).await;
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["focus_duration"], 45);
    assert_eq!(body["data"]["break_duration"], 15);
}

#[tokio::test]
async fn settings_are_per_user() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bobby").await;

    app.put("/api/settings", &alice, json!({ "focus_duration": 90 }))
        .await;
    let (_, body) = app.get("/api/settings", &bob).await;

    assert_eq!(body["data"]["focus_duration"], 25);
}

#[tokio::test]
async fn stats_summarize_only_own_entries() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bobby").await;
    let work = app.create_project(&alice, "Work").await;
    let home = app.create_project(&alice, "Home").await;
    let report = app.create_todo(&alice, &work, "Report").await;
    let dishes = app.create_todo(&alice, &home, "Dishes").await;
    app.log_time(&alice, &report, 1500).await;
    app.log_time(&alice, &report, 1500).await;
    app.log_time(&alice, &dishes, 600).await;

    let bob_project = app.create_project(&bob, "Bob").await;
    let bob_todo = app.create_todo(&bob, &bob_project, "Bob task").await;
    app.log_time(&bob, &bob_todo, 9999).await;

    let (status, body) = app.get("/api/stats", &alice).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["total_duration"], 3600);
    assert_eq!(stats["entry_count"], 3);
    assert_eq!(stats["by_project"][0]["name"], "Work");
    assert_eq!(stats["by_project"][0]["total_duration"], 3000);
    assert_eq!(stats["by_project"][1]["name"], "Home");
    assert_eq!(stats["by_todo"][0]["title"], "Report");
    assert_eq!(stats["by_todo"][0]["entry_count"], 2);
    assert_eq!(stats["by_day"].as_array().map(Vec::len), Some(1));
    assert_eq!(stats["by_day"][0]["total_duration"], 3600);
}

#[tokio::test]
async fn oversized_durations_are_refused_and_stats_stay_available() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    let project = app.create_project(&token, "Work").await;
    let todo = app.create_todo(&token, &project, "Report").await;

    for _ in 0..2 {
        let (status, body) = app
            .post(
                "/api/timeentries",
                &token,
                json!({ "todo_id": todo, "duration": i64::MAX }),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["data"][0]["field"], "duration");
    }

    let largest = i64::from(i32::MAX);
    app.log_time(&token, &todo, largest).await;
    app.log_time(&token, &todo, largest).await;

    let (status, body) = app.get("/api/stats", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_duration"], largest * 2);
    assert_eq!(body["data"]["entry_count"], 2);
}
