#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use timetrack::test_helpers::test_app;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let (router, _state) = test_app().await.expect("build test app");
        Self { router }
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response should be json")
        };
        (status, json)
    }

    pub async fn get(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, path, Some(token), None).await
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn patch(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, path, Some(token), Some(body)).await
    }

    pub async fn put(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, path, Some(token), Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, path, Some(token), None).await
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Registers `username` with a fixed password and returns a bearer token.
    pub async fn user_token(&self, username: &str) -> String {
        let (status, _) = self.register(username, "secret123").await;
        assert_eq!(status, StatusCode::CREATED, "register {username}");
        let (status, body) = self.login(username, "secret123").await;
        assert_eq!(status, StatusCode::OK, "login {username}");
        body["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }

    pub async fn create_project(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .post("/api/projects", token, json!({ "name": name, "color": "#3366ff" }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create project {name}");
        id_of(&body)
    }

    pub async fn create_todo(&self, token: &str, project_id: &str, title: &str) -> String {
        let (status, body) = self
            .post(
                "/api/todos",
                token,
                json!({ "project_id": project_id, "title": title }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create todo {title}");
        id_of(&body)
    }

    pub async fn log_time(&self, token: &str, todo_id: &str, duration: i64) -> Value {
        let (status, body) = self
            .post(
                "/api/timeentries",
                token,
                json!({ "todo_id": todo_id, "duration": duration }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "log time on {todo_id}");
        body["data"].clone()
    }

    pub async fn list(&self, path: &str, token: &str) -> Vec<Value> {
        let (status, body) = self.get(path, token).await;
        assert_eq!(status, StatusCode::OK, "list {path}");
        body["data"].as_array().cloned().expect("list data")
    }
}

pub fn id_of(body: &Value) -> String {
    body["data"]["id"].as_str().expect("id in data").to_string()
}
