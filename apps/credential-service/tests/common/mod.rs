//! 統合テスト共通ヘルパー

// テストファイルごとに使うヘルパーが異なる
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use credstore_infra::repository::InMemoryCredentialRepository;
use credstore_service::app_builder::build_app;
use tower::ServiceExt;

/// テスト対象アプリとその背後のストア
///
/// ストアはテストごとに新しく作るため、リセットは不要。
pub struct TestApp {
    pub app:   Router,
    pub store: InMemoryCredentialRepository,
}

impl TestApp {
    pub fn empty() -> Self {
        let store = InMemoryCredentialRepository::new();
        let app = build_app(Arc::new(store.clone()));
        Self { app, store }
    }

    pub async fn send(&self, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    pub async fn signup(&self, username: &str, password: &str) -> StatusCode {
        let body = serde_json::json!({ "username": username, "password": password });
        self.send(Method::POST, "/api/signup", &body.to_string())
            .await
            .0
    }

    pub async fn get_index(&self, username: &str) -> (StatusCode, String) {
        let body = serde_json::json!({ "username": username });
        self.send(Method::GET, "/api/getIndex", &body.to_string())
            .await
    }

    pub async fn get_password(&self, username: &str) -> (StatusCode, String) {
        let body = serde_json::json!({ "username": username });
        self.send(Method::GET, "/api/getPW", &body.to_string()).await
    }

    pub async fn update_password(&self, username: &str, password: &str) -> StatusCode {
        let body = serde_json::json!({ "username": username, "password": password });
        self.send(Method::PUT, "/api/updatePW", &body.to_string())
            .await
            .0
    }

    pub async fn delete_user(&self, username: &str) -> StatusCode {
        let body = serde_json::json!({ "username": username });
        self.send(Method::DELETE, "/api/deleteUser", &body.to_string())
            .await
            .0
    }

    /// ストア内のユーザー名を登録順で返す
    pub async fn usernames(&self) -> Vec<String> {
        use credstore_infra::repository::CredentialRepository as _;

        self.store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.username().as_str().to_string())
            .collect()
    }
}
