#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the REAL kernel state and router over a modules directory, either
//! the sample modules shipped with the repository or a temporary tree.

#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use libreccm_kernel::{AppState, Config, routes};
use libreccm_test_utils::repo_modules_dir;

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Application over the repository's sample modules.
    pub fn new() -> Self {
        Self::for_modules_dir(&repo_modules_dir())
    }

    /// Application over an arbitrary modules directory.
    pub fn for_modules_dir(modules_dir: &Path) -> Self {
        Self::with_config(&Config::for_modules_dir(modules_dir))
    }

    /// Application built from an explicit configuration.
    pub fn with_config(config: &Config) -> Self {
        let state = AppState::new(config).expect("Failed to initialize AppState");
        let router = routes::app(state.clone());
        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri`, returning the status and the parsed JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, response_json(response).await)
    }
}

/// Read a response body as JSON.
pub async fn response_json(response: Response) -> serde_json::Value {
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&body).expect("Response body is not JSON")
}

/// Extract the `content_item_class` of every entry in a JSON list.
pub fn classes(list: &serde_json::Value) -> Vec<String> {
    list.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|v| v["content_item_class"].as_str().unwrap().to_string())
        .collect()
}
