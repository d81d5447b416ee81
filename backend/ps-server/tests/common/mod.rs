#![allow(dead_code)]

//! Test infrastructure for ps-server API tests

use ps_auth::{CredentialStore, PasswordHasher};
use ps_gateway::PolicyAnalysisGateway;
use ps_server::{AppState, SessionRegistry, build_router};

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

// bcrypt's MIN_COST (4) is private in the crate; mirror it here.
const BCRYPT_MIN_COST: u32 = 4;

/// A ready-to-call app whose gateway points at a private mock service
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub service: MockServer,
}

pub async fn create_test_app() -> TestApp {
    let pool = create_test_pool().await;
    let service = MockServer::start().await;

    let state = AppState {
        pool: pool.clone(),
        sessions: SessionRegistry::new(),
        // MIN_COST keeps bcrypt fast under test
        credentials: Arc::new(CredentialStore::with_hasher(
            pool,
            PasswordHasher::new(BCRYPT_MIN_COST),
        )),
        gateway: Arc::new(PolicyAnalysisGateway::new(
            &service.uri(),
            "test-key",
            "gpt-4o",
        )),
        max_upload_bytes: MAX_UPLOAD_BYTES,
    };

    TestApp {
        router: build_router(state.clone()),
        state,
        service,
    }
}

async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ps_db::migrate(&pool).await.expect("Failed to run migrations");

    pool
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    /// Registers and logs in, returning the bearer token.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let register = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "email": email,
                    "password": password,
                    "confirm_password": password,
                })
                .to_string(),
            ))
            .unwrap();
        let response = self.request(register).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let login = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({ "email": email, "password": password }).to_string(),
            ))
            .unwrap();
        let response = self.request(login).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        body["token"].as_str().expect("login token").to_string()
    }

    /// Uploads a PDF through the API, with the mock service accepting it.
    pub async fn upload_pdf(&self, token: &str, file_name: &str, size: usize) -> Response<Body> {
        Mock::given(method("POST"))
            .and(path("/v1/files"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": "file-abc123" })),
            )
            .mount(&self.service)
            .await;

        let (content_type, body) = multipart_file(file_name, &pdf_bytes(size));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/documents")
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();

        self.request(request).await
    }

    /// Mounts a successful analysis response on the mock service.
    pub async fn mock_analysis_report(&self, report_json: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": [
                    {
                        "type": "message",
                        "content": [
                            { "type": "output_text", "text": report_json }
                        ]
                    }
                ]
            })))
            .mount(&self.service)
            .await;
    }

    pub async fn analyze(&self, token: &str, scenario: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "scenario": scenario }).to_string()))
            .unwrap();

        self.request(request).await
    }

    pub async fn history(&self, token: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri("/api/v1/analysis/history")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        self.request(request).await
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// A fake PDF payload of the requested size.
pub fn pdf_bytes(size: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    bytes.resize(size, b'x');
    bytes
}

/// Hand-rolled multipart body with a single `file` field.
pub fn multipart_file(file_name: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
