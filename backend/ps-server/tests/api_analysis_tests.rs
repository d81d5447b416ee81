//! Integration tests for scenario analysis and history
mod common;

use crate::common::{body_json, create_test_app};

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const FIRE_REPORT: &str = r#"{
    "covered_items": [
        {"item": "Dwelling repair", "est_replacement_cost": 12000, "depreciation_pct": 10, "acv_payout": 10800}
    ],
    "not_covered_items": ["Detached shed"],
    "deductible": 1000,
    "total_out_of_pocket": 1500,
    "gap_alerts": ["Arson investigation pending"],
    "recommendations": ["Document belongings with photos"],
    "plain_summary": "Fire damage to the dwelling is covered subject to the deductible."
}"#;

async fn result_row_count(pool: &sqlx::SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM policy_analysis_results")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_analysis_without_document_conflicts() {
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;

    let response = app.analyze(&token, "Fire").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NO_DOCUMENT");
}

#[tokio::test]
async fn test_analysis_rejects_unknown_scenario() {
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;
    app.upload_pdf(&token, "policy.pdf", 1024).await;

    let response = app.analyze(&token, "Meteor Strike").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["field"], "scenario");
}

#[tokio::test]
async fn test_fire_scenario_end_to_end() {
    // Register, login, upload a 2 MB policy, analyze the Fire scenario
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;
    app.upload_pdf(&token, "policy.pdf", 2 * 1024 * 1024).await;
    app.mock_analysis_report(FIRE_REPORT).await;

    let response = app.analyze(&token, "Fire").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["scenario"], "Fire");
    assert_eq!(body["health_score"], 80);
    assert_eq!(body["out_of_pocket"], 1500.0);
    assert_eq!(
        body["report"]["gap_alerts"],
        json!(["Arson investigation pending"])
    );
    assert!(body["analysis_id"].as_i64().is_some());

    // One row persisted, visible in history with a formatted amount
    let history = app.history(&token).await;
    assert_eq!(history.status(), StatusCode::OK);
    let history_body = body_json(history).await;
    let analyses = history_body["analyses"].as_array().unwrap();
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0]["scenario"], "Fire");
    assert_eq!(analyses[0]["out_of_pocket"], "$1,500");
    assert_eq!(analyses[0]["health_score"], 80);
}

#[tokio::test]
async fn test_service_failure_maps_to_bad_gateway_and_persists_nothing() {
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;
    app.upload_pdf(&token, "policy.pdf", 1024).await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "overloaded" }
        })))
        .mount(&app.service)
        .await;

    let response = app.analyze(&token, "Fire").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "ANALYSIS_FAILED");

    assert_eq!(result_row_count(&app.state.pool).await, 0);
}

#[tokio::test]
async fn test_malformed_report_persists_nothing() {
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;
    app.upload_pdf(&token, "policy.pdf", 1024).await;
    app.mock_analysis_report("not json at all").await;

    let response = app.analyze(&token, "Fire").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(result_row_count(&app.state.pool).await, 0);
}

#[tokio::test]
async fn test_history_is_scoped_to_the_logged_in_user() {
    let app = create_test_app().await;
    let alice = app.register_and_login("alice@b.com", "secret1").await;
    let bob = app.register_and_login("bob@b.com", "secret1").await;

    app.upload_pdf(&alice, "policy.pdf", 1024).await;
    app.mock_analysis_report(FIRE_REPORT).await;
    app.analyze(&alice, "Fire").await;

    let bob_history = body_json(app.history(&bob).await).await;
    assert_eq!(bob_history["analyses"].as_array().unwrap().len(), 0);

    let alice_history = body_json(app.history(&alice).await).await;
    assert_eq!(alice_history["analyses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_history_is_newest_first() {
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;
    app.upload_pdf(&token, "policy.pdf", 1024).await;
    app.mock_analysis_report(FIRE_REPORT).await;

    app.analyze(&token, "Fire").await;
    app.analyze(&token, "Theft").await;

    let history = body_json(app.history(&token).await).await;
    let analyses = history["analyses"].as_array().unwrap();
    assert_eq!(analyses.len(), 2);
    assert_eq!(analyses[0]["scenario"], "Theft");
    assert_eq!(analyses[1]["scenario"], "Fire");
}

#[tokio::test]
async fn test_history_degrades_to_empty_when_reads_fail() {
    let app = create_test_app().await;
    let token = app.register_and_login("a@b.com", "secret1").await;

    // Sessions live in memory, so the token stays valid with the pool gone
    app.state.pool.close().await;

    let response = app.history(&token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["analyses"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_history_requires_a_session() {
    let app = create_test_app().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/analysis/history")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.request(request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
