mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_reports_all_years() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .get_authenticated("/api/reports", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["incomes"].as_array().expect("incomes array").len(), 3);
    assert_eq!(body["expenses"].as_array().expect("expenses array").len(), 3);
}

#[tokio::test]
async fn test_reports_for_year() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .get_authenticated("/api/reports/2019", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["incomes"].as_array().expect("incomes array").len(), 2);
    assert_eq!(body["expenses"].as_array().expect("expenses array").len(), 2);
}

#[tokio::test]
async fn test_reports_for_month() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .get_authenticated("/api/reports/2019/4", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let incomes = body["incomes"].as_array().expect("incomes array");
    let expenses = body["expenses"].as_array().expect("expenses array");

    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0]["description"], "Paycheck");
    assert_eq!(expenses.len(), 2);
}

#[tokio::test]
async fn test_reports_empty_period() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    // A month with no entries is an empty report, not a 404
    let response = app
        .get_authenticated("/api/reports/2018/12", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["incomes"], json!([]));
    assert_eq!(body["expenses"], json!([]));
}

#[tokio::test]
async fn test_reports_invalid_year_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .get_authenticated("/api/reports/INVALID", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_reports_invalid_month_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    for month in ["INVALID", "0", "13"] {
        let response = app
            .get_authenticated(&format!("/api/reports/2019/{}", month), &token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert!(body["errors"].is_array());
    }
}

#[tokio::test]
async fn test_reports_require_valid_token() {
    let app = TestApp::spawn().await;

    for path in ["/api/reports", "/api/reports/2019", "/api/reports/2019/4"] {
        let response = app
            .get_authenticated(path, "INVALID_TOKEN")
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["errors"], json!(["Unauthorized request"]));
    }
}

#[tokio::test]
async fn test_invalid_year_with_invalid_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    // The gate runs before path parsing
    let response = app
        .get_authenticated("/api/reports/INVALID", "INVALID_TOKEN")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
