mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn wrong_key_is_unauthorized() -> Result<()> {
    let app = TestApp::new().await?;
    app.seed("Fashion").await?;

    let (status, body) = app
        .call_with_key(Method::GET, "/api/categories", None, Some("WRONG"))
        .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "code": 401, "status": "UNAUTHORIZED", "data": null }));
    Ok(())
}

#[tokio::test]
async fn missing_key_is_unauthorized_on_every_route() -> Result<()> {
    let app = TestApp::new().await?;
    let existing = app.seed("Fashion").await?;
    let item = format!("/api/categories/{}", existing.id);

    let cases = [
        (Method::GET, "/api/categories".to_string(), None),
        (Method::POST, "/api/categories".to_string(), Some(r#"{"name": "Gadget"}"#)),
        (Method::GET, item.clone(), None),
        (Method::PUT, item.clone(), Some(r#"{"name": "Gadget"}"#)),
        (Method::DELETE, item.clone(), None),
        (Method::GET, "/health".to_string(), None),
        (Method::GET, "/no/such/route".to_string(), None),
    ];

    for (method, uri, body) in cases {
        let (status, _) = app.call_with_key(method.clone(), &uri, body, None).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }

    // Nothing behind the gate ran
    assert_eq!(app.row_count().await?, 1);
    let (_, body) = app.call(Method::GET, &item, None).await?;
    assert_eq!(body["data"]["name"], "Fashion");
    Ok(())
}

#[tokio::test]
async fn health_reports_database_ok() -> Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.call(Method::GET, "/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["database"], "ok");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found_envelope() -> Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.call(Method::GET, "/api/unknown", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "NOT FOUND");
    Ok(())
}
