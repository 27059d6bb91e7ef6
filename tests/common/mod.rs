#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use category_api::config::AppConfig;
use category_api::database::models::Category;
use category_api::database::{CategoryRepository, DatabaseManager, SqlCategoryRepository};
use category_api::{app, AppState};

pub const API_KEY: &str = "AUTH";

/// Router wired exactly like the binary, backed by a private in-memory store
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let mut config = AppConfig::development();
        config.database.url = "sqlite::memory:".to_string();

        let pool = DatabaseManager::connect(&config.database).await?;
        DatabaseManager::migrate(&pool).await?;

        let router = app(AppState::new(pool.clone()), &config);
        Ok(Self { router, pool })
    }

    /// Insert a category directly through the repository and commit it
    pub async fn seed(&self, name: &str) -> Result<Category> {
        let mut tx = self.pool.begin().await?;
        let category = SqlCategoryRepository::new()
            .save(&mut tx, Category::unsaved(name))
            .await?;
        tx.commit().await?;
        Ok(category)
    }

    pub async fn row_count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Send a request with the valid API key
    pub async fn call(&self, method: Method, uri: &str, body: Option<&str>) -> Result<(StatusCode, Value)> {
        self.call_with_key(method, uri, body, Some(API_KEY)).await
    }

    pub async fn call_with_key(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        key: Option<&str>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = key {
            builder = builder.header("X-API-KEY", key);
        }
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }

    /// Send a JSON body with the valid API key but no `Content-Type` header
    pub async fn call_without_content_type(
        &self,
        method: Method,
        uri: &str,
        body: &str,
    ) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("X-API-KEY", API_KEY)
            .body(Body::from(body.to_string()))?;
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body: Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("response body is not JSON: {:?}", bytes))?;

        // The envelope code always mirrors the HTTP status
        assert_eq!(body["code"].as_u64(), Some(status.as_u16() as u64), "body: {}", body);
        Ok((status, body))
    }
}
