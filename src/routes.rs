use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::auth::{api_key_middleware, ApiKey};
use crate::services::CategoryService;

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            categories: CategoryService::with_sql_repository(pool.clone()),
            pool,
        }
    }
}

/// Full application: routes behind the API-key gate, plus global layers
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let api_key = ApiKey::new(config.security.api_key.clone());

    let router = Router::new()
        .route("/health", get(handlers::health))
        .merge(category_routes())
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(api_key, api_key_middleware))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(TraceLayer::new_for_http());

    if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn category_routes() -> Router<AppState> {
    use handlers::category;

    Router::new()
        .route(
            "/api/categories",
            get(category::find_all).post(category::create),
        )
        .route(
            "/api/categories/:id",
            get(category::find_by_id)
                .put(category::update)
                .delete(category::delete),
        )
}
