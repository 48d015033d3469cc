use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let protected = Router::new()
        .route("/api/system/auth/me", get(system::handlers::auth::current_user))
        // ========================================
        // CATALOG ROUTES
        // ========================================
        .route(
            "/api/category",
            get(handlers::a001_category::list)
                .post(handlers::a001_category::create)
                .delete(handlers::a001_category::delete),
        )
        .route("/api/category/:id", put(handlers::a001_category::update))
        .route(
            "/api/item",
            get(handlers::a002_item::list)
                .post(handlers::a002_item::create)
                .delete(handlers::a002_item::delete),
        )
        .route("/api/item/:id", put(handlers::a002_item::update))
        .layer(middleware::from_fn(system::auth::middleware::require_auth));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .merge(protected)
}
