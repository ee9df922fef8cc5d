pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;
pub mod validation;

pub use state::AppState;

use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use middleware::jwt_auth_middleware;

/// Build the application router. Everything under /api requires a bearer
/// token; unregistered verb/path combinations inside the surface fall
/// through to 404.
pub fn app(state: AppState) -> Router {
    use handlers::{login, places, types};

    let protected = Router::new()
        .route(
            "/api/places",
            get(places::list)
                .post(places::create)
                .put(handlers::route_not_found)
                .delete(handlers::route_not_found),
        )
        .route(
            "/api/places/:id",
            get(places::get_by_id)
                .put(places::update)
                .delete(places::remove)
                .post(handlers::route_not_found),
        )
        .route(
            "/api/types",
            get(types::list)
                .post(types::create)
                .put(handlers::route_not_found)
                .delete(handlers::route_not_found),
        )
        .route(
            "/api/types/:id",
            get(types::get_by_id)
                .put(types::update)
                .delete(types::remove)
                .post(handlers::route_not_found),
        )
        .route_layer(from_fn(jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/auth/login", post(login::login))
        // Protected API
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
