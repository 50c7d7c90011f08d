//! API routes module

pub mod health;
pub mod users;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest(domain_users::handlers::URL, users::router(state))
}

/// The complete application: documented API routes and the `/health` and
/// `/ready` endpoints, all behind the shared middleware.
pub async fn app(state: &AppState) -> io::Result<Router> {
    let root_routes = health_router(state.config.app).merge(health::router(state.clone()));

    create_router::<ApiDoc>(routes(state), root_routes, &state.config.cors).await
}
