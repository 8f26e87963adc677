use axum::Router;

pub mod planning;
pub mod system;

/// Router for all planning endpoints.
pub fn router() -> Router {
    Router::new().nest("/planning", planning::router())
}
