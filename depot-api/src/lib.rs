use axum::{http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod state;
pub mod store;
pub mod views;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(store::routes())
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
