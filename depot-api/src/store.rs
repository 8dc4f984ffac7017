use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};

use crate::{error::AppError, state::AppState, views};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/store", get(index))
        .route("/store/index", get(index))
}

/// GET /store
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = state.catalog.list_products().await?;
    tracing::debug!("Rendering store index with {} products", products.len());

    Ok(Html(views::store_index(&state.store_name, &products)))
}
