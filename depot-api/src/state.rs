use std::sync::Arc;
use depot_store::CatalogRepository;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    /// Name shown in the page banner
    pub store_name: String,
}
