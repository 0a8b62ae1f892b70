use crate::catalog::Catalog;

/// Shared state handed to every handler by the router.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
