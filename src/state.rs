use crate::catalog::Catalog;
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub catalog: Arc<Catalog>,
    /// Held across every read-modify-write of the store.
    pub writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(storage: Storage, catalog: Catalog) -> Self {
        Self {
            storage,
            catalog: Arc::new(catalog),
            writes: Arc::new(Mutex::new(())),
        }
    }
}
