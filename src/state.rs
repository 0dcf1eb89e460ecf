//! Shared application state for all routes.

use crate::store::Gateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; every request goes through it.
    pub gateway: Arc<dyn Gateway>,
}

impl AppState {
    pub fn new<G: Gateway + 'static>(gateway: G) -> Self {
        AppState {
            gateway: Arc::new(gateway),
        }
    }
}
