//! Shared application state.

use crate::db::pool::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// State handed to every handler. The pool is exposed directly for the
/// health checks; everything else goes through the services.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub db_pool: AsyncDbPool,
}

impl AppState {
    pub fn new(db_pool: AsyncDbPool) -> Self {
        let services = Services::new(Repositories::new(db_pool.clone()));
        Self { services, db_pool }
    }
}
