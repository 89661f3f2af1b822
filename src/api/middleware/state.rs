use crate::database::Database;

/// Shared application state handed to every request handler. Handlers build
/// their service on top of it per request, so each request gets its own unit
/// of work over the pooled connections.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
