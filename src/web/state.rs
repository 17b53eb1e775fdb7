//! Shared application state.

use std::sync::Arc;

use wayfarer_core::prelude::RequestHandler;

/// State shared by all request workers.
#[derive(Clone)]
pub struct AppState {
    /// Request handler wrapping graph, engine factory and database
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    pub fn new(handler: Arc<RequestHandler>) -> Self {
        Self { handler }
    }
}
