//! Web server adapter.
//!
//! Serves the dashboard through Axum: a charts view and a summary view,
//! both recomputed from the data port on every request.

mod error;
mod handlers;
mod templates;

pub use error::WebError;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::ports::data_port::DataPort;

pub struct AppState {
    pub data_port: Arc<dyn DataPort + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::charts_view))
        .route("/summary", get(handlers::summary_view))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}
