//! Gopher API
//!
//! A REST service exposing CRUD endpoints for gophers, a liveness probe,
//! and generated OpenAPI documentation.

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;

use service::GopherService;
use store::GopherStore;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub gophers: Arc<GopherService>,
}

impl AppState {
    /// Build state over an explicit store
    pub fn new(settings: config::Settings, store: Arc<dyn GopherStore>) -> Self {
        let gophers = GopherService::new(store, settings.validation.clone());
        Self {
            settings: Arc::new(settings),
            gophers: Arc::new(gophers),
        }
    }
}
