//! Book Catalog Server
//!
//! A small REST JSON API over an in-memory book catalog seeded from static
//! JSON files, with a derived view of the books currently issued to users.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire the services on top of an already loaded repository
    pub fn new(config: &AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, config.catalog.clone());

        Self {
            services: Arc::new(services),
        }
    }
}
