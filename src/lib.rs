pub mod api;
pub mod article;
pub mod config;
pub mod error;
pub mod upstream;
pub mod youtube;

use std::sync::Arc;
use config::Config;
use upstream::HttpClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Arc<dyn HttpClient>,
}
