use std::sync::Arc;

use crate::config::application_conf::AppConfig;

/// Process-wide immutable state. No database handle — the engine has no
/// persistence; every run is computed fresh from the request body.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}
