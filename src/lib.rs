pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod summarizer;

use std::sync::Arc;
use config::Config;
use llm::Completer;
use tracing_subscriber::EnvFilter;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completer: Arc<dyn Completer>,
}

impl AppState {
    pub fn new(config: Config, completer: Arc<dyn Completer>) -> Self {
        AppState {
            config: Arc::new(config),
            completer,
        }
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
/// Calling it more than once is harmless.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
