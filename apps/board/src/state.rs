//! Application state - the session's post store.

use std::sync::Arc;

use lostfound_core::ports::PostStore;
use lostfound_infra::{InMemoryPostStore, sample_posts};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = if config.seed_samples {
            let samples = sample_posts();
            tracing::info!(posts = samples.len(), "Seeding store with sample feed");
            Arc::new(InMemoryPostStore::with_posts(samples))
        } else {
            tracing::info!("Starting with an empty feed");
            Arc::new(InMemoryPostStore::new())
        };

        Self { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_by_default() {
        let state = AppState::new(&AppConfig::default());
        assert_eq!(state.store.len().await, 4);
    }

    #[tokio::test]
    async fn test_empty_when_seeding_disabled() {
        let config = AppConfig {
            seed_samples: false,
            ..AppConfig::default()
        };
        let state = AppState::new(&config);
        assert!(state.store.is_empty().await);
    }
}
