//! Application state management
//!
//! Shared resources handed to the session: the key-value store, the AI
//! gateway and the loaded configuration. All fields are `Arc`s, so cloning
//! is cheap and the state is read-only once built.

use crate::config::AppConfig;
use crate::gateway::NutritionGateway;
use crate::storage::KeyValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Local persistence
    pub store: Arc<dyn KeyValueStore>,
    /// AI nutrition gateway
    pub gateway: Arc<dyn NutritionGateway>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        gateway: Arc<dyn NutritionGateway>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            config: Arc::new(config),
        }
    }

    #[inline]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    #[inline]
    pub fn gateway(&self) -> &dyn NutritionGateway {
        self.gateway.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
