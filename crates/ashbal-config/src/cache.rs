//! Lock-free access to the active configuration

use crate::Config;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
#[derive(Debug)]
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Updates the configuration atomically, returning the replaced one.
    pub fn update(&self, config: Config) -> Arc<Config> {
        debug!("Replacing cached configuration");
        self.config.swap(Arc::new(config))
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_replaces_config() {
        let cache = ConfigCache::default();
        let before = cache.get();

        let mut next = Config::default();
        next.contact.submit_delay_ms = 42;
        let replaced = cache.update(next);

        assert!(Arc::ptr_eq(&before, &replaced));
        assert_eq!(cache.get().contact.submit_delay_ms, 42);
        assert_eq!(before.contact.submit_delay_ms, 1000);
    }
}
