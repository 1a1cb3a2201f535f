use crate::clock::{SharedClock, TimerClock};
use crate::config::SiteConfig;
use crate::storage::{platform_store, SharedStore};
use std::rc::Rc;

/// Everything the sections need from the outside world, provided once at the
/// root of the component tree.
#[derive(Clone)]
pub struct Services {
    pub config: SiteConfig,
    pub clock: SharedClock,
    pub store: SharedStore,
}

impl Services {
    pub fn new(config: SiteConfig, clock: SharedClock, store: SharedStore) -> Self {
        Self {
            config,
            clock,
            store,
        }
    }

    /// Real timers and the platform's persistent storage.
    pub fn platform() -> Self {
        let config = SiteConfig::default();
        let store = platform_store(config.preferences_dir);
        Self::new(config, Rc::new(TimerClock), store)
    }
}
