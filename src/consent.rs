// Cookie-consent flag and the banner that asks for it
use crate::clock::{self, SharedClock};
use crate::common::StateCell;
use crate::storage::KeyValueStore;
use std::time::Duration;

const ACCEPTED: &str = "true";
const DECLINED: &str = "false";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsentState {
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    /// Interpret a stored value. An empty string counts as unset; any other
    /// unrecognised value is read as a refusal so the visitor is not asked again.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Self::Unset,
            Some(ACCEPTED) => Self::Accepted,
            Some(DECLINED) => Self::Declined,
            Some(other) => {
                tracing::warn!("Unrecognised consent value {:?}, treating as declined", other);
                Self::Declined
            }
        }
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Accepted => Some(ACCEPTED),
            Self::Declined => Some(DECLINED),
        }
    }
}

/// Best-effort read; an unreadable store behaves like a first visit.
pub fn load_consent(store: &dyn KeyValueStore, key: &str) -> ConsentState {
    match store.get(key) {
        Ok(value) => ConsentState::from_stored(value.as_deref()),
        Err(e) => {
            tracing::warn!("Failed to read consent flag, banner will be shown: {}", e);
            ConsentState::Unset
        }
    }
}

fn persist_consent(store: &dyn KeyValueStore, key: &str, state: ConsentState) {
    let Some(value) = state.as_stored() else {
        return;
    };
    if let Err(e) = store.set(key, value) {
        tracing::warn!("Failed to persist consent flag: {}", e);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsentBanner {
    consent: ConsentState,
    visible: bool,
}

impl ConsentBanner {
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let consent = load_consent(store, key);
        tracing::debug!("Loaded consent state {:?}", consent);
        Self {
            consent,
            visible: false,
        }
    }

    pub fn consent(&self) -> ConsentState {
        self.consent
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn needs_prompt(&self) -> bool {
        self.consent == ConsentState::Unset
    }

    /// Show the banner if no choice has been made yet.
    pub fn reveal(&mut self) -> bool {
        if self.needs_prompt() {
            self.visible = true;
        }
        self.visible
    }

    pub fn accept(&mut self, store: &dyn KeyValueStore, key: &str) {
        self.choose(ConsentState::Accepted, store, key);
    }

    pub fn decline(&mut self, store: &dyn KeyValueStore, key: &str) {
        self.choose(ConsentState::Declined, store, key);
    }

    fn choose(&mut self, choice: ConsentState, store: &dyn KeyValueStore, key: &str) {
        tracing::info!("Cookie consent set to {:?}", choice);
        persist_consent(store, key, choice);
        // Hidden even when the write failed; the visitor is asked again next load.
        self.consent = choice;
        self.visible = false;
    }
}

/// Reveal `banner` after `delay` if the visitor has not chosen yet.
pub async fn reveal_after<S>(clock: SharedClock, delay: Duration, mut banner: S)
where
    S: StateCell<ConsentBanner>,
{
    if !banner.apply(|b| b.needs_prompt()) {
        return;
    }
    clock::after(clock, delay, move || {
        banner.apply(ConsentBanner::reveal);
    })
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::Runtime;
    use crate::storage::{MemoryStore, StorageError};
    use std::{cell::RefCell, rc::Rc};

    const KEY: &str = "cookieConsent";
    const DELAY: Duration = Duration::from_millis(1500);

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn mount(rt: &mut Runtime, store: &dyn KeyValueStore) -> Rc<RefCell<ConsentBanner>> {
        let banner = Rc::new(RefCell::new(ConsentBanner::load(store, KEY)));
        let clock = rt.clock();
        rt.spawn(reveal_after(clock, DELAY, banner.clone()));
        banner
    }

    #[test]
    fn test_stored_values() {
        assert_eq!(ConsentState::from_stored(None), ConsentState::Unset);
        assert_eq!(ConsentState::from_stored(Some("")), ConsentState::Unset);
        assert_eq!(ConsentState::from_stored(Some("true")), ConsentState::Accepted);
        assert_eq!(ConsentState::from_stored(Some("false")), ConsentState::Declined);
        assert_eq!(ConsentState::from_stored(Some("yes")), ConsentState::Declined);
    }

    #[test]
    fn test_first_visit_reveals_after_delay() {
        let mut rt = Runtime::new();
        let store = MemoryStore::new();
        let banner = mount(&mut rt, &store);

        rt.advance_ms(1499);
        assert!(!banner.borrow().is_visible());
        rt.advance_ms(1);
        assert!(banner.borrow().is_visible());
    }

    #[test]
    fn test_stored_choice_never_reveals() {
        for value in ["true", "false"] {
            let mut rt = Runtime::new();
            let store = MemoryStore::new();
            store.set(KEY, value).unwrap();
            let banner = mount(&mut rt, &store);

            rt.advance_ms(60_000);
            assert!(!banner.borrow().is_visible(), "revealed with {value}");
        }
    }

    #[test]
    fn test_accept_is_terminal_across_reloads() {
        let store = MemoryStore::new();
        let mut rt = Runtime::new();
        let banner = mount(&mut rt, &store);
        rt.advance_ms(1500);

        banner.borrow_mut().accept(&store, KEY);
        assert!(!banner.borrow().is_visible());
        assert_eq!(store.get(KEY), Ok(Some("true".to_string())));

        let mut reload = Runtime::new();
        let reloaded = mount(&mut reload, &store);
        reload.advance_ms(10_000);
        assert_eq!(reloaded.borrow().consent(), ConsentState::Accepted);
        assert!(!reloaded.borrow().is_visible());
    }

    #[test]
    fn test_decline_is_terminal_across_reloads() {
        let store = MemoryStore::new();
        let mut banner = ConsentBanner::load(&store, KEY);
        banner.reveal();
        banner.decline(&store, KEY);

        assert!(!banner.is_visible());
        assert!(!banner.reveal());
        assert_eq!(ConsentBanner::load(&store, KEY).consent(), ConsentState::Declined);
    }

    #[test]
    fn test_choice_before_delay_cancels_reveal() {
        let store = MemoryStore::new();
        let mut rt = Runtime::new();
        let banner = mount(&mut rt, &store);

        rt.advance_ms(500);
        banner.borrow_mut().decline(&store, KEY);
        rt.advance_ms(5000);
        assert!(!banner.borrow().is_visible());
    }

    #[test]
    fn test_broken_storage_degrades_to_prompting() {
        let mut rt = Runtime::new();
        let banner = mount(&mut rt, &BrokenStore);
        rt.advance_ms(1500);
        assert!(banner.borrow().is_visible());

        banner.borrow_mut().accept(&BrokenStore, KEY);
        assert!(!banner.borrow().is_visible());

        // Nothing was written, so the next visit asks again.
        let mut reload = Runtime::new();
        let reloaded = mount(&mut reload, &BrokenStore);
        reload.advance_ms(1500);
        assert!(reloaded.borrow().is_visible());
    }
}
