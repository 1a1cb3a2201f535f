use dioxus::prelude::*;
use std::{cell::RefCell, rc::Rc};

/// Somewhere a piece of UI state lives: a Dioxus signal in the app, a plain
/// `Rc<RefCell<_>>` when timer-driven logic runs outside a component.
pub trait StateCell<T> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.write())
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// A closed set of tab identifiers.
pub trait TabKey: Copy + Eq + 'static {
    const ALL: &'static [Self];

    /// Stable identifier, also used as the DOM id suffix.
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.key() == key)
    }
}

/// Exactly one active tab out of `K::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitch<K> {
    active: K,
}

impl<K: TabKey> TabSwitch<K> {
    pub fn new(initial: K) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn is_active(&self, tab: K) -> bool {
        self.active == tab
    }

    pub fn select(&mut self, tab: K) {
        if self.active != tab {
            tracing::debug!("Tab switched from {} to {}", self.active.key(), tab.key());
            self.active = tab;
        }
    }

    /// Select by identifier; unknown identifiers leave the switch untouched.
    pub fn select_key(&mut self, key: &str) -> bool {
        match K::parse(key) {
            Some(tab) => {
                self.select(tab);
                true
            }
            None => {
                tracing::warn!("Ignoring unknown tab key: {}", key);
                false
            }
        }
    }
}

/// Tailwind classes for a tab trigger.
pub fn tab_button_class(active: bool) -> &'static str {
    if active {
        "flex-1 py-2 px-4 rounded-md text-sm font-medium bg-primary-600 text-text-primary shadow-glow transition-colors"
    } else {
        "flex-1 py-2 px-4 rounded-md text-sm font-medium text-text-muted hover:bg-background-hover hover:text-text-primary transition-colors"
    }
}

/// Tab trigger in a vertical list: icon and label aligned to the left.
pub fn stacked_tab_button_class(active: bool) -> String {
    format!("flex items-center justify-start {}", tab_button_class(active))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fruit {
        Apple,
        Pear,
        Plum,
    }

    impl TabKey for Fruit {
        const ALL: &'static [Self] = &[Fruit::Apple, Fruit::Pear, Fruit::Plum];

        fn key(self) -> &'static str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Pear => "pear",
                Fruit::Plum => "plum",
            }
        }

        fn label(self) -> &'static str {
            self.key()
        }
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let mut tabs = TabSwitch::new(Fruit::Apple);
        for &selected in Fruit::ALL {
            tabs.select(selected);
            let active: Vec<_> = Fruit::ALL
                .iter()
                .filter(|&&tab| tabs.is_active(tab))
                .collect();
            assert_eq!(active, vec![&selected]);
        }
    }

    #[test]
    fn test_select_key_resolves_closed_set() {
        let mut tabs = TabSwitch::new(Fruit::Apple);
        assert!(tabs.select_key("plum"));
        assert_eq!(tabs.active(), Fruit::Plum);
    }

    #[test]
    fn test_unknown_key_leaves_selection() {
        let mut tabs = TabSwitch::new(Fruit::Pear);
        assert!(!tabs.select_key("banana"));
        assert_eq!(tabs.active(), Fruit::Pear);
    }

    #[test]
    fn test_stacked_tab_class_keeps_alignment_and_state() {
        let active = stacked_tab_button_class(true);
        let idle = stacked_tab_button_class(false);

        assert!(active.starts_with("flex items-center justify-start "));
        assert!(idle.starts_with("flex items-center justify-start "));
        assert!(active.ends_with(tab_button_class(true)));
        assert!(idle.ends_with(tab_button_class(false)));
        assert_ne!(active, idle);
    }

    #[derive(Props, Clone)]
    struct CounterProps {
        seen: Rc<RefCell<Vec<u32>>>,
    }

    impl PartialEq for CounterProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.seen, &other.seen)
        }
    }

    #[allow(non_snake_case)]
    fn Counter(props: CounterProps) -> Element {
        let mut count = use_signal(|| 1u32);
        let doubled = count.apply(|n| {
            *n *= 2;
            *n
        });
        props.seen.borrow_mut().push(doubled);
        props.seen.borrow_mut().push(*count.peek());
        rsx! {}
    }

    #[test]
    fn test_signal_apply_writes_through() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(Counter, CounterProps { seen: seen.clone() });
        dom.rebuild_in_place();

        assert_eq!(*seen.borrow(), vec![2, 2]);
    }

    #[test]
    fn test_rc_cell_apply_mutates_in_place() {
        let mut cell = Rc::new(RefCell::new(1));
        let doubled = cell.apply(|n| {
            *n *= 2;
            *n
        });
        assert_eq!(doubled, 2);
        assert_eq!(*cell.borrow(), 2);
    }
}
