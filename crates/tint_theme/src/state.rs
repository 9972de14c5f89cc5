//! Application-owned theme preference store
//!
//! The engine itself is stateless. Applications that need a shared,
//! observable selection keep a [`ThemeStore`], hand it to whoever needs it
//! and subscribe to changes. Persistence is left to the application.

use crate::direction::Direction;
use crate::mode::BrightnessMode;
use crate::overrides::ThemeOverrides;
use crate::palette::ColorFamily;
use crate::theme::{create_theme, Theme, ThemeConfig, ThemeSelection};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Change listener
pub type Subscriber = Arc<dyn Fn(&ThemeSelection) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

/// Current theme selection plus overrides, with change notification
pub struct ThemeStore {
    selection: RwLock<ThemeSelection>,
    overrides: RwLock<ThemeOverrides>,
    subscribers: RwLock<FxHashMap<SubscriptionId, Subscriber>>,
    next_id: AtomicU64,
}

impl ThemeStore {
    pub fn new(selection: ThemeSelection) -> Self {
        Self {
            selection: RwLock::new(selection),
            overrides: RwLock::new(ThemeOverrides::default()),
            subscribers: RwLock::new(FxHashMap::default()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Seed the store from a config (defaults fill unset fields)
    pub fn from_config(config: ThemeConfig) -> Self {
        let store = Self::new(config.selection());
        *write(&store.overrides) = config.overrides;
        store
    }

    // ========== Selection ==========

    pub fn get(&self) -> ThemeSelection {
        *read(&self.selection)
    }

    /// Replace the selection; subscribers run only if it changed
    pub fn set(&self, selection: ThemeSelection) {
        self.update(|current| *current = selection);
    }

    /// Edit the selection in place; subscribers run only if it changed
    pub fn update(&self, edit: impl FnOnce(&mut ThemeSelection)) {
        let changed = {
            let mut current = write(&self.selection);
            let before = *current;
            edit(&mut *current);
            (before != *current).then_some(*current)
        };

        if let Some(selection) = changed {
            tracing::debug!(
                family = %selection.color_family,
                mode = %selection.mode,
                direction = %selection.direction,
                "theme selection changed"
            );
            self.notify(&selection);
        }
    }

    pub fn set_color_family(&self, family: ColorFamily) {
        self.update(|s| s.color_family = family);
    }

    pub fn set_mode(&self, mode: BrightnessMode) {
        self.update(|s| s.mode = mode);
    }

    pub fn set_direction(&self, direction: Direction) {
        self.update(|s| s.direction = direction);
    }

    /// Toggle between ltr and rtl
    pub fn toggle_direction(&self) {
        self.update(|s| s.direction = s.direction.toggle());
    }

    // ========== Overrides ==========

    pub fn overrides(&self) -> ThemeOverrides {
        read(&self.overrides).clone()
    }

    /// Replace the overrides; subscribers run only if they changed
    pub fn set_overrides(&self, overrides: ThemeOverrides) {
        let changed = {
            let mut current = write(&self.overrides);
            if *current == overrides {
                false
            } else {
                *current = overrides;
                true
            }
        };

        if changed {
            tracing::debug!("theme overrides changed");
            self.notify(&self.get());
        }
    }

    // ========== Subscriptions ==========

    /// Register a listener called with the new selection after each change
    ///
    /// Listeners run on the thread that made the change, outside the
    /// store's locks, in no particular order.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(&ThemeSelection) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        write(&self.subscribers).insert(id, Arc::new(subscriber));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        write(&self.subscribers).remove(&id).is_some()
    }

    fn notify(&self, selection: &ThemeSelection) {
        let subscribers: Vec<Subscriber> = read(&self.subscribers).values().cloned().collect();
        for subscriber in subscribers {
            subscriber(selection);
        }
    }

    // ========== Derived values ==========

    /// Config for the current selection and overrides
    pub fn config(&self) -> ThemeConfig {
        ThemeConfig::from(self.get()).with_overrides(self.overrides())
    }

    /// Build the theme for the current selection (not cached)
    pub fn theme(&self) -> Theme {
        create_theme(&self.config())
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeSelection::default())
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
