use serde::{Deserialize, Serialize};

use crate::constants::{CAROUSEL_SEEN_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::store::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Unknown stored values fall back to the dark default.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .map(|value| Theme::from_str_lossy(&value))
        .unwrap_or_default()
}

pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) {
    if let Err(e) = store.set(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("failed to persist theme: {e}");
    }
}

/// Flips the stored theme and returns the new value.
pub fn toggle_theme(store: &mut impl KeyValueStore) -> Theme {
    let theme = load_theme(store).toggle();
    save_theme(store, theme);
    theme
}

/// Whether the intro carousel was already dismissed once.
pub fn carousel_seen(store: &impl KeyValueStore) -> bool {
    store.get(CAROUSEL_SEEN_STORAGE_KEY).is_some()
}

pub fn mark_carousel_seen(store: &mut impl KeyValueStore) {
    if let Err(e) = store.set(CAROUSEL_SEEN_STORAGE_KEY, "true") {
        log::warn!("failed to persist carousel flag: {e}");
    }
}
