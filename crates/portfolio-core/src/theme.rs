//! Theme selection with a persisted preference.
//!
//! Storage is a capability: anything implementing [`PreferenceStore`].
//! When the store is missing or refuses a read/write the controller keeps
//! working from memory and starts from [`DEFAULT_THEME`].

use crate::constants::THEME_STORAGE_KEY;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: char,
}

pub const THEMES: &[Theme] = &[
    Theme { id: "minimal", name: "Minimal", icon: '.' },
    Theme { id: "terminal", name: "Terminal", icon: '>' },
    Theme { id: "amber", name: "Amber", icon: '*' },
    Theme { id: "paper", name: "Paper", icon: '#' },
    Theme { id: "blueprint", name: "Blueprint", icon: '+' },
    Theme { id: "vhs", name: "VHS", icon: '~' },
    Theme { id: "midnight", name: "Midnight", icon: '-' },
];

pub const DEFAULT_THEME: &str = "minimal";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    WriteRejected(String),
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used by tests and as a stand-in when nothing durable exists.
#[derive(Default, Debug)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// How a theme change should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Immediate,
    /// Fade an overlay in, swap after `swap_after_ms`, fade out `hide_after_ms` later.
    Overlay { swap_after_ms: i32, hide_after_ms: i32 },
}

impl Transition {
    pub fn plan(animate: bool, reduced_motion: bool, has_overlay: bool, fade_ms: i32) -> Self {
        if animate && !reduced_motion && has_overlay {
            Transition::Overlay {
                swap_after_ms: fade_ms,
                hide_after_ms: fade_ms,
            }
        } else {
            Transition::Immediate
        }
    }
}

pub fn theme_index(id: &str) -> Option<usize> {
    THEMES.iter().position(|t| t.id == id)
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    index: usize,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store, index: 0 }
    }

    pub fn themes(&self) -> &'static [Theme] {
        THEMES
    }

    pub fn current(&self) -> Theme {
        THEMES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved preference, or the default when absent or unreadable.
    pub fn saved(&self) -> String {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(id)) if !id.is_empty() => id,
            Ok(_) => DEFAULT_THEME.to_string(),
            Err(e) => {
                log::debug!("[theme] {e}, using {DEFAULT_THEME}");
                DEFAULT_THEME.to_string()
            }
        }
    }

    pub fn load(&mut self) -> Theme {
        let id = self.saved();
        self.apply(&id)
    }

    pub fn next(&mut self) -> Theme {
        let next = (self.index + 1) % THEMES.len();
        self.apply(THEMES[next].id)
    }

    pub fn set(&mut self, id: &str) -> Theme {
        self.apply(id)
    }

    /// Uppercased display name, as shown on the switcher buttons.
    pub fn button_label(&self) -> String {
        self.current().name.to_uppercase()
    }

    fn apply(&mut self, id: &str) -> Theme {
        self.index = match theme_index(id) {
            Some(i) => i,
            None => {
                log::warn!("[theme] unknown theme {id:?}, falling back to {DEFAULT_THEME}");
                0
            }
        };
        let theme = self.current();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme.id) {
            log::debug!("[theme] could not persist {}: {e}", theme.id);
        }
        theme
    }
}

/// `t`/`T` cycles themes unless the user is typing into a form field.
pub fn is_theme_shortcut(key: &str, target_tag: Option<&str>) -> bool {
    let typing = matches!(target_tag, Some(tag) if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea"));
    !typing && (key == "t" || key == "T")
}
