//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: preferences change on user choice, the
//! locale on language toggles.

use gpui::{App, AppContext, Entity, Global};

use crate::i18n::Locale;
use crate::state::i18n_state::I18nState;
use crate::state::preferences::Preferences;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted user preferences
    pub preferences: Entity<Preferences>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from loaded preferences
    pub fn init(preferences: Preferences, cx: &mut App) -> Self {
        let locale = Locale::from_code(preferences.locale());
        Self {
            preferences: cx.new(|_| preferences),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
