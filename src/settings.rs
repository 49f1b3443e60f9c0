use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Process-wide theme and language store. Created once in `App` and handed
/// to every theme/language-capable component as an explicit parameter -
/// reads subscribe through the underlying signals, writes notify all
/// subscribers. Persistence of the theme flag is wired up by `App`, not
/// here.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    theme: RwSignal<Theme>,
    language: RwSignal<Language>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            language: RwSignal::new(Language::default()),
        }
    }

    /// Reactive read - subscribes the caller.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    /// Reactive read - subscribes the caller.
    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    pub fn toggle_language(&self) {
        self.language.update(|l| *l = l.toggled());
    }

    /// Shorthand for the active translation table.
    pub fn strings(&self) -> &'static crate::i18n::Strings {
        self.language().strings()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
