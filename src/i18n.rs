//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - de.rs: German translations

mod de;
mod en;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Supported languages, stored in settings by their code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::German]
    }

    /// The language after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Mode tabs
    ModeAnimation,
    ModeMusic,

    // Header actions
    ToggleTheme,
    SwitchLanguage,

    // Gallery
    GalleryEmpty,
    UploadAnimation,
    Uploading,
    UploadFinishing,
    DeleteAnimation,

    // Music mode
    MusicModeTitle,
    MusicModeHint,

    // Control bar
    CycleDelay,
    CycleDelaySuffix,
    Play,
    Pause,
    Next,
    Previous,
    Syncing,

    // Delete Animation Dialog
    DeleteAnimationTitle,
    DeleteAnimationConfirm,

    // Common UI
    Loading,
    Cancel,
    Remove,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::German => de::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::ModeAnimation,
        Key::ModeMusic,
        Key::ToggleTheme,
        Key::SwitchLanguage,
        Key::GalleryEmpty,
        Key::UploadAnimation,
        Key::Uploading,
        Key::UploadFinishing,
        Key::DeleteAnimation,
        Key::MusicModeTitle,
        Key::MusicModeHint,
        Key::CycleDelay,
        Key::CycleDelaySuffix,
        Key::Play,
        Key::Pause,
        Key::Next,
        Key::Previous,
        Key::Syncing,
        Key::DeleteAnimationTitle,
        Key::DeleteAnimationConfirm,
        Key::Loading,
        Key::Cancel,
        Key::Remove,
    ];

    #[test]
    fn test_every_key_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_delete_dialog_strings() {
        let de = Locale::new(Language::German);
        assert_eq!(de.get(Key::DeleteAnimationTitle), "Gif Entfernen");
        assert_eq!(de.get(Key::Cancel), "Abbrechen");
        assert_eq!(de.get(Key::Remove), "Entfernen");
    }

    #[test]
    fn test_language_cycle() {
        assert_eq!(Language::English.next(), Language::German);
        assert_eq!(Language::German.next(), Language::English);
    }
}
