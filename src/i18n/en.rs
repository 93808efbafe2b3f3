//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Matrix Panel");

    // Mode tabs
    m.insert(Key::ModeAnimation, "Animation");
    m.insert(Key::ModeMusic, "Music");

    // Header actions
    m.insert(Key::ToggleTheme, "Toggle dark mode");
    m.insert(Key::SwitchLanguage, "Switch language");

    // Gallery
    m.insert(Key::GalleryEmpty, "No animations on the matrix yet");
    m.insert(Key::UploadAnimation, "Upload GIF");
    m.insert(Key::Uploading, "Uploading");
    m.insert(Key::UploadFinishing, "Waiting for the matrix");
    m.insert(Key::DeleteAnimation, "Remove");

    // Music mode
    m.insert(Key::MusicModeTitle, "Music");
    m.insert(
        Key::MusicModeHint,
        "The matrix reacts to the audio it hears. There is nothing to configure here.",
    );

    // Control bar
    m.insert(Key::CycleDelay, "Cycle delay");
    m.insert(Key::CycleDelaySuffix, "Sec.");
    m.insert(Key::Play, "Play");
    m.insert(Key::Pause, "Pause");
    m.insert(Key::Next, "Next");
    m.insert(Key::Previous, "Previous");
    m.insert(Key::Syncing, "Syncing");

    // Delete Animation Dialog
    m.insert(Key::DeleteAnimationTitle, "Remove GIF");
    m.insert(
        Key::DeleteAnimationConfirm,
        "Should this animation be removed?",
    );

    // Common UI
    m.insert(Key::Loading, "Loading...");
    m.insert(Key::Cancel, "Cancel");
    m.insert(Key::Remove, "Remove");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
