//! German translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Matrix Panel");

    // Mode tabs
    m.insert(Key::ModeAnimation, "Animation");
    m.insert(Key::ModeMusic, "Musik");

    // Header actions
    m.insert(Key::ToggleTheme, "Dunkelmodus umschalten");
    m.insert(Key::SwitchLanguage, "Sprache wechseln");

    // Gallery
    m.insert(Key::GalleryEmpty, "Noch keine Animationen auf der Matrix");
    m.insert(Key::UploadAnimation, "Gif hochladen");
    m.insert(Key::Uploading, "Wird hochgeladen");
    m.insert(Key::UploadFinishing, "Warte auf die Matrix");
    m.insert(Key::DeleteAnimation, "Entfernen");

    // Music mode
    m.insert(Key::MusicModeTitle, "Musik");
    m.insert(
        Key::MusicModeHint,
        "Die Matrix reagiert auf die Musik, die sie hört. Hier gibt es nichts einzustellen.",
    );

    // Control bar
    m.insert(Key::CycleDelay, "Wechselintervall");
    m.insert(Key::CycleDelaySuffix, "Sek.");
    m.insert(Key::Play, "Abspielen");
    m.insert(Key::Pause, "Pause");
    m.insert(Key::Next, "Weiter");
    m.insert(Key::Previous, "Zurück");
    m.insert(Key::Syncing, "Wird übertragen");

    // Delete Animation Dialog
    m.insert(Key::DeleteAnimationTitle, "Gif Entfernen");
    m.insert(
        Key::DeleteAnimationConfirm,
        "Soll diese Animation entfernt werden?",
    );

    // Common UI
    m.insert(Key::Loading, "Lädt...");
    m.insert(Key::Cancel, "Abbrechen");
    m.insert(Key::Remove, "Entfernen");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
