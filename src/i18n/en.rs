//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Cooking Quest");
    m.insert(Key::AppCaption, "Cooking Quest App");

    // Summary
    m.insert(Key::SummaryHealthy, "Healthy");

    // Description
    m.insert(Key::ViewDetails, "View details");

    // Detail page
    m.insert(Key::DetailBack, "Back");
    m.insert(Key::DetailComingSoon, "Step-by-step instructions are on their way.");

    // Startup
    m.insert(Key::Loading, "Loading recipes...");
    m.insert(Key::LoadFailedTitle, "Could not load recipes");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
