// Host-side tests for the stored theme preference.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod theme {
    include!("../src/core/theme.rs");
}

use theme::*;

#[test]
fn missing_or_unknown_preference_is_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn light_is_only_selected_explicitly() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_string_round_trips() {
    for t in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_stored(Some(t.as_str())), t);
    }
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

#[test]
fn toggle_flips_and_is_an_involution() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}
