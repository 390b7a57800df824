use crate::constants::{DARK_CLASS, THEME_ICON_DARK, THEME_ICON_LIGHT, THEME_TOGGLE_ID};
use crate::core::{Theme, THEME_STORAGE_KEY};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load() -> Theme {
    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn store(theme: Theme) {
    match storage() {
        Some(s) => {
            if let Err(e) = s.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                log::warn!("[theme] could not persist preference: {:?}", e);
            }
        }
        None => log::warn!("[theme] localStorage unavailable"),
    }
}

/// Reflect `theme` on `<html>` and the toggle button, then persist it.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        dom::set_class(&root, DARK_CLASS, theme.is_dark());
    }
    let icon = if theme.is_dark() {
        THEME_ICON_DARK
    } else {
        THEME_ICON_LIGHT
    };
    dom::set_text(document, THEME_TOGGLE_ID, icon);
    store(theme);
}

pub fn wire_theme_toggle(document: &web::Document) {
    let current = Rc::new(Cell::new(load()));
    apply(document, current.get());
    log::info!("[theme] initial={}", current.get().as_str());

    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = current.get().toggled();
        current.set(next);
        apply(&doc, next);
        log::debug!("[theme] toggled to {}", next.as_str());
    });
}
