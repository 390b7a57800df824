#![cfg(target_arch = "wasm32")]
use crate::core::{TypingConfig, TypingSession};
use std::cell::RefCell;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod feedback;
mod frame;
mod render;
mod theme;
mod typing;

/// Long-lived engines owned by the page.
#[derive(Default)]
struct App {
    backdrop: Option<frame::BackgroundLoop>,
    hero: Option<typing::TypingEffect>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    theme::wire_theme_toggle(&document);
    contact::wire_contact_form(&document);

    let mut app = App::default();
    app.backdrop = match document.get_element_by_id(constants::CANVAS_ID) {
        Some(el) => {
            let canvas: web::HtmlCanvasElement = el
                .dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            frame::BackgroundLoop::start(&canvas)
        }
        None => {
            log::warn!("missing #{}, backdrop disabled", constants::CANVAS_ID);
            None
        }
    };
    app.hero = document
        .get_element_by_id(constants::TYPED_ROLE_ID)
        .map(|target| {
            let session = TypingSession::new(constants::HERO_ROLES, TypingConfig::looping());
            typing::TypingEffect::start(target, session)
        });

    APP.with(|slot| {
        if let Some(mut old) = slot.borrow_mut().replace(app) {
            old.stop();
        }
    });
    Ok(())
}

impl App {
    fn stop(&mut self) {
        if let Some(mut b) = self.backdrop.take() {
            b.stop();
        }
        if let Some(h) = self.hero.take() {
            h.stop();
        }
    }
}

/// Replace the hero's rotating roles; progress is kept where it still fits.
#[wasm_bindgen]
pub fn set_hero_roles(roles: Vec<String>) {
    APP.with(|slot| {
        if let Some(hero) = slot.borrow().as_ref().and_then(|a| a.hero.as_ref()) {
            hero.set_texts(roles);
        }
    });
}

/// Retune the hero typing effect (milliseconds).
#[wasm_bindgen]
pub fn set_hero_timing(typing_ms: u32, deleting_ms: u32, pause_ms: u32, looping: bool) {
    let config = TypingConfig {
        typing_speed: Duration::from_millis(typing_ms as u64),
        deleting_speed: Duration::from_millis(deleting_ms as u64),
        pause: Duration::from_millis(pause_ms as u64),
        looping,
    };
    APP.with(|slot| {
        if let Some(hero) = slot.borrow().as_ref().and_then(|a| a.hero.as_ref()) {
            hero.reconfigure(config);
        }
    });
}

/// Tear down the backdrop loop and typing timer.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        if let Some(mut app) = slot.borrow_mut().take() {
            app.stop();
        }
    });
}
