use crate::core::{timer_millis, ScheduleSlot, TypingConfig, TypingSession};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct TypingState {
    session: TypingSession,
    slot: ScheduleSlot<i32>,
    target: web::Element,
}

impl TypingState {
    fn render(&self) {
        self.target.set_text_content(Some(self.session.revealed()));
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives a `TypingSession` with `setTimeout`, writing the revealed prefix
/// into `target`. Each tick is scheduled only after the previous one ran.
pub struct TypingEffect {
    state: Rc<RefCell<TypingState>>,
    tick: TickClosure,
}

impl TypingEffect {
    pub fn start(target: web::Element, session: TypingSession) -> Self {
        let first = session.initial_delay();
        let state = Rc::new(RefCell::new(TypingState {
            session,
            slot: ScheduleSlot::new(),
            target,
        }));
        state.borrow().render();

        let tick: TickClosure = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let state_tick = state.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let next = {
                let mut s = state_tick.borrow_mut();
                s.slot.fired();
                let next = s.session.tick();
                s.render();
                next
            };
            match next {
                Some(delay) => arm(&state_tick, &tick_clone, delay),
                None => log::debug!("[typing] finished"),
            }
        }) as Box<dyn FnMut()>));

        arm(&state, &tick, first);
        Self { state, tick }
    }

    /// Apply new timing settings. The pending tick is cancelled and a fresh
    /// one armed so no timer outlives the configuration it was set up with.
    pub fn reconfigure(&self, config: TypingConfig) {
        self.cancel_pending();
        let delay = {
            let mut s = self.state.borrow_mut();
            s.session.set_config(config);
            s.render();
            (!s.session.is_finished()).then(|| s.session.initial_delay())
        };
        if let Some(delay) = delay {
            arm(&self.state, &self.tick, delay);
        }
    }

    pub fn set_texts<I, S>(&self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cancel_pending();
        let delay = {
            let mut s = self.state.borrow_mut();
            s.session.set_texts(texts);
            s.render();
            (!s.session.is_finished()).then(|| s.session.initial_delay())
        };
        if let Some(delay) = delay {
            arm(&self.state, &self.tick, delay);
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.state.borrow_mut().slot.shutdown() {
            clear_timeout(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[typing] stopped");
    }

    fn cancel_pending(&self) {
        if let Some(id) = self.state.borrow_mut().slot.take() {
            clear_timeout(id);
        }
    }
}

fn clear_timeout(id: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(id);
    }
}

fn arm(state: &Rc<RefCell<TypingState>>, tick: &TickClosure, delay: Duration) {
    if !state.borrow().slot.is_active() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    let id = {
        let tick_ref = tick.borrow();
        let Some(closure) = tick_ref.as_ref() else {
            return;
        };
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timer_millis(delay),
        ) {
            Ok(id) => id,
            Err(e) => {
                log::error!("[typing] setTimeout error: {:?}", e);
                return;
            }
        }
    };
    if let Some(stale) = state.borrow_mut().slot.arm(id) {
        w.clear_timeout_with_handle(stale);
    }
}
