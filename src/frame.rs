use crate::core::{FieldConfig, ParticleField, ScheduleSlot};
use crate::dom;
use crate::render::CanvasPainter;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub painter: CanvasPainter,
    pub frame_slot: ScheduleSlot<i32>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.frame(&mut self.painter);
    }
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The running backdrop: a requestAnimationFrame loop plus the resize
/// listener keeping the canvas at viewport size.
pub struct BackgroundLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: FrameClosure,
    resize: Option<Closure<dyn FnMut()>>,
}

impl BackgroundLoop {
    /// Size the canvas, seed the field and start animating. `None` when the
    /// canvas has no 2D context; the page then simply has no backdrop.
    pub fn start(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let Some(painter) = CanvasPainter::for_canvas(canvas) else {
            log::warn!("[backdrop] 2D context unavailable, backdrop disabled");
            return None;
        };
        let bounds = dom::sync_canvas_to_viewport(canvas);
        let field = ParticleField::with_rng(bounds, FieldConfig::default(), StdRng::from_entropy());
        log::info!(
            "[backdrop] particles={} surface={}x{}",
            field.particles().len(),
            bounds.width,
            bounds.height
        );
        let ctx = Rc::new(RefCell::new(FrameContext {
            field,
            painter,
            frame_slot: ScheduleSlot::new(),
        }));

        let resize = wire_resize(canvas, ctx.clone());
        let tick = start_loop(ctx.clone());
        Some(Self {
            ctx,
            tick,
            resize: Some(resize),
        })
    }

    /// Cancel the pending frame and detach the resize listener.
    pub fn stop(&mut self) {
        if let Some(id) = self.ctx.borrow_mut().frame_slot.shutdown() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference.
        self.tick.borrow_mut().take();
        if let Some(resize) = self.resize.take() {
            if let Some(w) = web::window() {
                _ = w.remove_event_listener_with_callback(
                    "resize",
                    resize.as_ref().unchecked_ref(),
                );
            }
        }
        log::info!("[backdrop] stopped");
    }
}

fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: Rc<RefCell<FrameContext>>,
) -> Closure<dyn FnMut()> {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let bounds = dom::sync_canvas_to_viewport(&canvas_resize);
        ctx.borrow_mut().field.resize(bounds);
        log::debug!("[backdrop] resized to {}x{}", bounds.width, bounds.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure
}

fn request_frame(tick: &FrameClosure, ctx: &Rc<RefCell<FrameContext>>) {
    let Some(w) = web::window() else {
        return;
    };
    let id = {
        let tick_ref = tick.borrow();
        let Some(closure) = tick_ref.as_ref() else {
            return;
        };
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => id,
            Err(e) => {
                log::error!("[backdrop] requestAnimationFrame error: {:?}", e);
                return;
            }
        }
    };
    let mut c = ctx.borrow_mut();
    if !c.frame_slot.is_active() {
        _ = w.cancel_animation_frame(id);
        return;
    }
    if let Some(stale) = c.frame_slot.arm(id) {
        _ = w.cancel_animation_frame(stale);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameClosure {
    let tick: FrameClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut c = frame_ctx_tick.borrow_mut();
            c.frame_slot.fired();
            if !c.frame_slot.is_active() {
                return;
            }
            c.frame();
        }
        request_frame(&tick_clone, &frame_ctx_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &frame_ctx);
    tick
}
