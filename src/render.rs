use crate::constants::{LINK_RGB, LINK_WIDTH, STAR_FILL};
use crate::core::Painter;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` backed by the canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Acquire the 2D context; `None` if the canvas refuses one.
    pub fn for_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        match canvas.get_context("2d") {
            Ok(Some(obj)) => obj
                .dyn_into::<web::CanvasRenderingContext2d>()
                .ok()
                .map(Self::new),
            Ok(None) => None,
            Err(e) => {
                log::error!("[render] getContext(2d) error: {:?}", e);
                None
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], alpha: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(STAR_FILL);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        let (r, g, b) = LINK_RGB;
        self.ctx
            .set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
        self.ctx.set_line_width(LINK_WIDTH);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
