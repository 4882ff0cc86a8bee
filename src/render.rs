use card_core::{NullPainter, Painter, SurfaceMetrics};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A canvas element, its 2D context (if one could be acquired) and the
/// metrics from the last resize.
pub struct CanvasSurface {
    canvas: Option<web::HtmlCanvasElement>,
    ctx: Option<web::CanvasRenderingContext2d>,
    metrics: SurfaceMetrics,
}

impl CanvasSurface {
    pub fn bind(canvas: Option<web::HtmlCanvasElement>) -> Self {
        let ctx = canvas.as_ref().and_then(|c| {
            c.get_context("2d")
                .ok()
                .flatten()
                .and_then(|o| o.dyn_into::<web::CanvasRenderingContext2d>().ok())
        });
        if ctx.is_none() {
            log::warn!("[surface] no 2d context; drawing disabled");
        }
        let mut surface = Self {
            canvas,
            ctx,
            metrics: SurfaceMetrics::default(),
        };
        surface.resize();
        surface
    }

    /// Re-measure the element and resize the backing buffer, which also clears it.
    pub fn resize(&mut self) -> SurfaceMetrics {
        let Some(canvas) = &self.canvas else {
            return self.metrics;
        };
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let rect = canvas.get_bounding_client_rect();
        match SurfaceMetrics::measure(rect.width(), rect.height(), dpr) {
            Ok(m) => {
                canvas.set_width(m.backing_width);
                canvas.set_height(m.backing_height);
                self.metrics = m;
            }
            Err(e) => log::warn!("[surface] resize skipped: {e}"),
        }
        self.metrics
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    pub fn painter(&self) -> SurfacePainter<'_> {
        match &self.ctx {
            Some(ctx) => SurfacePainter::Canvas(Canvas2dPainter {
                ctx,
                width: self.metrics.backing_width,
                height: self.metrics.backing_height,
                dpr: self.metrics.dpr,
            }),
            None => SurfacePainter::Detached(NullPainter),
        }
    }
}

pub struct Canvas2dPainter<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
    dpr: f64,
}

impl Painter for Canvas2dPainter<'_> {
    fn clear(&mut self) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn set_scale(&mut self, dpr: f64) {
        self.dpr = dpr;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn fill_rotated_rect(&mut self, center: Vec2, rot: f32, w: f32, h: f32, color: &str, alpha: f32) {
        let (w, h) = (w as f64, h as f64);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(color);
        _ = self.ctx.translate(center.x as f64, center.y as f64);
        _ = self.ctx.rotate(rot as f64);
        self.ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn finish(&mut self) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
    }
}

/// Canvas painter, or a no-op one when the context is missing.
pub enum SurfacePainter<'a> {
    Canvas(Canvas2dPainter<'a>),
    Detached(NullPainter),
}

impl Painter for SurfacePainter<'_> {
    fn clear(&mut self) {
        match self {
            Self::Canvas(p) => p.clear(),
            Self::Detached(p) => p.clear(),
        }
    }

    fn set_scale(&mut self, dpr: f64) {
        match self {
            Self::Canvas(p) => p.set_scale(dpr),
            Self::Detached(p) => p.set_scale(dpr),
        }
    }

    fn fill_rotated_rect(&mut self, center: Vec2, rot: f32, w: f32, h: f32, color: &str, alpha: f32) {
        match self {
            Self::Canvas(p) => p.fill_rotated_rect(center, rot, w, h, color, alpha),
            Self::Detached(p) => p.fill_rotated_rect(center, rot, w, h, color, alpha),
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
        match self {
            Self::Canvas(p) => p.fill_circle(x, y, radius, color, alpha),
            Self::Detached(p) => p.fill_circle(x, y, radius, color, alpha),
        }
    }

    fn finish(&mut self) {
        match self {
            Self::Canvas(p) => p.finish(),
            Self::Detached(p) => p.finish(),
        }
    }
}
