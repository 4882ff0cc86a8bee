//! Starfield background.
//!
//! Every redraw throws away the previous field and samples a fresh one; the
//! "twinkle" is nothing more than redrawing on a timer. Only the star count is
//! stable, because it depends on the canvas area alone.

use rand::prelude::*;

use crate::constants::*;
use crate::painter::Painter;
use crate::surface::SurfaceMetrics;

#[derive(Clone, Debug)]
pub struct StarfieldParams {
    /// Stars per square CSS pixel.
    pub density: f64,
    pub color: &'static str,
    pub twinkle_interval_ms: u32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            density: STAR_DENSITY,
            color: STAR_COLOR,
            twinkle_interval_ms: STAR_TWINKLE_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Star {
    fn sample<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            size: rng.gen::<f64>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN,
            opacity: rng.gen::<f64>() * STAR_OPACITY_SPAN + STAR_OPACITY_MIN,
        }
    }
}

/// Number of stars for a surface: `floor(area * density)`.
#[inline]
pub fn star_count(metrics: &SurfaceMetrics, density: f64) -> usize {
    (metrics.css_area() * density).floor() as usize
}

pub struct Starfield<R: Rng> {
    metrics: SurfaceMetrics,
    params: StarfieldParams,
    rng: R,
    stars: Vec<Star>,
}

impl<R: Rng> Starfield<R> {
    pub fn new(metrics: SurfaceMetrics, params: StarfieldParams, rng: R) -> Self {
        Self {
            metrics,
            params,
            rng,
            stars: Vec::new(),
        }
    }

    pub fn params(&self) -> &StarfieldParams {
        &self.params
    }

    pub fn metrics(&self) -> &SurfaceMetrics {
        &self.metrics
    }

    /// Stars painted by the most recent redraw.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn count(&self) -> usize {
        star_count(&self.metrics, self.params.density)
    }

    /// Adopt new surface metrics and redraw immediately.
    pub fn resize(&mut self, metrics: SurfaceMetrics, painter: &mut impl Painter) {
        self.metrics = metrics;
        self.redraw(painter);
    }

    /// Resample the whole field and paint it.
    pub fn redraw(&mut self, painter: &mut impl Painter) {
        let count = self.count();
        let (w, h) = (self.metrics.css_width, self.metrics.css_height);
        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            let star = Star::sample(&mut self.rng, w, h);
            self.stars.push(star);
        }

        painter.clear();
        painter.set_scale(self.metrics.dpr);
        for s in &self.stars {
            painter.fill_circle(s.x, s.y, s.size, self.params.color, s.opacity);
        }
        painter.finish();
    }

    /// Periodic shimmer; identical to a full redraw.
    #[inline]
    pub fn twinkle(&mut self, painter: &mut impl Painter) {
        self.redraw(painter);
    }
}
