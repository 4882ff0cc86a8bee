//! Canvas surface math.
//!
//! Engines work in CSS pixels. The backing buffer is sized to the element's
//! CSS box times a clamped device pixel ratio, and every frame is drawn under
//! a uniform scale by that ratio.

use crate::constants::{DPR_MAX, DPR_MIN};
use crate::error::SurfaceError;

/// Clamp a raw `devicePixelRatio` into `[1, 2]`; garbage reads as 1.
#[inline]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Logical (CSS) size, clamped DPR and the derived backing-buffer size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceMetrics {
    /// Measure a canvas whose bounding box is `css_width` x `css_height`.
    pub fn measure(css_width: f64, css_height: f64, raw_dpr: f64) -> Result<Self, SurfaceError> {
        if !css_width.is_finite() || !css_height.is_finite() {
            return Err(SurfaceError::NonFiniteSize {
                width: css_width,
                height: css_height,
            });
        }
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        let dpr = clamp_dpr(raw_dpr);
        Ok(Self {
            css_width,
            css_height,
            dpr,
            backing_width: backing_len(css_width, dpr),
            backing_height: backing_len(css_height, dpr),
        })
    }

    /// Area in square CSS pixels.
    #[inline]
    pub fn css_area(&self) -> f64 {
        self.css_width * self.css_height
    }

    /// Resolve a fractional anchor (0..1 on each axis) to CSS pixels.
    #[inline]
    pub fn anchor(&self, fx: f64, fy: f64) -> (f64, f64) {
        (self.css_width * fx, self.css_height * fy)
    }
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            css_width: 0.0,
            css_height: 0.0,
            dpr: DPR_MIN,
            backing_width: 1,
            backing_height: 1,
        }
    }
}

// A zero-size element still gets a 1px buffer so the context stays valid.
#[inline]
fn backing_len(css: f64, dpr: f64) -> u32 {
    ((css * dpr).floor() as u32).max(1)
}
