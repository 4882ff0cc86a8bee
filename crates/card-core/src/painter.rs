//! Drawing and scheduling seams between the engines and the host.

use glam::Vec2;

/// Minimal 2D command set the engines draw with.
///
/// Coordinates passed to the shape commands are CSS pixels; implementations
/// map them to device pixels through the scale set by [`Painter::set_scale`].
pub trait Painter {
    /// Clear the whole backing buffer, ignoring any current transform.
    fn clear(&mut self);
    /// Reset the transform to a uniform scale by `dpr`.
    fn set_scale(&mut self, dpr: f64);
    /// Fill a `w` x `h` rectangle centered on `center`, rotated by `rot` radians.
    fn fill_rotated_rect(&mut self, center: Vec2, rot: f32, w: f32, h: f32, color: &str, alpha: f32);
    /// Fill a circle of `radius` centered on (`x`, `y`).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64);
    /// Restore identity transform and full opacity.
    fn finish(&mut self) {}
}

/// Painter used when no drawing context could be acquired.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPainter;

impl Painter for NullPainter {
    fn clear(&mut self) {}
    fn set_scale(&mut self, _dpr: f64) {}
    fn fill_rotated_rect(&mut self, _: Vec2, _: f32, _: f32, _: f32, _: &str, _: f32) {}
    fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: &str, _: f64) {}
}

/// Something that can arrange for one more animation frame.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}
