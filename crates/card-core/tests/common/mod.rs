// Test doubles for the drawing and scheduling seams.

#![allow(dead_code)]
use card_core::{FrameScheduler, Painter};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Clear,
    Scale(f64),
    Rect { center: Vec2, alpha: f32, color: String },
    Circle { x: f64, y: f64, r: f64, alpha: f64 },
    Finish,
}

#[derive(Default)]
pub struct RecordingPainter {
    pub cmds: Vec<Cmd>,
}

impl RecordingPainter {
    pub fn rects(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, Cmd::Rect { .. })).count()
    }

    pub fn circles(&self) -> Vec<(f64, f64, f64, f64)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Circle { x, y, r, alpha } => Some((*x, *y, *r, *alpha)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self) {
        self.cmds.push(Cmd::Clear);
    }
    fn set_scale(&mut self, dpr: f64) {
        self.cmds.push(Cmd::Scale(dpr));
    }
    fn fill_rotated_rect(&mut self, center: Vec2, _rot: f32, _w: f32, _h: f32, color: &str, alpha: f32) {
        self.cmds.push(Cmd::Rect {
            center,
            alpha,
            color: color.to_string(),
        });
    }
    fn fill_circle(&mut self, x: f64, y: f64, r: f64, _color: &str, alpha: f64) {
        self.cmds.push(Cmd::Circle { x, y, r, alpha });
    }
    fn finish(&mut self) {
        self.cmds.push(Cmd::Finish);
    }
}

/// Stands in for requestAnimationFrame: counts requests, runs nothing.
#[derive(Default)]
pub struct FakeFrames {
    pub requested: usize,
}

impl FakeFrames {
    /// Consume one pending frame, returning whether there was one.
    pub fn take(&mut self) -> bool {
        if self.requested > 0 {
            self.requested -= 1;
            true
        } else {
            false
        }
    }
}

impl FrameScheduler for FakeFrames {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}
