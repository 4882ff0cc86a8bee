//! One-shot confetti shower shown with the wish reveal.
//!
//! Flakes are released one every 20ms from just above the viewport. Their
//! horizontal position is in viewport percent and the vertical one in pixels,
//! so the host can place them as fixed-position elements without knowing the
//! viewport width.

use rand::prelude::*;
use std::f64::consts::TAU;

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ShowerFlake {
    pub id: usize,
    /// Viewport percent.
    pub x: f64,
    /// Pixels from the top edge.
    pub y: f64,
    /// Degrees.
    pub rot: f64,
    pub color: &'static str,
    angle: f64,
    speed: f64,
    spin: f64,
}

impl ShowerFlake {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, id: usize) -> Self {
        Self {
            id,
            x: rng.gen::<f64>() * 100.0,
            y: SHOWER_START_Y_PX,
            color: SHOWER_PALETTE.choose(rng).copied().unwrap_or("#ffffff"),
            angle: rng.gen::<f64>() * TAU,
            speed: SHOWER_SPEED_MIN + rng.gen::<f64>() * SHOWER_SPEED_SPAN,
            rot: rng.gen::<f64>() * 360.0,
            spin: (rng.gen::<f64>() - 0.5) * SHOWER_SPIN_SPAN_DEG,
        }
    }

    #[inline]
    fn step(&mut self) {
        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed + SHOWER_FALL_PX;
        self.rot += self.spin;
    }
}

/// What happened to the flake population during one [`Shower::step`].
#[derive(Debug, Default)]
pub struct ShowerFrame {
    pub spawned: Vec<usize>,
    pub removed: Vec<usize>,
}

pub struct Shower<R: Rng> {
    rng: R,
    started_ms: f64,
    released: usize,
    flakes: Vec<ShowerFlake>,
}

impl<R: Rng> Shower<R> {
    pub fn new(started_ms: f64, rng: R) -> Self {
        Self {
            rng,
            started_ms,
            released: 0,
            flakes: Vec::with_capacity(SHOWER_FLAKE_COUNT),
        }
    }

    pub fn flakes(&self) -> &[ShowerFlake] {
        &self.flakes
    }

    /// True once every flake has been released and has left the screen.
    pub fn is_finished(&self) -> bool {
        self.released == SHOWER_FLAKE_COUNT && self.flakes.is_empty()
    }

    /// Release flakes due by `now_ms`, move every live flake one frame and
    /// drop the ones that left the viewport.
    pub fn step(&mut self, now_ms: f64, viewport_height: f64) -> ShowerFrame {
        let mut frame = ShowerFrame::default();
        let elapsed = (now_ms - self.started_ms).max(0.0);
        let due = ((elapsed / SHOWER_SPAWN_INTERVAL_MS).floor() as usize + 1).min(SHOWER_FLAKE_COUNT);
        while self.released < due {
            let flake = ShowerFlake::spawn(&mut self.rng, self.released);
            frame.spawned.push(flake.id);
            self.flakes.push(flake);
            self.released += 1;
        }

        let floor = viewport_height + SHOWER_EXIT_MARGIN_PX;
        let ceiling = SHOWER_START_Y_PX - SHOWER_EXIT_MARGIN_PX;
        self.flakes.retain_mut(|f| {
            f.step();
            let on_screen = f.y < floor
                && f.y > ceiling
                && f.x > -SHOWER_SIDE_MARGIN_PCT
                && f.x < 100.0 + SHOWER_SIDE_MARGIN_PCT;
            if on_screen {
                true
            } else {
                frame.removed.push(f.id);
                false
            }
        });
        frame
    }
}
