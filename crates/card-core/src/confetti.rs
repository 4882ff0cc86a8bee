//! Confetti burst engine.
//!
//! Particles are launched in bursts, fall under a per-particle gravity, fade
//! out over the last quarter of their lifetime and are repainted from scratch
//! every frame. The engine owns a `running` flag that mirrors "a frame is
//! scheduled": [`ParticleSystem::ensure_running`] is the only way a loop
//! starts, and [`ParticleSystem::tick`] either schedules exactly one more
//! frame or stops the loop once nothing is left alive.

use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::constants::*;
use crate::painter::{FrameScheduler, Painter};
use crate::surface::SurfaceMetrics;

#[derive(Clone, Debug)]
pub struct ConfettiParams {
    pub palette: &'static [&'static str],
    /// Per-frame velocity multipliers (air drag).
    pub drag: Vec2,
    /// Fraction of `ttl` after which alpha ramps down to zero.
    pub fade_start: f32,
    pub cull_below_px: f32,
    pub cull_side_px: f32,
}

impl Default for ConfettiParams {
    fn default() -> Self {
        Self {
            palette: &CONFETTI_PALETTE,
            drag: Vec2::new(CONFETTI_DRAG_X, CONFETTI_DRAG_Y),
            fade_start: CONFETTI_FADE_START,
            cull_below_px: CONFETTI_CULL_BELOW_PX,
            cull_side_px: CONFETTI_CULL_SIDE_PX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Added to `vel.y` every frame.
    pub g: f32,
    pub rot: f32,
    pub vr: f32,
    pub w: f32,
    pub h: f32,
    pub color: &'static str,
    pub ttl: u32,
    pub life: u32,
}

/// Launch draw for one particle: a direction and speed, biased upward by `lift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub angle: f32,
    pub speed: f32,
    pub lift: f32,
}

impl Launch {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            angle: rng.gen::<f32>() * TAU,
            speed: CONFETTI_SPEED_MIN + rng.gen::<f32>() * CONFETTI_SPEED_SPAN,
            lift: CONFETTI_LIFT_MIN + rng.gen::<f32>() * CONFETTI_LIFT_SPAN,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(
            self.angle.cos() * self.speed,
            self.angle.sin() * self.speed - self.lift,
        )
    }
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, origin: Vec2, palette: &'static [&'static str]) -> Self {
        let launch = Launch::sample(rng);
        let size = CONFETTI_SIZE_MIN + rng.gen::<f32>() * CONFETTI_SIZE_SPAN;
        Self {
            pos: origin,
            vel: launch.velocity(),
            g: CONFETTI_GRAVITY_MIN + rng.gen::<f32>() * CONFETTI_GRAVITY_SPAN,
            rot: rng.gen::<f32>() * PI,
            vr: (rng.gen::<f32>() - 0.5) * CONFETTI_SPIN_SPAN,
            w: size * (0.7 + rng.gen::<f32>() * 0.9),
            h: size * (0.9 + rng.gen::<f32>() * 1.3),
            color: palette.choose(rng).copied().unwrap_or("#ffffff"),
            ttl: CONFETTI_TTL_MIN + rng.gen_range(0..CONFETTI_TTL_SPAN),
            life: 0,
        }
    }

    /// Advance one frame of motion.
    #[inline]
    pub fn step(&mut self, drag: Vec2) {
        self.life += 1;
        self.vel.y += self.g;
        self.pos += self.vel;
        self.rot += self.vr;
        self.vel *= drag;
    }

    #[inline]
    pub fn alpha(&self, fade_start: f32) -> f32 {
        fade_alpha(self.life, self.ttl, fade_start)
    }

    /// Off-screen test: far below the viewport *and* outside the side margins.
    #[inline]
    pub fn is_culled(&self, width: f32, height: f32, below: f32, side: f32) -> bool {
        let fell_out = self.pos.y >= height + below;
        let beside = self.pos.x <= -side || self.pos.x >= width + side;
        fell_out && beside
    }
}

/// Opacity for a particle `life` frames into a `ttl`-frame lifetime.
#[inline]
pub fn fade_alpha(life: u32, ttl: u32, fade_start: f32) -> f32 {
    let t = life as f32 / ttl.max(1) as f32;
    if t < fade_start {
        1.0
    } else {
        (1.0 - (t - fade_start) / (1.0 - fade_start)).max(0.0)
    }
}

pub struct ParticleSystem<R: Rng> {
    particles: Vec<Particle>,
    running: bool,
    metrics: SurfaceMetrics,
    params: ConfettiParams,
    rng: R,
}

impl<R: Rng> ParticleSystem<R> {
    pub fn new(metrics: SurfaceMetrics, params: ConfettiParams, rng: R) -> Self {
        Self {
            particles: Vec::new(),
            running: false,
            metrics,
            params,
            rng,
        }
    }

    pub fn resize(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
    }

    pub fn metrics(&self) -> &SurfaceMetrics {
        &self.metrics
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Launch `amount` particles from (`x`, `y`) in CSS pixels.
    pub fn burst(&mut self, x: f64, y: f64, amount: usize, scheduler: &mut impl FrameScheduler) {
        let origin = Vec2::new(x as f32, y as f32);
        self.particles.reserve(amount);
        for _ in 0..amount {
            let p = Particle::spawn(&mut self.rng, origin, self.params.palette);
            self.particles.push(p);
        }
        log::debug!("[confetti] burst {} at ({:.0},{:.0}), live={}", amount, x, y, self.particles.len());
        self.ensure_running(scheduler);
    }

    /// Schedule the first frame unless a loop is already pending.
    /// Returns true if this call started the loop.
    pub fn ensure_running(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        scheduler.request_frame();
        true
    }

    /// One animation frame: integrate, prune, repaint, reschedule or stop.
    pub fn tick(&mut self, painter: &mut impl Painter, scheduler: &mut impl FrameScheduler) {
        if !self.running {
            return;
        }
        let width = self.metrics.css_width as f32;
        let height = self.metrics.css_height as f32;
        let params = &self.params;

        painter.clear();
        painter.set_scale(self.metrics.dpr);
        self.particles.retain_mut(|p| {
            p.step(params.drag);
            let alpha = p.alpha(params.fade_start);
            if alpha <= 0.0 {
                return false;
            }
            painter.fill_rotated_rect(p.pos, p.rot, p.w, p.h, p.color, alpha);
            !p.is_culled(width, height, params.cull_below_px, params.cull_side_px)
        });
        painter.finish();

        if self.particles.is_empty() {
            self.running = false;
            log::debug!("[confetti] loop stopped");
        } else {
            scheduler.request_frame();
        }
    }
}

/// A burst whose position is a fraction of the surface, resolved when it fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedBurst {
    pub delay_ms: i32,
    pub anchor: [f64; 2],
    pub amount: usize,
}

/// The three-shot "celebrate" volley: a randomly placed lead burst, then two
/// fixed follow-ups.
pub fn celebration_plan<R: Rng + ?Sized>(rng: &mut R) -> [PlannedBurst; 3] {
    let lead = [0.25 + rng.gen::<f64>() * 0.5, 0.22 + rng.gen::<f64>() * 0.25];
    [
        PlannedBurst { delay_ms: 0, anchor: lead, amount: 170 },
        PlannedBurst { delay_ms: 140, anchor: [0.5, 0.2], amount: 120 },
        PlannedBurst { delay_ms: 240, anchor: [0.75, 0.32], amount: 130 },
    ]
}
