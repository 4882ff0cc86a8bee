// Host-side tests for the confetti engine, driven by a fake frame scheduler.

mod common;

use card_core::*;
use common::{Cmd, FakeFrames, RecordingPainter};
use glam::Vec2;
use rand::{rngs::StdRng, SeedableRng};

fn system(width: f64, height: f64, dpr: f64, seed: u64) -> ParticleSystem<StdRng> {
    let metrics = SurfaceMetrics::measure(width, height, dpr).unwrap();
    ParticleSystem::new(metrics, ConfettiParams::default(), StdRng::seed_from_u64(seed))
}

/// Run queued frames until the loop stops; returns the number of ticks.
fn run_to_completion(sys: &mut ParticleSystem<StdRng>, frames: &mut FakeFrames) -> usize {
    let mut painter = NullPainter;
    let mut ticks = 0;
    while frames.take() {
        sys.tick(&mut painter, frames);
        ticks += 1;
        assert!(ticks < 10_000, "loop never stopped");
    }
    ticks
}

#[test]
fn burst_adds_exactly_amount_before_first_tick() {
    for amount in [0usize, 1, 7, CONFETTI_DEFAULT_AMOUNT, 500] {
        let mut sys = system(800.0, 600.0, 1.0, 3);
        let mut frames = FakeFrames::default();
        sys.burst(400.0, 200.0, amount, &mut frames);
        assert_eq!(sys.len(), amount);
        sys.burst(100.0, 100.0, amount, &mut frames);
        assert_eq!(sys.len(), amount * 2);
    }
}

#[test]
fn burst_samples_stay_in_range() {
    let mut sys = system(800.0, 600.0, 1.0, 11);
    let mut frames = FakeFrames::default();
    sys.burst(320.0, 210.0, 2000, &mut frames);
    for p in sys.particles() {
        assert_eq!((p.pos.x, p.pos.y), (320.0, 210.0));
        assert_eq!(p.life, 0);
        assert!((90..160).contains(&p.ttl), "ttl {}", p.ttl);
        assert!(p.g >= 0.14 && p.g < 0.26 + 1e-6, "g {}", p.g);
        assert!(p.w >= 4.0 * 0.7 - 1e-4 && p.w <= 11.0 * 1.6, "w {}", p.w);
        assert!(p.h >= 4.0 * 0.9 - 1e-4 && p.h <= 11.0 * 2.2, "h {}", p.h);
        assert!(p.vr.abs() <= 0.175 + 1e-6);
        assert!(p.rot >= 0.0 && p.rot < std::f32::consts::PI + 1e-6);
        assert!(CONFETTI_PALETTE.contains(&p.color));
        // speed <= 9.2 plus up to 5.0 of extra lift
        let speed = p.vel.length();
        assert!(speed < 9.2 + 5.0 + 1e-3, "speed {speed}");
    }
    let rising = sys.particles().iter().filter(|p| p.vel.y < 0.0).count();
    assert!(rising > sys.len() / 2, "fountain should mostly launch upward");
}

#[test]
fn launch_speed_and_lift_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(21);
    let (mut min_speed, mut max_speed) = (f32::MAX, f32::MIN);
    let (mut min_lift, mut max_lift) = (f32::MAX, f32::MIN);
    for _ in 0..5000 {
        let l = Launch::sample(&mut rng);
        assert!(l.angle >= 0.0 && l.angle <= std::f32::consts::TAU, "angle {}", l.angle);
        assert!(l.speed >= 2.2 && l.speed <= 9.2 + 1e-5, "speed {}", l.speed);
        assert!(l.lift >= 1.8 && l.lift <= 5.0 + 1e-5, "lift {}", l.lift);

        // undoing the lift recovers the sampled speed
        let v = l.velocity() + Vec2::new(0.0, l.lift);
        assert!((v.length() - l.speed).abs() < 1e-4);

        min_speed = min_speed.min(l.speed);
        max_speed = max_speed.max(l.speed);
        min_lift = min_lift.min(l.lift);
        max_lift = max_lift.max(l.lift);
    }
    // the draws use most of each range, not a sliver of it
    assert!(min_speed < 2.5 && max_speed > 8.9, "speed {min_speed}..{max_speed}");
    assert!(min_lift < 2.0 && max_lift > 4.8, "lift {min_lift}..{max_lift}");
}

#[test]
fn repeated_bursts_share_one_loop() {
    let mut sys = system(800.0, 600.0, 2.0, 5);
    let mut frames = FakeFrames::default();
    assert!(!sys.is_running());
    sys.burst(400.0, 200.0, 50, &mut frames);
    sys.burst(300.0, 250.0, 50, &mut frames);
    sys.burst(500.0, 150.0, 50, &mut frames);
    assert!(sys.is_running());
    assert_eq!(frames.requested, 1);
    assert!(!sys.ensure_running(&mut frames));
    assert_eq!(frames.requested, 1);
}

#[test]
fn each_tick_requests_at_most_one_frame() {
    let mut sys = system(800.0, 600.0, 1.0, 8);
    let mut frames = FakeFrames::default();
    let mut painter = NullPainter;
    sys.burst(400.0, 300.0, 80, &mut frames);
    while frames.take() {
        assert_eq!(frames.requested, 0);
        sys.tick(&mut painter, &mut frames);
        if sys.is_empty() {
            assert_eq!(frames.requested, 0);
            assert!(!sys.is_running());
        } else {
            assert_eq!(frames.requested, 1);
            assert!(sys.is_running());
        }
    }
}

#[test]
fn loop_stops_when_empty_and_restarts_on_next_burst() {
    let mut sys = system(800.0, 600.0, 1.0, 21);
    let mut frames = FakeFrames::default();
    sys.burst(400.0, 300.0, 120, &mut frames);
    let ticks = run_to_completion(&mut sys, &mut frames);
    assert!(ticks <= 160, "ticks {ticks}");
    assert!(sys.is_empty());
    assert!(!sys.is_running());

    sys.burst(200.0, 100.0, 10, &mut frames);
    assert!(sys.is_running());
    assert_eq!(frames.requested, 1);
    run_to_completion(&mut sys, &mut frames);
    assert!(!sys.is_running());
}

#[test]
fn empty_burst_runs_a_single_frame() {
    let mut sys = system(800.0, 600.0, 1.0, 2);
    let mut frames = FakeFrames::default();
    sys.burst(0.0, 0.0, 0, &mut frames);
    assert_eq!(run_to_completion(&mut sys, &mut frames), 1);
}

#[test]
fn tick_without_a_scheduled_frame_is_inert() {
    let mut sys = system(800.0, 600.0, 1.0, 2);
    let mut frames = FakeFrames::default();
    let mut painter = RecordingPainter::default();
    sys.tick(&mut painter, &mut frames);
    assert!(painter.cmds.is_empty());
    assert_eq!(frames.requested, 0);
}

#[test]
fn life_advances_in_lockstep_and_never_passes_ttl() {
    let mut sys = system(10_000.0, 10_000.0, 1.0, 17);
    let mut frames = FakeFrames::default();
    let mut painter = RecordingPainter::default();
    sys.burst(5000.0, 5000.0, 200, &mut frames);
    let mut tick = 0u32;
    while frames.take() {
        painter.cmds.clear();
        sys.tick(&mut painter, &mut frames);
        tick += 1;
        for p in sys.particles() {
            assert_eq!(p.life, tick);
            assert!(p.life < p.ttl);
        }
        // nothing can be culled on this canvas, so every survivor was drawn once
        assert_eq!(painter.rects(), sys.len());
    }
}

#[test]
fn faded_particles_are_not_drawn() {
    let mut sys = system(10_000.0, 10_000.0, 1.0, 29);
    let mut frames = FakeFrames::default();
    let mut painter = RecordingPainter::default();
    sys.burst(5000.0, 5000.0, 150, &mut frames);
    while frames.take() {
        sys.tick(&mut painter, &mut frames);
    }
    for c in &painter.cmds {
        if let Cmd::Rect { alpha, .. } = c {
            assert!(*alpha > 0.0 && *alpha <= 1.0);
        }
    }
}

#[test]
fn frame_clears_then_scales_by_clamped_dpr() {
    let mut sys = system(640.0, 480.0, 3.0, 4);
    let mut frames = FakeFrames::default();
    let mut painter = RecordingPainter::default();
    sys.burst(320.0, 240.0, 5, &mut frames);
    sys.tick(&mut painter, &mut frames);
    assert_eq!(painter.cmds[0], Cmd::Clear);
    assert_eq!(painter.cmds[1], Cmd::Scale(2.0));
    assert_eq!(painter.cmds.last(), Some(&Cmd::Finish));
    assert_eq!(painter.rects(), 5);
}

#[test]
fn particles_below_view_but_inside_margin_are_kept() {
    // Tiny canvas: particles fall far below it quickly but start inside the side margins.
    let mut sys = system(10.0, 10.0, 1.0, 9);
    let mut frames = FakeFrames::default();
    let mut painter = NullPainter;
    sys.burst(5.0, 5.0, 100, &mut frames);
    for _ in 0..40 {
        assert!(frames.take());
        sys.tick(&mut painter, &mut frames);
    }
    let inside_margin_below = sys
        .particles()
        .iter()
        .filter(|p| p.pos.y > 90.0 && p.pos.x > -120.0 && p.pos.x < 130.0)
        .count();
    assert!(inside_margin_below > 0);
    for p in sys.particles() {
        assert!(!(p.pos.y >= 90.0 && (p.pos.x <= -120.0 || p.pos.x >= 130.0)));
    }
}

#[test]
fn resize_updates_metrics() {
    let mut sys = system(800.0, 600.0, 1.0, 1);
    sys.resize(SurfaceMetrics::measure(1024.0, 768.0, 1.5).unwrap());
    assert_eq!(sys.metrics().css_width, 1024.0);
    assert_eq!(sys.metrics().dpr, 1.5);
}

#[test]
fn celebration_plan_matches_choreography() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..200 {
        let plan = celebration_plan(&mut rng);
        let [lead, second, third] = plan;
        assert_eq!((lead.delay_ms, lead.amount), (0, 170));
        assert!(lead.anchor[0] >= 0.25 && lead.anchor[0] < 0.75);
        assert!(lead.anchor[1] >= 0.22 && lead.anchor[1] < 0.47);
        assert_eq!(second, PlannedBurst { delay_ms: 140, anchor: [0.5, 0.2], amount: 120 });
        assert_eq!(third, PlannedBurst { delay_ms: 240, anchor: [0.75, 0.32], amount: 130 });
    }
}
