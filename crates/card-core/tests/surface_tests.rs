// Host-side tests for canvas surface sizing.

use card_core::*;

#[test]
fn clamp_dpr_bounds_and_fallbacks() {
    assert_eq!(clamp_dpr(1.0), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(2.0), 2.0);
    assert_eq!(clamp_dpr(3.0), 2.0);
    assert_eq!(clamp_dpr(0.5), 1.0);
    assert_eq!(clamp_dpr(0.0), 1.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
    assert_eq!(clamp_dpr(f64::INFINITY), 1.0);
}

#[test]
fn backing_size_is_floor_of_css_times_clamped_dpr() {
    let sizes = [(800.0, 600.0), (375.0, 667.0), (333.3, 211.7), (1.2, 0.7)];
    for (w, h) in sizes {
        for dpr in [1.0, 1.5, 2.0, 3.0] {
            let m = SurfaceMetrics::measure(w, h, dpr).unwrap();
            let eff = dpr.min(2.0);
            assert_eq!(m.dpr, eff);
            assert_eq!(m.backing_width, ((w * eff).floor() as u32).max(1));
            assert_eq!(m.backing_height, ((h * eff).floor() as u32).max(1));
            assert_eq!((m.css_width, m.css_height), (w, h));
        }
    }
}

#[test]
fn specific_backing_sizes() {
    let m = SurfaceMetrics::measure(375.0, 667.0, 1.5).unwrap();
    assert_eq!((m.backing_width, m.backing_height), (562, 1000));
    let m = SurfaceMetrics::measure(375.0, 667.0, 3.0).unwrap();
    assert_eq!((m.backing_width, m.backing_height), (750, 1334));
}

#[test]
fn zero_size_gets_a_single_pixel() {
    let m = SurfaceMetrics::measure(0.0, 0.0, 2.0).unwrap();
    assert_eq!((m.backing_width, m.backing_height), (1, 1));
    assert_eq!(m.css_area(), 0.0);
}

#[test]
fn non_finite_size_is_rejected() {
    let err = SurfaceMetrics::measure(f64::NAN, 10.0, 1.0).unwrap_err();
    assert!(matches!(err, SurfaceError::NonFiniteSize { .. }));
}

#[test]
fn anchor_resolves_fractions_in_css_pixels() {
    let m = SurfaceMetrics::measure(800.0, 600.0, 2.0).unwrap();
    assert_eq!(m.anchor(0.5, 0.25), (400.0, 150.0));
}
