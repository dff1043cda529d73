// Host-side tests for the glow, scan and pulse evaluators.

use dotgrid_core::effects::{
    cycle_progress, cycle_time, glow, glow_phase, max_corner_distance, pulse, pulse_ring_radius,
    scan, scan_band_center,
};
use dotgrid_core::*;
use glam::Vec2;
use std::f32::consts::TAU;

fn cell(row: usize, col: usize, pos: Vec2) -> Cell {
    Cell {
        row,
        col,
        index: row * 100 + col,
        pos,
    }
}

#[test]
fn cycle_progress_wraps_each_duration() {
    assert!((cycle_progress(2.5, 1.0) - 0.5).abs() < 1e-6);
    assert!((cycle_progress(1.0, 2.0) - 0.5).abs() < 1e-6);
    assert!(cycle_progress(3.0, 1.5).abs() < 1e-6);
    assert!(cycle_progress(0.0, 1.0).abs() < 1e-6);
}

#[test]
fn glow_phase_is_stable_and_in_range() {
    for row in 0..20 {
        for col in 0..20 {
            let a = glow_phase(row, col);
            assert_eq!(a, glow_phase(row, col));
            assert!((0.0..TAU).contains(&a) || (a - TAU).abs() < 1e-5);
        }
    }
}

#[test]
fn glow_phases_differ_between_cells() {
    let first = glow_phase(0, 1);
    let distinct = (0..10)
        .flat_map(|r| (0..10).map(move |c| (r, c)))
        .filter(|&(r, c)| (glow_phase(r, c) - first).abs() > 1e-3)
        .count();
    assert!(distinct > 50);
}

#[test]
fn glow_repeats_every_duration() {
    let d = 2.0;
    for (row, col) in [(0, 0), (3, 7), (12, 5)] {
        let a = glow(row, col, 0.3, d);
        let b = glow(row, col, 0.3 + d, d);
        assert!((a - b).abs() < 1e-4);
        assert!((0.0..=1.0).contains(&a));
    }
}

#[test]
fn scan_band_travels_linearly_past_both_edges() {
    let (width, size) = (400.0, 100.0);
    assert!((scan_band_center(0.0, width, size) + 100.0).abs() < 1e-4);
    assert!((scan_band_center(0.5, width, size) - 200.0).abs() < 1e-4);
    assert!((scan_band_center(1.0, width, size) - 500.0).abs() < 1e-4);

    let surface = Vec2::new(width, 300.0);
    let f = EffectFrame::with_ease(Effect::Scan, Ease::Linear, 1.0, size, surface, 0.25);
    assert!((f.band_center - 50.0).abs() < 1e-3);
}

#[test]
fn scan_peaks_at_the_band_center() {
    assert_eq!(scan(200.0, 200.0, 100.0), 1.0);
    assert!((scan(250.0, 200.0, 100.0) - 0.25).abs() < 1e-6);
    assert!((scan(150.0, 200.0, 100.0) - 0.25).abs() < 1e-6);
    assert_eq!(scan(300.0, 200.0, 100.0), 0.0);
    assert_eq!(scan(-50.0, 200.0, 100.0), 0.0);
}

#[test]
fn pulse_ring_reaches_the_corners() {
    let surface = Vec2::new(400.0, 400.0);
    assert!((max_corner_distance(surface) - 282.842_7).abs() < 1e-2);
    assert!((pulse_ring_radius(0.5, surface) - 141.421_36).abs() < 1e-2);
    assert!((pulse_ring_radius(1.0, surface) - max_corner_distance(surface)).abs() < 1e-4);
}

#[test]
fn pulse_halfway_through_a_cycle() {
    let surface = Vec2::new(400.0, 400.0);
    let f = EffectFrame::with_ease(Effect::Pulse, Ease::Linear, 2.0, 100.0, surface, 1.0);
    assert!((f.ring_radius - 141.42).abs() < 0.01);
    assert_eq!(f.ring_center, Vec2::new(200.0, 200.0));

    let center = cell(10, 10, Vec2::new(200.0, 200.0));
    assert_eq!(f.intensity(&center), 0.0);

    let on_ring = cell(15, 15, Vec2::new(300.0, 300.0));
    assert!(f.intensity(&on_ring) > 0.999);

    let inside = cell(12, 12, Vec2::new(200.0 + 141.42 - 50.0, 200.0));
    assert!((f.intensity(&inside) - 0.25).abs() < 1e-3);
    assert_eq!(pulse(Vec2::ZERO, Vec2::ZERO, 141.42, 100.0), 0.0);
}

#[test]
fn none_is_always_zero() {
    let surface = Vec2::splat(300.0);
    let f = EffectFrame::with_ease(Effect::None, Ease::Linear, 1.0, 100.0, surface, 0.4);
    assert_eq!(f.intensity(&cell(3, 3, Vec2::splat(150.0))), 0.0);
}

#[test]
fn every_effect_stays_in_unit_range() {
    let surface = Vec2::new(320.0, 240.0);
    let spec = GridSpec {
        spacing: Vec2::splat(16.0),
        origin: Vec2::ONE,
        mode: LayoutMode::Staggered,
    };
    for effect in [Effect::Glow, Effect::Scan, Effect::Pulse] {
        for ease_kind in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            for step in 0..24 {
                let t = step as f64 * 0.173;
                let f = EffectFrame::with_ease(effect, ease_kind, 1.3, 80.0, surface, t);
                for c in cells_in_view(surface, spec) {
                    let v = f.intensity(&c);
                    assert!((0.0..=1.0).contains(&v), "{effect:?} {ease_kind:?} t={t}: {v}");
                }
            }
        }
    }
}

#[test]
fn frame_built_from_config_uses_its_timing() {
    let cfg = DotGridConfig {
        effect: Effect::Scan,
        effect_playing: true,
        effect_ease: Ease::EaseIn,
        effect_duration: 2.0,
        effect_size: 50.0,
        ..DotGridConfig::default()
    };
    let f = EffectFrame::new(&cfg, Vec2::new(200.0, 100.0), 1.0);
    assert!((f.eased - 0.125).abs() < 1e-6);
    assert!((f.band_center - (0.125 * 300.0 - 50.0)).abs() < 1e-3);
}

#[test]
fn scan_band_moves_evenly_after_a_week_of_uptime() {
    const WEEK_SEC: f64 = 7.0 * 24.0 * 3600.0;
    const FRAME_SEC: f64 = 0.016_667;
    let surface = Vec2::new(1000.0, 200.0);
    let centers: Vec<f32> = (0..6)
        .map(|k| {
            let t = WEEK_SEC + 0.25 + k as f64 * FRAME_SEC;
            let frame = EffectFrame::with_ease(Effect::Scan, Ease::Linear, 1.0, 100.0, surface, t);
            frame.band_center
        })
        .collect();
    // Travel is width + 2 * size = 1200 per second.
    for pair in centers.windows(2) {
        let step = pair[1] - pair[0];
        assert!((step - 20.0).abs() < 0.05, "uneven step {step} in {centers:?}");
    }
}

#[test]
fn cycle_time_keeps_frame_resolution_at_large_elapsed() {
    let base = 30.0 * 24.0 * 3600.0;
    let a = cycle_time(base + 0.5, 2.0);
    let b = cycle_time(base + 0.5 + 0.016, 2.0);
    assert!((a - 0.5).abs() < 1e-4);
    assert!((b - a - 0.016).abs() < 1e-4);
}

#[test]
fn glow_uses_the_reduced_cycle_time() {
    let d: f32 = 1.5;
    let surface = Vec2::splat(100.0);
    let fresh = EffectFrame::with_ease(Effect::Glow, Ease::Linear, d, 50.0, surface, 0.4);
    let late_t = 0.4 + 1_000_000.0 * d as f64;
    let late = EffectFrame::with_ease(Effect::Glow, Ease::Linear, d, 50.0, surface, late_t);
    let c = cell(4, 9, Vec2::new(30.0, 40.0));
    assert!((fresh.intensity(&c) - late.intensity(&c)).abs() < 1e-3);
}
