//! Time-driven effect evaluators: glow, scan and pulse.
//!
//! Each evaluator maps a cell and the elapsed time to an intensity in [0, 1].
//! Scan and pulse share an eased cycle fraction that restarts every
//! `effectDuration` seconds; glow is a continuous oscillator with a per-cell
//! phase derived from a hash of (row, col).

use crate::config::{DotGridConfig, Effect};
use crate::constants::{GLOW_HASH_COL, GLOW_HASH_ROW, GLOW_HASH_SCALE};
use crate::easing::Ease;
use crate::grid::Cell;
use glam::Vec2;
use std::f32::consts::TAU;

/// Seconds into the current cycle. The reduction happens in f64 so the
/// result keeps frame resolution after days of uptime.
#[inline]
pub fn cycle_time(elapsed_sec: f64, duration_sec: f32) -> f32 {
    elapsed_sec.rem_euclid(duration_sec as f64) as f32
}

/// Cycle fraction `(elapsed mod duration) / duration`, in [0, 1).
#[inline]
pub fn cycle_progress(elapsed_sec: f64, duration_sec: f32) -> f32 {
    (cycle_time(elapsed_sec, duration_sec) / duration_sec).clamp(0.0, 1.0)
}

/// Stable pseudo-random phase in [0, 2π) for a cell.
#[inline]
pub fn glow_phase(row: usize, col: usize) -> f32 {
    let h = ((row as f64 * GLOW_HASH_ROW + col as f64 * GLOW_HASH_COL).sin() * GLOW_HASH_SCALE)
        .abs()
        .fract();
    h as f32 * TAU
}

/// `cycle_sec` is the time into the current cycle; glow repeats every
/// duration so the reduced time gives the same angle.
#[inline]
pub fn glow(row: usize, col: usize, cycle_sec: f32, duration_sec: f32) -> f32 {
    let angle = TAU * cycle_sec / duration_sec + glow_phase(row, col);
    ((angle.sin() + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Band center for an eased progress: travels from `-size` to `width + size`.
#[inline]
pub fn scan_band_center(eased: f32, surface_width: f32, size: f32) -> f32 {
    eased * (surface_width + size * 2.0) - size
}

#[inline]
pub fn scan(x: f32, band_center: f32, size: f32) -> f32 {
    band_falloff((x - band_center).abs(), size)
}

/// Distance from the surface center to a corner.
#[inline]
pub fn max_corner_distance(surface: Vec2) -> f32 {
    (surface * 0.5).length()
}

#[inline]
pub fn pulse_ring_radius(eased: f32, surface: Vec2) -> f32 {
    eased * max_corner_distance(surface)
}

#[inline]
pub fn pulse(pos: Vec2, center: Vec2, ring_radius: f32, ring_width: f32) -> f32 {
    band_falloff((pos.distance(center) - ring_radius).abs(), ring_width)
}

#[inline]
fn band_falloff(dist: f32, width: f32) -> f32 {
    if dist < width {
        let k = 1.0 - dist / width;
        (k * k).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Per-frame effect parameters, computed once and shared by every cell.
#[derive(Clone, Copy, Debug)]
pub struct EffectFrame {
    pub effect: Effect,
    /// Elapsed time reduced modulo the duration.
    pub cycle_sec: f32,
    pub duration_sec: f32,
    pub size: f32,
    pub eased: f32,
    pub band_center: f32,
    pub ring_center: Vec2,
    pub ring_radius: f32,
}

impl EffectFrame {
    pub fn new(cfg: &DotGridConfig, surface: Vec2, elapsed_sec: f64) -> Self {
        Self::with_ease(
            cfg.effect,
            cfg.effect_ease,
            cfg.effect_duration,
            cfg.effect_size,
            surface,
            elapsed_sec,
        )
    }

    pub fn with_ease(
        effect: Effect,
        ease: Ease,
        duration_sec: f32,
        size: f32,
        surface: Vec2,
        elapsed_sec: f64,
    ) -> Self {
        let cycle_sec = cycle_time(elapsed_sec, duration_sec);
        let eased = ease.apply((cycle_sec / duration_sec).clamp(0.0, 1.0));
        Self {
            effect,
            cycle_sec,
            duration_sec,
            size,
            eased,
            band_center: scan_band_center(eased, surface.x, size),
            ring_center: surface * 0.5,
            ring_radius: pulse_ring_radius(eased, surface),
        }
    }

    pub fn intensity(&self, cell: &Cell) -> f32 {
        match self.effect {
            Effect::None => 0.0,
            Effect::Glow => glow(cell.row, cell.col, self.cycle_sec, self.duration_sec),
            Effect::Scan => scan(cell.pos.x, self.band_center, self.size),
            Effect::Pulse => pulse(cell.pos, self.ring_center, self.ring_radius, self.size),
        }
    }
}
