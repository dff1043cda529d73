//! Blend effect and hover intensities into what gets painted for a cell.

use crate::config::{ColorWeight, DotGridConfig, Shape};
use crate::constants::{GOLDEN_RATIO_FRACTION, VISIBILITY_THRESHOLD};
use crate::surface::Surface;
use glam::Vec2;
use smallvec::SmallVec;

/// Low-discrepancy seed in [0, 1) for a linear cell index.
#[inline]
pub fn golden_seed(index: usize) -> f64 {
    (index as f64 * GOLDEN_RATIO_FRACTION).fract()
}

#[derive(Clone, Debug, PartialEq)]
struct PaletteStop {
    /// Cumulative upper bound in percent.
    upper: f64,
    color: String,
}

/// Cumulative-percent partition built once per configuration.
///
/// Weights are taken as given: a total under 100 leaves residual mass that
/// resolves to the last color, a total over 100 makes trailing colors
/// unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    stops: SmallVec<[PaletteStop; 4]>,
}

impl Palette {
    /// `None` for an empty list; the compositor then uses override colors.
    pub fn from_weights(weights: &[ColorWeight]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }
        let mut cumulative = 0.0f64;
        let stops = weights
            .iter()
            .map(|w| {
                cumulative += w.percent as f64;
                PaletteStop {
                    upper: cumulative,
                    color: w.color.clone(),
                }
            })
            .collect();
        Some(Self { stops })
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color for a seed in [0, 1).
    pub fn pick(&self, seed: f64) -> &str {
        let target = seed * 100.0;
        self.stops
            .iter()
            .find(|s| target < s.upper)
            .or_else(|| self.stops.last())
            .map(|s| s.color.as_str())
            .unwrap_or_default()
    }

    #[inline]
    pub fn color_for_index(&self, index: usize) -> &str {
        self.pick(golden_seed(index))
    }
}

/// Resolved paint for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle<'a> {
    pub scale: f32,
    pub opacity: f32,
    pub color: &'a str,
}

/// `1 + i * (max - 1)` scale and `base + (max - base) * i` opacity.
#[inline]
pub fn lerp_scale_opacity(
    intensity: f32,
    max_scale: f32,
    base_opacity: f32,
    max_opacity: f32,
) -> (f32, f32) {
    (
        1.0 + intensity * (max_scale - 1.0),
        base_opacity + (max_opacity - base_opacity) * intensity,
    )
}

/// Per-configuration blending rules.
#[derive(Clone, Copy, Debug)]
pub struct Compositor<'a> {
    cfg: &'a DotGridConfig,
    palette: Option<&'a Palette>,
}

impl<'a> Compositor<'a> {
    pub fn new(cfg: &'a DotGridConfig, palette: Option<&'a Palette>) -> Self {
        let palette = if cfg.multi_color { palette } else { None };
        Self { cfg, palette }
    }

    /// `None` when the cell is below the visibility threshold and should not
    /// be drawn at all.
    pub fn resolve(&self, index: usize, effect: f32, hover: f32) -> Option<DotStyle<'a>> {
        let effect = effect.clamp(0.0, 1.0);
        let hover = hover.clamp(0.0, 1.0);
        if effect <= VISIBILITY_THRESHOLD && hover <= VISIBILITY_THRESHOLD {
            return None;
        }
        let cfg = self.cfg;
        let (effect_scale, effect_opacity) =
            lerp_scale_opacity(effect, cfg.effect_max_scale, cfg.opacity, cfg.effect_max_opacity);
        let (hover_scale, hover_opacity) = lerp_scale_opacity(
            hover,
            cfg.hover_target_scale,
            cfg.opacity,
            cfg.hover_target_opacity,
        );

        let color = match self.palette {
            Some(palette) => palette.color_for_index(index),
            None if hover > effect => cfg.hover_color(),
            None => cfg.effect_color(),
        };

        Some(DotStyle {
            scale: effect_scale.max(hover_scale).max(1.0),
            opacity: effect_opacity.max(hover_opacity).clamp(0.0, 1.0),
            color,
        })
    }
}

/// Paint the configured shape at `style.scale` centered on `pos`.
pub fn draw_dot<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &DotGridConfig,
    pos: Vec2,
    style: &DotStyle,
) {
    surface.set_fill(style.color, style.opacity);
    let size = cfg.cr * 2.0 * style.scale;
    match cfg.shape {
        Shape::Circle => surface.fill_circle(pos, cfg.cr * style.scale),
        Shape::Square => surface.fill_square(pos, size),
        Shape::Cross => surface.fill_cross(pos, size, cfg.stroke_width() * style.scale),
    }
}
