//! Configuration surface for a dot grid instance.
//!
//! Every option is independently defaulted so hosts can pass a sparse object
//! (`{"effect": "scan", "effectPlaying": true}`) and get a complete config.
//! Numeric guards live in [`DotGridConfig::sanitized`]; nothing downstream
//! re-checks durations or radii for zero.

use crate::constants::{MIN_DURATION_SEC, MIN_EFFECT_SIZE, MIN_RADIUS, MIN_SPACING};
use crate::easing::Ease;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid dot grid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Cross,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Orthogonal,
    Staggered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    #[default]
    None,
    Glow,
    Scan,
    Pulse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeLevel {
    #[default]
    Weak,
    Medium,
    Strong,
}

/// One entry of the multi-color palette. `percent` is a share of the unit
/// interval expressed in percent; entries are not renormalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorWeight {
    pub color: String,
    pub percent: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotGridConfig {
    // geometry
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub cx: f32,
    pub cy: f32,
    pub cr: f32,
    pub shape: Shape,
    pub stroke_width: Option<f32>,
    pub mode: LayoutMode,

    // resting appearance
    pub color: String,
    pub opacity: f32,
    pub fade: bool,
    pub fade_level: FadeLevel,
    pub fade_reverse: bool,

    // animated effect
    pub effect: Effect,
    pub effect_playing: bool,
    pub effect_ease: Ease,
    pub effect_max_scale: f32,
    pub effect_max_opacity: f32,
    pub effect_color: Option<String>,
    pub effect_size: f32,
    pub effect_duration: f32,

    pub multi_color: bool,
    pub multi_colors: Vec<ColorWeight>,

    // pointer interaction
    pub hover: bool,
    pub hover_radius: f32,
    pub hover_target_scale: f32,
    pub hover_target_opacity: f32,
    pub hover_color: Option<String>,
    pub hover_trail: bool,
    pub hover_trail_duration: f32,
}

impl Default for DotGridConfig {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 16.0,
            x: 0.0,
            y: 0.0,
            cx: 1.0,
            cy: 1.0,
            cr: 1.0,
            shape: Shape::Circle,
            stroke_width: None,
            mode: LayoutMode::Orthogonal,
            color: "#000000".to_string(),
            opacity: 0.05,
            fade: false,
            fade_level: FadeLevel::Weak,
            fade_reverse: false,
            effect: Effect::None,
            effect_playing: false,
            effect_ease: Ease::Linear,
            effect_max_scale: 1.8,
            effect_max_opacity: 0.8,
            effect_color: None,
            effect_size: 150.0,
            effect_duration: 1.0,
            multi_color: false,
            multi_colors: Vec::new(),
            hover: false,
            hover_radius: 120.0,
            hover_target_scale: 1.8,
            hover_target_opacity: 0.8,
            hover_color: None,
            hover_trail: false,
            hover_trail_duration: 1.0,
        }
    }
}

impl DotGridConfig {
    /// Parse a (possibly sparse) JSON object and sanitize it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: DotGridConfig = serde_json::from_str(json)?;
        Ok(cfg.sanitized())
    }

    /// Raise divisors to their minimums so no frame can produce NaN.
    pub fn sanitized(mut self) -> Self {
        guard(&mut self.width, MIN_SPACING, "width");
        guard(&mut self.height, MIN_SPACING, "height");
        guard(&mut self.effect_duration, MIN_DURATION_SEC, "effectDuration");
        guard(&mut self.hover_trail_duration, MIN_DURATION_SEC, "hoverTrailDuration");
        guard(&mut self.hover_radius, MIN_RADIUS, "hoverRadius");
        guard(&mut self.effect_size, MIN_EFFECT_SIZE, "effectSize");
        self
    }

    #[inline]
    pub fn spacing(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Offset of the first cell center from the surface origin.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x + self.cx, self.y + self.cy)
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width.unwrap_or(1.0)
    }

    #[inline]
    pub fn effect_color(&self) -> &str {
        self.effect_color.as_deref().unwrap_or(&self.color)
    }

    #[inline]
    pub fn hover_color(&self) -> &str {
        self.hover_color.as_deref().unwrap_or(&self.color)
    }

    /// Whether the overlay canvas has anything to draw at all.
    #[inline]
    pub fn needs_overlay(&self) -> bool {
        self.effect != Effect::None || self.hover
    }

    /// Whether frames must keep coming after the first one.
    #[inline]
    pub fn animates(&self) -> bool {
        (self.effect != Effect::None && self.effect_playing) || self.hover
    }
}

fn guard(value: &mut f32, min: f32, name: &str) {
    if value.is_nan() || *value < min {
        log::warn!("[config] {} = {} below minimum, using {}", name, value, min);
        *value = min;
    }
}
