//! Per-instance render state and the per-frame cell pass.

use crate::compositor::{draw_dot, Compositor, Palette};
use crate::config::DotGridConfig;
use crate::effects::EffectFrame;
use crate::grid::{cells_in_view, GridDims, GridSpec};
use crate::pointer::PointerTracker;
use crate::surface::{Surface, Viewport};
use crate::trail::{proximity, TrailField};
use glam::Vec2;

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub visited: usize,
    pub drawn: usize,
    pub resized: bool,
}

/// Everything one dot grid owns between frames: configuration, pointer
/// sample, trail field, animation clock and the last applied viewport.
#[derive(Debug)]
pub struct RenderSession {
    config: DotGridConfig,
    palette: Option<Palette>,
    pointer: PointerTracker,
    trail: Option<TrailField>,
    start_ms: f64,
    last_ms: f64,
    viewport: Option<Viewport>,
}

impl RenderSession {
    pub fn new(config: DotGridConfig, now_ms: f64) -> Self {
        let config = config.sanitized();
        let palette = Palette::from_weights(&config.multi_colors);
        let trail = config.hover_trail.then(TrailField::default);
        Self {
            config,
            palette,
            pointer: PointerTracker::new(),
            trail,
            start_ms: now_ms,
            last_ms: now_ms,
            viewport: None,
        }
    }

    pub fn config(&self) -> &DotGridConfig {
        &self.config
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn trail(&self) -> Option<&TrailField> {
        self.trail.as_ref()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Swap in a new configuration. The clock restarts; pointer state and a
    /// still-enabled trail survive.
    pub fn set_config(&mut self, config: DotGridConfig, now_ms: f64) {
        let config = config.sanitized();
        self.palette = Palette::from_weights(&config.multi_colors);
        if !config.hover_trail {
            self.trail = None;
        } else if self.trail.is_none() {
            self.trail = Some(TrailField::default());
        }
        self.config = config;
        self.restart_clock(now_ms);
    }

    pub fn restart_clock(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.last_ms = now_ms;
    }

    /// Record a pointer sample. Ignored while hover is disabled.
    #[inline]
    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64) {
        if self.config.hover {
            self.pointer.on_move(pos, now_ms);
        }
    }

    #[inline]
    pub fn pointer_leave(&mut self) {
        self.pointer.on_leave();
    }

    /// Seconds since the clock started; frozen at 0 while the effect is paused.
    pub fn elapsed_sec(&self, now_ms: f64) -> f64 {
        if self.config.effect_playing {
            ((now_ms - self.start_ms) / 1000.0).max(0.0)
        } else {
            0.0
        }
    }

    /// Resize if the viewport changed, then clear and repaint every visible
    /// cell that clears the visibility threshold.
    pub fn render_frame<S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        viewport: Viewport,
        surface: &mut S,
    ) -> FrameStats {
        let dt_sec = (((now_ms - self.last_ms) / 1000.0).max(0.0)) as f32;
        self.last_ms = now_ms;

        let mut stats = FrameStats::default();
        if self.viewport != Some(viewport) || surface.needs_resize(viewport) {
            surface.resize(viewport);
            if let Some(trail) = self.trail.as_mut() {
                trail.reset();
            }
            self.viewport = Some(viewport);
            stats.resized = true;
            log::debug!(
                "[frame] resized to {}x{} @{}",
                viewport.logical.x,
                viewport.logical.y,
                viewport.dpr
            );
        }

        surface.clear();
        surface.begin_frame(viewport.dpr);

        let cfg = &self.config;
        let size = viewport.logical;
        let spec = GridSpec {
            spacing: cfg.spacing(),
            origin: cfg.origin(),
            mode: cfg.mode,
        };
        let dims = GridDims::for_surface(size, spec.spacing);
        if let Some(trail) = self.trail.as_mut() {
            trail.ensure_len(dims.len());
        }

        let effects = EffectFrame::new(cfg, size, self.elapsed_sec(now_ms));
        let compositor = Compositor::new(cfg, self.palette.as_ref());
        let pointer_pos = self.pointer.position();
        let speed_factor = self.pointer.speed_factor_at(now_ms);

        for cell in cells_in_view(size, spec) {
            stats.visited += 1;
            let effect = effects.intensity(&cell);
            let hover = if cfg.hover {
                let near = proximity(cell.pos.distance(pointer_pos), cfg.hover_radius);
                match self.trail.as_mut() {
                    Some(trail) => trail.update(
                        cell.index,
                        dt_sec,
                        cfg.hover_trail_duration,
                        near,
                        speed_factor,
                    ),
                    None => near,
                }
            } else {
                0.0
            };
            if let Some(style) = compositor.resolve(cell.index, effect, hover) {
                draw_dot(surface, cfg, cell.pos, &style);
                stats.drawn += 1;
            }
        }

        surface.end_frame();
        log::trace!("[frame] visited={} drawn={}", stats.visited, stats.drawn);
        stats
    }
}
