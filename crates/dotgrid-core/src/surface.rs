//! Drawing surface seam.
//!
//! The overlay only needs a handful of raster operations. Hosts implement
//! [`Surface`] on whatever they draw into (a 2D canvas context in the browser,
//! a recorder in tests). Coordinates passed to the fill calls are logical
//! units; the surface maps them to device pixels via [`Surface::begin_frame`].

use crate::constants::MIN_DEVICE_PIXEL_RATIO;
use glam::Vec2;

/// Logical (layout) size plus the device pixel ratio it is displayed at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub logical: Vec2,
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        let dpr = if dpr.is_finite() && dpr >= MIN_DEVICE_PIXEL_RATIO {
            dpr
        } else {
            1.0
        };
        Self {
            logical: Vec2::new(width.max(0.0), height.max(0.0)),
            dpr,
        }
    }

    /// Backing buffer size in device pixels.
    #[inline]
    pub fn device_size(&self) -> (u32, u32) {
        let d = (self.logical * self.dpr).round();
        (d.x as u32, d.y as u32)
    }
}

pub trait Surface {
    /// Current backing buffer size in device pixels.
    fn buffer_size(&self) -> (u32, u32);

    /// Resize the backing buffer to match the viewport.
    fn resize(&mut self, viewport: Viewport);

    /// Clear the whole buffer to transparent.
    fn clear(&mut self);

    /// Push the logical-to-device scale for this frame.
    fn begin_frame(&mut self, dpr: f32);

    /// Pop whatever `begin_frame` pushed.
    fn end_frame(&mut self);

    fn set_fill(&mut self, color: &str, alpha: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32);

    fn fill_square(&mut self, center: Vec2, side: f32);

    /// Two centered bars (horizontal and vertical) filled as one path so the
    /// overlap is not painted twice.
    fn fill_cross(&mut self, center: Vec2, length: f32, thickness: f32);

    /// Whether the buffer no longer matches the viewport.
    fn needs_resize(&self, viewport: Viewport) -> bool {
        self.buffer_size() != viewport.device_size()
    }
}
