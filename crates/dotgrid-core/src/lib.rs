//! Platform-independent core of the dotgrid background: grid sampling,
//! effect evaluation, pointer trail state, compositing and frame driving.
//!
//! Nothing here touches browser APIs. Hosts plug in a [`Surface`] to draw on
//! and a [`FrameScheduler`] to drive frames.

pub mod compositor;
pub mod config;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod effects;
pub mod grid;
pub mod pointer;
pub mod session;
pub mod static_layer;
pub mod surface;
pub mod trail;

pub use compositor::{draw_dot, golden_seed, Compositor, DotStyle, Palette};
pub use config::*;
pub use constants::*;
pub use driver::{DriverState, FrameDriver, FrameScheduler, FrameToken};
pub use easing::{ease, Ease};
pub use effects::EffectFrame;
pub use grid::{cells_in_view, Cell, CellIter, GridDims, GridSpec};
pub use pointer::{PointerState, PointerTracker};
pub use session::{FrameStats, RenderSession};
pub use surface::{Surface, Viewport};
pub use trail::{proximity, TrailField};
