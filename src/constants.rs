// DOM-side constants for the web frontend.

// Element id prefix; a per-instance counter is appended so several grids can
// share a document without their SVG pattern ids colliding.
pub const ID_PREFIX: &str = "dotgrid";

// Both layers cover the container and never take pointer input themselves.
pub const LAYER_STYLE: &str =
    "pointer-events:none;position:absolute;inset:0;width:100%;height:100%";

pub const STATIC_LAYER_CLASS: &str = "dotgrid-static";
pub const OVERLAY_CLASS: &str = "dotgrid-overlay";

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
