//! Markup for the resting layer underneath the overlay.
//!
//! The resting grid never animates, so it is expressed once per configuration
//! as an SVG pattern fill (plus an optional radial fade mask) and handed to
//! the host to mount. The overlay canvas gets an equivalent CSS mask so both
//! layers fade together.

use crate::config::{DotGridConfig, FadeLevel, LayoutMode, Shape};
use smallvec::SmallVec;
use std::fmt::Write;

/// One gradient stop of the fade mask: offset in percent, mask opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeStop {
    pub offset_pct: f32,
    pub opacity: f32,
}

/// Gradient stops for a fade level; reversing swaps visible and hidden.
pub fn fade_stops(level: FadeLevel, reverse: bool) -> SmallVec<[FadeStop; 4]> {
    let visible: &[f32] = match level {
        FadeLevel::Weak => &[0.0, 70.0],
        FadeLevel::Medium => &[0.0, 50.0],
        FadeLevel::Strong => &[0.0, 30.0],
    };
    let hidden: &[f32] = match level {
        FadeLevel::Weak => &[100.0],
        FadeLevel::Medium => &[90.0, 100.0],
        FadeLevel::Strong => &[70.0, 100.0],
    };
    let (on, off) = if reverse { (0.0, 1.0) } else { (1.0, 0.0) };
    visible
        .iter()
        .map(|&offset_pct| FadeStop {
            offset_pct,
            opacity: on,
        })
        .chain(hidden.iter().map(|&offset_pct| FadeStop {
            offset_pct,
            opacity: off,
        }))
        .collect()
}

/// CSS `mask-image` value for the overlay canvas, `None` without fade.
pub fn overlay_mask_css(cfg: &DotGridConfig) -> Option<String> {
    if !cfg.fade {
        return None;
    }
    let (extent, inner_pct) = match cfg.fade_level {
        FadeLevel::Weak => ("farthest-corner", 70),
        FadeLevel::Medium => ("farthest-side", 50),
        FadeLevel::Strong => ("closest-side", 30),
    };
    let (center, edge) = if cfg.fade_reverse {
        ("transparent", "black")
    } else {
        ("black", "transparent")
    };
    Some(format!(
        "radial-gradient(circle {extent} at 50% 50%, {center} 0%, {center} {inner_pct}%, {edge} 100%)"
    ))
}

/// Full `<svg>` element for the resting grid. `id` must be unique per
/// document; it prefixes the pattern, gradient and mask ids.
pub fn pattern_svg(cfg: &DotGridConfig, id: &str) -> String {
    let id = escape_attr(id);
    let mut out = String::with_capacity(1024);
    out.push_str(
        "<svg aria-hidden=\"true\" xmlns=\"http://www.w3.org/2000/svg\" \
         style=\"pointer-events:none;position:absolute;inset:0;width:100%;height:100%\">",
    );
    out.push_str("<defs>");
    _ = write!(
        out,
        "<pattern id=\"{id}\" width=\"{}\" height=\"{}\" patternUnits=\"userSpaceOnUse\" \
         patternContentUnits=\"userSpaceOnUse\" x=\"{}\" y=\"{}\">",
        cfg.width, cfg.height, cfg.x, cfg.y
    );
    write_shape(&mut out, cfg, 0.0, 0.0);
    if cfg.mode == LayoutMode::Staggered {
        write_shape(&mut out, cfg, cfg.width / 2.0, cfg.height / 2.0);
    }
    out.push_str("</pattern>");

    if cfg.fade {
        _ = write!(
            out,
            "<radialGradient id=\"{id}-gradient\" cx=\"50%\" cy=\"50%\" r=\"70%\">"
        );
        for stop in fade_stops(cfg.fade_level, cfg.fade_reverse) {
            _ = write!(
                out,
                "<stop offset=\"{}%\" stop-color=\"white\" stop-opacity=\"{}\"/>",
                stop.offset_pct, stop.opacity
            );
        }
        out.push_str("</radialGradient>");
        _ = write!(
            out,
            "<mask id=\"{id}-mask\"><rect width=\"100%\" height=\"100%\" fill=\"url(#{id}-gradient)\"/></mask>"
        );
    }
    out.push_str("</defs>");

    _ = write!(
        out,
        "<rect width=\"100%\" height=\"100%\" stroke-width=\"0\" fill=\"url(#{id})\""
    );
    if cfg.fade {
        _ = write!(out, " mask=\"url(#{id}-mask)\"");
    }
    out.push_str("/></svg>");
    out
}

fn write_shape(out: &mut String, cfg: &DotGridConfig, ox: f32, oy: f32) {
    let color = escape_attr(&cfg.color);
    let (cx, cy, cr) = (cfg.cx + ox, cfg.cy + oy, cfg.cr);
    match cfg.shape {
        Shape::Square => {
            _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{color}\" fill-opacity=\"{}\"/>",
                cx - cr,
                cy - cr,
                cr * 2.0,
                cr * 2.0,
                cfg.opacity
            );
        }
        Shape::Cross => {
            let sw = cfg.stroke_width();
            _ = write!(out, "<g stroke=\"{color}\" stroke-opacity=\"{}\">", cfg.opacity);
            for (x1, y1, x2, y2) in [(cx - cr, cy, cx + cr, cy), (cx, cy - cr, cx, cy + cr)] {
                _ = write!(
                    out,
                    "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke-linecap=\"round\" \
                     stroke-width=\"{sw}\" vector-effect=\"non-scaling-stroke\"/>"
                );
            }
            out.push_str("</g>");
        }
        Shape::Circle => {
            _ = write!(
                out,
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{cr}\" fill=\"{color}\" fill-opacity=\"{}\"/>",
                cfg.opacity
            );
        }
    }
}

/// Escape a value for use inside a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
