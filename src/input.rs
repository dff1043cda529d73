use glam::Vec2;
use web_sys as web;

/// Client coordinates relative to an element's top-left corner.
#[inline]
pub fn local_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}

/// Whether a local point lies inside an element of the given size.
#[inline]
pub fn is_inside(p: Vec2, width: f64, height: f64) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x <= width as f32 && p.y <= height as f32
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_local(ev: &web::PointerEvent, el: &web::HtmlElement) -> Option<Vec2> {
    let rect = el.get_bounding_client_rect();
    let p = local_point(ev.client_x() as f64, ev.client_y() as f64, rect.left(), rect.top());
    is_inside(p, rect.width(), rect.height()).then_some(p)
}
