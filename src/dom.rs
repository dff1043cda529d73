use crate::constants::{LAYER_STYLE, OVERLAY_CLASS, STATIC_LAYER_CLASS};
use dotgrid_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Container layout size and the current device pixel ratio.
pub fn container_viewport(container: &web::HtmlElement) -> Option<Viewport> {
    let window = web::window()?;
    let rect = container.get_bounding_client_rect();
    Some(Viewport::new(
        rect.width() as f32,
        rect.height() as f32,
        window.device_pixel_ratio() as f32,
    ))
}

/// Keep the canvas backing store at layout size × device pixel ratio while
/// its CSS size stays at layout size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let (w_px, h_px) = viewport.device_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.logical.x));
    _ = style.set_property("height", &format!("{}px", viewport.logical.y));
}

/// The two elements mounted inside the host container.
pub struct Layers {
    pub static_host: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
}

impl Layers {
    pub fn mount(
        document: &web::Document,
        container: &web::HtmlElement,
        svg: &str,
    ) -> anyhow::Result<Self> {
        let static_host: web::HtmlElement = create(document, "div")?;
        _ = static_host.set_attribute("class", STATIC_LAYER_CLASS);
        _ = static_host.set_attribute("style", LAYER_STYLE);
        _ = static_host.set_attribute("aria-hidden", "true");
        static_host.set_inner_html(svg);

        let canvas: web::HtmlCanvasElement = create(document, "canvas")?;
        _ = canvas.set_attribute("class", OVERLAY_CLASS);
        _ = canvas.set_attribute("style", LAYER_STYLE);

        container
            .append_child(&static_host)
            .map_err(|e| anyhow::anyhow!("append static layer: {:?}", e))?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append overlay canvas: {:?}", e))?;
        Ok(Self {
            static_host,
            canvas,
        })
    }

    pub fn set_static_markup(&self, svg: &str) {
        self.static_host.set_inner_html(svg);
    }

    /// Apply (or clear) the radial fade mask on the overlay canvas.
    pub fn set_overlay_mask(&self, mask: Option<&str>) {
        let style = self.canvas.style();
        for prop in ["mask-image", "-webkit-mask-image"] {
            match mask {
                Some(value) => {
                    _ = style.set_property(prop, value);
                }
                None => {
                    _ = style.remove_property(prop);
                }
            }
        }
    }

    pub fn unmount(&self) {
        self.static_host.remove();
        self.canvas.remove();
    }
}

fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{}> has unexpected type", tag))
}
