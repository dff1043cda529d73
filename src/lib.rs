#![cfg(target_arch = "wasm32")]
use dotgrid_core::{static_layer, DotGridConfig, FrameDriver};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use frame::{FrameContext, RafScheduler};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("dotgrid-web starting");
    Ok(())
}

/// One mounted dot grid. Dropping it (or calling `destroy`) cancels the
/// pending frame and removes everything it added to the container.
#[wasm_bindgen]
pub struct DotGrid {
    frame_ctx: Rc<RefCell<FrameContext>>,
}

#[wasm_bindgen]
impl DotGrid {
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, config: JsValue) -> Result<DotGrid, JsValue> {
        init(container, &config).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: JsValue) -> Result<(), JsValue> {
        let config = parse_config(&config).map_err(to_js_error)?;
        let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() else {
            return Err(JsValue::from_str("dotgrid is busy"));
        };
        let state = ctx.reconfigure(config);
        log::debug!("[config] applied; driver {:?}", state);
        Ok(())
    }

    pub fn destroy(&self) {
        if let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() {
            ctx.teardown();
        }
    }
}

impl Drop for DotGrid {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn init(container: web::HtmlElement, config: &JsValue) -> anyhow::Result<DotGrid> {
    static NEXT_ID: AtomicU32 = AtomicU32::new(0);

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = parse_config(config)?;
    let pattern_id = format!(
        "{}-{}",
        constants::ID_PREFIX,
        NEXT_ID.fetch_add(1, Ordering::Relaxed)
    );

    let layers = dom::Layers::mount(
        &document,
        &container,
        &static_layer::pattern_svg(&config, &pattern_id),
    )?;
    layers.set_overlay_mask(static_layer::overlay_mask_css(&config).as_deref());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        container: container.clone(),
        layers,
        driver: FrameDriver::new(config, instant::now()),
        surface: None,
        scheduler: RafScheduler::default(),
        listeners: None,
        pattern_id,
    }));

    let listeners = events::wire_pointer_handlers(&container, Rc::downgrade(&frame_ctx));
    frame_ctx.borrow_mut().listeners = Some(listeners);

    frame::start_loop(&frame_ctx);
    Ok(DotGrid { frame_ctx })
}

fn parse_config(value: &JsValue) -> anyhow::Result<DotGridConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(DotGridConfig::default());
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow::anyhow!("config is not serializable: {:?}", e))?
        .into();
    Ok(DotGridConfig::from_json(&json)?)
}

fn to_js_error(e: anyhow::Error) -> JsValue {
    log::error!("{:#}", e);
    JsValue::from_str(&format!("{:#}", e))
}
