use crate::dom::{self, Layers};
use crate::events::PointerListeners;
use crate::render::CanvasSurface;
use dotgrid_core::{DotGridConfig, DriverState, FrameDriver, FrameScheduler, FrameToken};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TickClosure = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` behind the core scheduler seam. The tick closure
/// is installed once the frame context exists and dropped on teardown.
#[derive(Default)]
pub struct RafScheduler {
    callback: Option<TickClosure>,
}

impl RafScheduler {
    pub fn install(&mut self, callback: TickClosure) {
        self.callback = Some(callback);
    }

    pub fn uninstall(&mut self) {
        self.callback = None;
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let (Some(window), Some(cb)) = (web::window(), self.callback.as_ref()) else {
            log::warn!("[frame] no window or tick callback; frame not scheduled");
            return FrameToken(0);
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => FrameToken(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                FrameToken(0)
            }
        }
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        // Browser handles start at 1; 0 marks a request that never went out.
        if token.0 == 0 {
            return;
        }
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(token.0);
        }
    }
}

pub struct FrameContext {
    pub container: web::HtmlElement,
    pub layers: Layers,
    pub driver: FrameDriver,
    pub surface: Option<CanvasSurface>,
    pub scheduler: RafScheduler,
    pub listeners: Option<PointerListeners>,
    pub pattern_id: String,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        if self.surface.is_none() {
            self.surface = CanvasSurface::from_canvas(&self.layers.canvas);
        }
        let viewport = dom::container_viewport(&self.container);
        let Self {
            driver,
            surface,
            scheduler,
            ..
        } = self;
        driver.tick(timestamp_ms, viewport, surface.as_mut(), scheduler);
    }

    pub fn reconfigure(&mut self, config: DotGridConfig) -> DriverState {
        self.layers
            .set_static_markup(&dotgrid_core::static_layer::pattern_svg(&config, &self.pattern_id));
        self.layers
            .set_overlay_mask(dotgrid_core::static_layer::overlay_mask_css(&config).as_deref());
        if self.surface.is_none() {
            self.surface = CanvasSurface::from_canvas(&self.layers.canvas);
        }
        let Self {
            driver,
            surface,
            scheduler,
            ..
        } = self;
        driver.configure(config, instant::now(), scheduler, surface.as_mut())
    }

    /// Cancel the pending frame, detach listeners, drop the tick closure and
    /// remove the mounted layers. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.driver.is_live() {
            return;
        }
        self.driver.teardown(&mut self.scheduler);
        self.scheduler.uninstall();
        if let Some(listeners) = self.listeners.take() {
            listeners.detach();
        }
        self.layers.unmount();
        log::info!("[frame] {} torn down", self.pattern_id);
    }
}

/// Install the tick closure and enter the driver state for the current
/// configuration. The closure only holds a weak reference, so a dropped
/// context makes late callbacks no-ops.
pub fn start_loop(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let weak = Rc::downgrade(frame_ctx);
    let tick = Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let Some(strong) = weak.upgrade() else {
            return;
        };
        let Ok(mut ctx) = strong.try_borrow_mut() else {
            log::warn!("[frame] context busy; skipping tick");
            return;
        };
        ctx.frame(timestamp_ms);
    }) as Box<dyn FnMut(f64)>);

    let mut ctx = frame_ctx.borrow_mut();
    ctx.scheduler.install(tick);
    let FrameContext {
        driver, scheduler, ..
    } = &mut *ctx;
    let state = driver.start(instant::now(), scheduler);
    log::info!("[frame] started in {:?}", state);
}
