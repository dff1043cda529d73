use crate::frame::FrameContext;
use crate::input;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Listeners attached to the container; kept so teardown can detach them.
pub struct PointerListeners {
    target: web::HtmlElement,
    on_move: PointerClosure,
    on_leave: PointerClosure,
}

impl PointerListeners {
    pub fn detach(self) {
        for (kind, cb) in [("pointermove", &self.on_move), ("pointerleave", &self.on_leave)] {
            _ = self
                .target
                .remove_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
        }
    }
}

/// Pointer handlers only record the sample; the frame loop does the work.
pub fn wire_pointer_handlers(
    container: &web::HtmlElement,
    frame_ctx: Weak<RefCell<FrameContext>>,
) -> PointerListeners {
    let on_move = {
        let frame_ctx = frame_ctx.clone();
        let container = container.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(pos) = input::pointer_local(&ev, &container) else {
                return;
            };
            let Some(strong) = frame_ctx.upgrade() else {
                return;
            };
            if let Ok(mut ctx) = strong.try_borrow_mut() {
                ctx.driver.pointer_move(pos, instant::now());
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let Some(strong) = frame_ctx.upgrade() else {
            return;
        };
        if let Ok(mut ctx) = strong.try_borrow_mut() {
            ctx.driver.pointer_leave();
        }
    }) as Box<dyn FnMut(_)>);

    _ = container
        .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    _ = container
        .add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());

    PointerListeners {
        target: container.clone(),
        on_move,
        on_leave,
    }
}
