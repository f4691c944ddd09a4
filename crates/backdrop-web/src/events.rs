use crate::constants::ESCAPE_KEY;
use crate::dom::{listen, sync_canvas_backing_size, viewport_size};
use crate::frame::FrameContext;
use backdrop_core::{CancelToken, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer position over the whole page steers the camera.
pub fn wire_pointer(window: &web::Window, ctx: Rc<RefCell<FrameContext>>) {
    let win = window.clone();
    listen(window, "pointermove", move |ev: web::PointerEvent| {
        let (w, h) = viewport_size(&win);
        let pointer = PointerState::from_client(ev.client_x() as f64, ev.client_y() as f64, w, h);
        if let Ok(mut ctx) = ctx.try_borrow_mut() {
            ctx.session.set_pointer(pointer);
        }
    });
}

/// Keep the canvas backing store, the surface and the camera aspect in step
/// with the window.
pub fn wire_resize(window: &web::Window, canvas: web::HtmlCanvasElement, ctx: Rc<RefCell<FrameContext>>) {
    listen(window, "resize", move |_: web::Event| {
        let (w, h) = sync_canvas_backing_size(&canvas);
        if let Ok(mut ctx) = ctx.try_borrow_mut() {
            ctx.resize(w, h);
        }
    });
}

/// Escape abandons an in-flight submit.
pub fn wire_cancel(window: &web::Window, token: CancelToken) {
    listen(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == ESCAPE_KEY {
            log::debug!("[form] cancel requested");
            token.cancel();
        }
    });
}
