use crate::page::{backing_size, css_px};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on `target`. The closure lives for the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[dom] could not listen for {event}");
    }
    closure.forget();
}

#[inline]
pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Current value of an `input`, `textarea` or `select`.
pub fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Client-pixel bounds of `el`.
pub fn client_rect(el: &web::Element) -> backdrop_core::Rect {
    let r = el.get_bounding_client_rect();
    backdrop_core::Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Stretch the canvas over the viewport and match its backing store to the
/// viewport times the pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(window) = web::window() else {
        return (canvas.width().max(1), canvas.height().max(1));
    };
    let (css_w, css_h) = viewport_size(&window);
    set_style(canvas, "width", &css_px(css_w));
    set_style(canvas, "height", &css_px(css_h));
    let (w_px, h_px) = backing_size(css_w, css_h, window.device_pixel_ratio());
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
