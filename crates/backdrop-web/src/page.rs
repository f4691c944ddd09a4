// Page-level decisions that need no live DOM.

use web_sys::DocumentReadyState;

/// Whether startup has to wait for `DOMContentLoaded`.
#[inline]
pub fn waits_for_content(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Loading
}

/// Device-pixel backing size for a canvas drawn at `css_w` x `css_h`.
/// Never zero, so the surface can always be configured.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            ((v * dpr).round() as u32).max(1)
        } else {
            1
        }
    };
    (px(css_w), px(css_h))
}

#[inline]
pub fn css_px(v: f64) -> String {
    format!("{v}px")
}
