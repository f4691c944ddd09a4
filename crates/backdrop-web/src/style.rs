// Inline CSS for effect pieces and form states. Pure string building so it
// can be checked off the browser.

use crate::constants::*;
use backdrop_core::{css_hex, PieceFrame, TypedFrame, TYPED_FADE_SHIFT_PX};

/// Initial style of one burst dot sitting on `origin` (client pixels).
pub fn burst_dot_css(origin: (f64, f64)) -> String {
    format!(
        "position:fixed;left:{}px;top:{}px;width:{BURST_DOT_PX}px;height:{BURST_DOT_PX}px;\
border-radius:50%;background:{BURST_GRADIENT};pointer-events:none;z-index:{EFFECT_Z_INDEX};opacity:1;",
        origin.0, origin.1
    )
}

/// Initial style of one confetti piece at the middle of the viewport.
pub fn confetti_css(color: u32, round: bool) -> String {
    let radius = if round { "50%" } else { "0" };
    format!(
        "position:fixed;left:50%;top:50%;width:{CONFETTI_PX}px;height:{CONFETTI_PX}px;\
background:{};border-radius:{radius};pointer-events:none;z-index:{EFFECT_Z_INDEX};",
        css_hex(color)
    )
}

pub fn piece_transform(frame: &PieceFrame) -> String {
    format!(
        "translate({}px, {}px) scale({}) rotate({}deg)",
        frame.dx, frame.dy, frame.scale, frame.rotation_deg
    )
}

pub fn typed_transform(frame: &TypedFrame) -> String {
    format!("translateY({}px)", frame.shift_px.clamp(0.0, TYPED_FADE_SHIFT_PX))
}

pub fn opacity(value: f64) -> String {
    format!("{}", value.clamp(0.0, 1.0))
}

pub fn scale(factor: f64) -> String {
    format!("scale({factor})")
}
