// Host-side tests for the inline CSS builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use backdrop_core::{PieceFrame, TypedFrame};
use style::*;

#[test]
fn burst_dot_sits_on_origin() {
    let css = burst_dot_css((120.5, 40.0));
    assert!(css.starts_with("position:fixed;left:120.5px;top:40px;"));
    assert!(css.contains("width:6px;height:6px;"));
    assert!(css.contains("border-radius:50%"));
    assert!(css.contains("linear-gradient(135deg, #00ff88, #00d4ff)"));
    assert!(css.contains("pointer-events:none"));
}

#[test]
fn confetti_shape_and_colour() {
    let round = confetti_css(0x00ffff, true);
    assert!(round.contains("left:50%;top:50%"));
    assert!(round.contains("background:#00ffff"));
    assert!(round.contains("border-radius:50%"));
    let square = confetti_css(0xff00ff, false);
    assert!(square.contains("background:#ff00ff"));
    assert!(square.contains("border-radius:0;"));
}

#[test]
fn piece_transform_formats_every_component() {
    let frame = PieceFrame {
        dx: 12.5,
        dy: -3.0,
        scale: 0.5,
        rotation_deg: 90.0,
        opacity: 0.5,
    };
    assert_eq!(
        piece_transform(&frame),
        "translate(12.5px, -3px) scale(0.5) rotate(90deg)"
    );
}

#[test]
fn typed_shift_and_opacity() {
    let frame = TypedFrame {
        visible_chars: 3,
        opacity: 0.25,
        shift_px: 15.0,
    };
    assert_eq!(typed_transform(&frame), "translateY(15px)");
    assert_eq!(opacity(frame.opacity), "0.25");
    assert_eq!(opacity(-0.1), "0");
    assert_eq!(opacity(1.5), "1");
}

#[test]
fn form_scale() {
    assert_eq!(scale(constants::FORM_HIDDEN_SCALE), "scale(0.8)");
    assert_eq!(scale(1.0), "scale(1)");
}

#[test]
fn typed_box_is_pinned_bottom_right() {
    assert!(constants::TYPED_BOX_CSS.contains("bottom:20px;right:20px;"));
    assert!(constants::TYPED_BOX_CSS.contains("color:#00ff88"));
    assert!(constants::TYPED_BOX_CSS.contains("monospace"));
}
