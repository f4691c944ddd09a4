use crate::constants::{TILT_DIVISOR, TILT_PERSPECTIVE_PX};

/// Pointer position normalized to the viewport, `[-1, 1]` on both axes with
/// y pointing up. Last write wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Map client pixel coordinates to normalized device coordinates.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: ((client_x / width) * 2.0 - 1.0) as f32,
            y: (-(client_y / height) * 2.0 + 1.0) as f32,
        }
    }
}

/// Element bounds in client pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Card tilt in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer at client coordinates over `rect`. The card leans
    /// away from the pointer proportionally to its offset from the centre.
    pub fn from_pointer(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let cx = rect.width / 2.0;
        let cy = rect.height / 2.0;
        Self {
            rotate_x: (y - cy) / TILT_DIVISOR,
            rotate_y: (cx - x) / TILT_DIVISOR,
        }
    }

    pub fn css_transform(&self) -> String {
        if *self == Tilt::NEUTRAL {
            return format!("perspective({TILT_PERSPECTIVE_PX}px) rotateX(0) rotateY(0)");
        }
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }
}
