//! CSS `cubic-bezier(x1, y1, x2, y2)` timing function.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    cx: f64,
    bx: f64,
    ax: f64,
    cy: f64,
    by: f64,
    ay: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            cx,
            bx,
            ax,
            cy,
            by,
            ay,
        }
    }

    pub fn from_points(p: [f64; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }

    #[inline]
    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    #[inline]
    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    #[inline]
    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    // Newton-Raphson first, bisection if the slope flattens out.
    fn solve_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let v = self.sample_x(t);
            if (v - x).abs() < EPSILON {
                return t;
            }
            if x > v {
                lo = t;
            } else {
                hi = t;
            }
            let next = (hi - lo) * 0.5 + lo;
            if (next - t).abs() < EPSILON {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased progress for linear progress `x`, clamped to `[0, 1]` on input.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        let e = CubicBezier::new(0.0, 0.9, 0.57, 1.0);
        assert_eq!(e.ease(0.0), 0.0);
        assert_eq!(e.ease(1.0), 1.0);
        assert_eq!(e.ease(-3.0), 0.0);
        assert_eq!(e.ease(7.0), 1.0);
    }

    #[test]
    fn linear_curve_is_identity() {
        let e = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert!((e.ease(x) - x).abs() < 1e-5, "x={x}");
        }
    }

    #[test]
    fn burst_curve_front_loads_and_is_monotonic() {
        let e = CubicBezier::new(0.0, 0.9, 0.57, 1.0);
        assert!(e.ease(0.25) > 0.6);
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = e.ease(i as f64 / 100.0);
            assert!(y + 1e-9 >= prev);
            prev = y;
        }
    }
}
