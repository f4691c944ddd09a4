use super::PieceFrame;
use crate::constants::*;
use crate::easing::CubicBezier;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub target: (f64, f64),
    pub spin_deg: f64,
    pub duration_ms: f64,
    pub color: u32,
    pub round: bool,
}

/// Celebration burst thrown from the middle of the screen.
#[derive(Clone, Debug)]
pub struct ConfettiBurst {
    started_at_ms: f64,
    pieces: Vec<ConfettiPiece>,
    easing: CubicBezier,
}

impl ConfettiBurst {
    pub fn spawn(now_ms: f64, rng: &mut impl Rng) -> Self {
        let pieces = (0..CONFETTI_PIECES)
            .map(|_| {
                let color = CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())];
                let round = rng.gen::<f64>() > 0.5;
                let angle = rng.gen::<f64>() * TAU;
                let speed = CONFETTI_SPEED_MIN + rng.gen::<f64>() * CONFETTI_SPEED_JITTER;
                ConfettiPiece {
                    target: (angle.cos() * speed, angle.sin() * speed - CONFETTI_LIFT),
                    spin_deg: rng.gen::<f64>() * CONFETTI_SPIN_MAX_DEG,
                    duration_ms: CONFETTI_DURATION_MIN_MS
                        + rng.gen::<f64>() * CONFETTI_DURATION_JITTER_MS,
                    color,
                    round,
                }
            })
            .collect();
        Self {
            started_at_ms: now_ms,
            pieces,
            easing: CubicBezier::from_points(EFFECT_EASING),
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    pub fn ends_at_ms(&self) -> f64 {
        let longest = self
            .pieces
            .iter()
            .map(|p| p.duration_ms)
            .fold(0.0, f64::max);
        self.started_at_ms + longest
    }

    pub fn sample(&self, index: usize, now_ms: f64) -> Option<PieceFrame> {
        let piece = self.pieces.get(index)?;
        // Compare against the absolute end so it agrees with `ends_at_ms`.
        if now_ms >= self.started_at_ms + piece.duration_ms {
            return None;
        }
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let e = self.easing.ease(elapsed / piece.duration_ms);
        Some(PieceFrame {
            dx: piece.target.0 * e,
            dy: piece.target.1 * e,
            scale: 1.0,
            rotation_deg: piece.spin_deg * e,
            opacity: 1.0 - e,
        })
    }
}
