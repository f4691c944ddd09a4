use super::PieceFrame;
use crate::constants::*;
use crate::easing::CubicBezier;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstPiece {
    pub angle: f64,
    pub distance: f64,
    pub duration_ms: f64,
}

/// Dots flying radially out of a focused field. Angles are evenly spaced;
/// the travel distance carries the random jitter.
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    origin: (f64, f64),
    started_at_ms: f64,
    pieces: SmallVec<[BurstPiece; 16]>,
    easing: CubicBezier,
}

impl ParticleBurst {
    pub fn spawn(origin: (f64, f64), now_ms: f64, rng: &mut impl Rng) -> Self {
        let pieces = (0..BURST_PIECES)
            .map(|i| BurstPiece {
                angle: TAU * i as f64 / BURST_PIECES as f64,
                distance: BURST_DISTANCE_MIN + rng.gen::<f64>() * BURST_DISTANCE_JITTER,
                duration_ms: BURST_DURATION_MIN_MS + rng.gen::<f64>() * BURST_DURATION_JITTER_MS,
            })
            .collect();
        Self {
            origin,
            started_at_ms: now_ms,
            pieces,
            easing: CubicBezier::from_points(EFFECT_EASING),
        }
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn pieces(&self) -> &[BurstPiece] {
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

    /// Offset, scale and opacity of piece `index`; `None` once it has landed.
    pub fn sample(&self, index: usize, now_ms: f64) -> Option<PieceFrame> {
        let piece = self.pieces.get(index)?;
        // Compare against the absolute end so it agrees with `ends_at_ms`.
        if now_ms >= self.started_at_ms + piece.duration_ms {
            return None;
        }
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let e = self.easing.ease(elapsed / piece.duration_ms);
        Some(PieceFrame {
            dx: piece.angle.cos() * piece.distance * e,
            dy: piece.angle.sin() * piece.distance * e,
            scale: 1.0 - e,
            rotation_deg: 0.0,
            opacity: 1.0 - e,
        })
    }
}
