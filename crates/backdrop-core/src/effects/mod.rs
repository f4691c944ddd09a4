//! Short-lived, self-removing animations.
//!
//! Each effect is a pure function of time: the host samples it every frame
//! and releases whatever it bound to a piece once that piece samples to
//! `None`. [`EffectPool`] caps how many effects run at once.

pub mod burst;
pub mod confetti;
pub mod typed;

pub use burst::{BurstPiece, ParticleBurst};
pub use confetti::{ConfettiBurst, ConfettiPiece};
pub use typed::{TypedFrame, TypedText};

use crate::error::ParamsError;
use fnv::FnvHashMap;

/// Per-piece transform at one instant, in CSS pixels and degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceFrame {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub enum Effect {
    Burst(ParticleBurst),
    Confetti(ConfettiBurst),
    Typed(TypedText),
}

impl Effect {
    /// Number of separately animated pieces (one for the typed overlay).
    pub fn piece_count(&self) -> usize {
        match self {
            Effect::Burst(b) => b.pieces().len(),
            Effect::Confetti(c) => c.pieces().len(),
            Effect::Typed(_) => 1,
        }
    }

    pub fn ends_at_ms(&self) -> f64 {
        match self {
            Effect::Burst(b) => b.ends_at_ms(),
            Effect::Confetti(c) => c.ends_at_ms(),
            Effect::Typed(t) => t.ends_at_ms(),
        }
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.ends_at_ms()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Effect::Burst(_) => "burst",
            Effect::Confetti(_) => "confetti",
            Effect::Typed(_) => "typed",
        }
    }
}

pub type EffectId = u64;

/// Running effects paired with whatever handle the host bound to them.
pub struct EffectPool<H> {
    capacity: usize,
    next_id: EffectId,
    live: FnvHashMap<EffectId, (Effect, H)>,
}

impl<H> EffectPool<H> {
    pub fn with_capacity(capacity: usize) -> Result<Self, ParamsError> {
        if capacity == 0 {
            return Err(ParamsError::PoolCapacity);
        }
        Ok(Self {
            capacity,
            next_id: 0,
            live: FnvHashMap::default(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.live.len() >= self.capacity
    }

    /// Start `effect` if there is room. `bind` runs only when the effect is
    /// accepted, so a full pool never allocates host resources.
    pub fn try_spawn(&mut self, effect: Effect, bind: impl FnOnce(&Effect) -> H) -> Option<EffectId> {
        if self.is_full() {
            log::debug!(
                "[effects] pool full ({}), dropping {}",
                self.capacity,
                effect.kind()
            );
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        let handle = bind(&effect);
        self.live.insert(id, (effect, handle));
        Some(id)
    }

    pub fn get(&self, id: EffectId) -> Option<&Effect> {
        self.live.get(&id).map(|(e, _)| e)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EffectId, &Effect, &mut H)> {
        self.live.iter_mut().map(|(id, (e, h))| (*id, &*e, h))
    }

    /// Drop every finished effect, handing its handle back for release.
    /// Returns how many were removed.
    pub fn reap(&mut self, now_ms: f64, mut release: impl FnMut(Effect, H)) -> usize {
        let done: Vec<EffectId> = self
            .live
            .iter()
            .filter(|(_, (e, _))| e.is_finished(now_ms))
            .map(|(id, _)| *id)
            .collect();
        for id in &done {
            if let Some((effect, handle)) = self.live.remove(id) {
                release(effect, handle);
            }
        }
        done.len()
    }

    /// Remove everything regardless of progress.
    pub fn clear(&mut self, mut release: impl FnMut(Effect, H)) {
        for (_, (effect, handle)) in self.live.drain() {
            release(effect, handle);
        }
    }
}
