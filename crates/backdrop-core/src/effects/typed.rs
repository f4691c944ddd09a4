use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypedFrame {
    pub visible_chars: usize,
    pub opacity: f64,
    pub shift_px: f64,
}

/// Console-style overlay that types a line, lingers, then fades away.
#[derive(Clone, Debug)]
pub struct TypedText {
    text: String,
    char_count: usize,
    started_at_ms: f64,
}

impl TypedText {
    pub fn new(text: impl Into<String>, now_ms: f64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            started_at_ms: now_ms,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    /// Moment the last character appears.
    pub fn typed_at_ms(&self) -> f64 {
        self.started_at_ms + self.char_count as f64 * TYPED_CHAR_INTERVAL_MS
    }

    pub fn fade_at_ms(&self) -> f64 {
        self.typed_at_ms() + TYPED_HOLD_MS
    }

    pub fn ends_at_ms(&self) -> f64 {
        self.fade_at_ms() + TYPED_FADE_MS
    }

    /// Prefix made of the first `n` characters.
    pub fn prefix(&self, n: usize) -> &str {
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// `None` once the overlay has faded out and should be removed.
    pub fn sample(&self, now_ms: f64) -> Option<TypedFrame> {
        if now_ms >= self.ends_at_ms() {
            return None;
        }
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let visible_chars = ((elapsed / TYPED_CHAR_INTERVAL_MS).floor() as usize).min(self.char_count);
        let fade = ((now_ms - self.fade_at_ms()) / TYPED_FADE_MS).clamp(0.0, 1.0);
        Some(TypedFrame {
            visible_chars,
            opacity: 1.0 - fade,
            shift_px: TYPED_FADE_SHIFT_PX * fade,
        })
    }
}
