//! Contact-form behaviour that does not need a DOM: the simulated submit
//! timeline and the cosmetic field styling rules.

use crate::constants::*;
use crate::error::SubmitError;
use std::cell::Cell;
use std::rc::Rc;

pub const LABEL_FOCUS_COLOR: &str = "#00ff88";
pub const LABEL_BLUR_COLOR: &str = "#8892b0";
pub const BORDER_FILLED_COLOR: &str = "#00ff88";
pub const BORDER_EMPTY_COLOR: &str = "rgba(0, 255, 136, 0.2)";

/// Border colour for a field holding `value`. Cosmetic only.
#[inline]
pub fn border_color_for(value: &str) -> &'static str {
    if value.is_empty() {
        BORDER_EMPTY_COLOR
    } else {
        BORDER_FILLED_COLOR
    }
}

#[inline]
pub fn label_color(focused: bool) -> &'static str {
    if focused {
        LABEL_FOCUS_COLOR
    } else {
        LABEL_BLUR_COLOR
    }
}

/// Offsets of each step from the submit event, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormTimeline {
    pub fade_at_ms: f64,
    pub success_at_ms: f64,
    pub success_end_ms: f64,
    pub restore_at_ms: f64,
}

impl Default for FormTimeline {
    fn default() -> Self {
        Self {
            fade_at_ms: SUBMIT_FADE_AT_MS,
            success_at_ms: SUBMIT_SUCCESS_AT_MS,
            success_end_ms: SUBMIT_SUCCESS_END_MS,
            restore_at_ms: SUBMIT_RESTORE_AT_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    FadingOut,
    SuccessShown,
    Restoring,
}

/// Side effects the host applies when the timeline crosses a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    BeginLoading { label: &'static str },
    SpawnTypedText,
    SpawnConfetti,
    FadeOutForm,
    HideFormShowSuccess,
    HideSuccess,
    RestoreForm { label: &'static str },
}

/// Shared flag that asks an in-flight sequence to stop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    fn reset(&self) {
        self.0.set(false);
    }
}

pub struct SubmitSequence {
    timeline: FormTimeline,
    phase: SubmitPhase,
    started_at_ms: f64,
    token: CancelToken,
}

impl SubmitSequence {
    pub fn new(timeline: FormTimeline) -> Self {
        Self {
            timeline,
            phase: SubmitPhase::Idle,
            started_at_ms: 0.0,
            token: CancelToken::default(),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    pub fn timeline(&self) -> FormTimeline {
        self.timeline
    }

    /// Handle for cancelling whatever sequence is in flight.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Begin a submission at `now_ms`. Rejected while one is running.
    pub fn start(&mut self, now_ms: f64) -> Result<Vec<FormAction>, SubmitError> {
        if self.is_running() {
            return Err(SubmitError::AlreadyRunning);
        }
        self.token.reset();
        self.phase = SubmitPhase::Submitting;
        self.started_at_ms = now_ms;
        Ok(vec![
            FormAction::BeginLoading {
                label: SUBMIT_LABEL_BUSY,
            },
            FormAction::SpawnTypedText,
            FormAction::SpawnConfetti,
        ])
    }

    /// Emit every step crossed up to `now_ms`, in order. Several steps come
    /// out together when frames were skipped.
    pub fn advance(&mut self, now_ms: f64) -> Vec<FormAction> {
        let mut out = Vec::new();
        if !self.is_running() {
            return out;
        }
        if self.token.is_cancelled() {
            return self.abort();
        }
        let t = now_ms - self.started_at_ms;
        loop {
            let (due, next) = match self.phase {
                SubmitPhase::Idle => break,
                SubmitPhase::Submitting => (self.timeline.fade_at_ms, SubmitPhase::FadingOut),
                SubmitPhase::FadingOut => (self.timeline.success_at_ms, SubmitPhase::SuccessShown),
                SubmitPhase::SuccessShown => (self.timeline.success_end_ms, SubmitPhase::Restoring),
                SubmitPhase::Restoring => (self.timeline.restore_at_ms, SubmitPhase::Idle),
            };
            if t < due {
                break;
            }
            match next {
                SubmitPhase::FadingOut => out.push(FormAction::FadeOutForm),
                SubmitPhase::SuccessShown => out.push(FormAction::HideFormShowSuccess),
                SubmitPhase::Restoring => out.push(FormAction::HideSuccess),
                SubmitPhase::Idle => {
                    self.finish(&mut out);
                    break;
                }
                SubmitPhase::Submitting => {}
            }
            self.phase = next;
        }
        out
    }

    /// Drop whatever is in flight and return the actions that put the page
    /// back to idle. Empty when nothing is running.
    pub fn abort(&mut self) -> Vec<FormAction> {
        let mut out = Vec::new();
        if self.is_running() {
            log::info!("[form] submit abandoned in {:?}", self.phase);
            self.finish(&mut out);
        }
        out
    }

    fn finish(&mut self, out: &mut Vec<FormAction>) {
        if self.phase == SubmitPhase::SuccessShown {
            out.push(FormAction::HideSuccess);
        }
        out.push(FormAction::RestoreForm {
            label: SUBMIT_LABEL_IDLE,
        });
        self.phase = SubmitPhase::Idle;
        self.token.reset();
    }
}

impl Default for SubmitSequence {
    fn default() -> Self {
        Self::new(FormTimeline::default())
    }
}
