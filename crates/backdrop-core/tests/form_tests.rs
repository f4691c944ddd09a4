// Host-side tests for the contact form: the submit timeline, cancellation
// and the cosmetic styling helpers.

use backdrop_core::*;

fn running_at(start: f64) -> SubmitSequence {
    let mut seq = SubmitSequence::default();
    let actions = seq.start(start).unwrap();
    assert_eq!(
        actions,
        vec![
            FormAction::BeginLoading {
                label: SUBMIT_LABEL_BUSY
            },
            FormAction::SpawnTypedText,
            FormAction::SpawnConfetti,
        ]
    );
    seq
}

#[test]
fn timeline_fires_each_step_at_its_boundary() {
    let start = 1000.0;
    let mut seq = running_at(start);
    assert_eq!(seq.phase(), SubmitPhase::Submitting);

    assert!(seq.advance(start + 1999.0).is_empty());
    assert_eq!(seq.advance(start + 2000.0), vec![FormAction::FadeOutForm]);
    assert_eq!(seq.phase(), SubmitPhase::FadingOut);

    assert!(seq.advance(start + 2499.0).is_empty());
    assert_eq!(
        seq.advance(start + 2500.0),
        vec![FormAction::HideFormShowSuccess]
    );
    assert_eq!(seq.phase(), SubmitPhase::SuccessShown);

    assert!(seq.advance(start + 6499.0).is_empty());
    assert_eq!(seq.advance(start + 6500.0), vec![FormAction::HideSuccess]);
    assert_eq!(seq.phase(), SubmitPhase::Restoring);

    assert!(seq.advance(start + 6999.0).is_empty());
    assert_eq!(
        seq.advance(start + 7000.0),
        vec![FormAction::RestoreForm {
            label: SUBMIT_LABEL_IDLE
        }]
    );
    assert_eq!(seq.phase(), SubmitPhase::Idle);
    assert!(!seq.is_running());
    assert!(seq.advance(start + 9000.0).is_empty());
}

#[test]
fn visibility_windows_follow_the_timeline() {
    let mut seq = running_at(0.0);
    let mut label = SUBMIT_LABEL_BUSY;
    let mut form_visible = true;
    let mut success_visible = false;

    let mut t = 0.0;
    while t <= 8000.0 {
        for action in seq.advance(t) {
            match action {
                FormAction::HideFormShowSuccess => {
                    form_visible = false;
                    success_visible = true;
                }
                FormAction::HideSuccess => success_visible = false,
                FormAction::RestoreForm { label: l } => {
                    form_visible = true;
                    label = l;
                }
                _ => {}
            }
        }
        assert_eq!(success_visible, (2500.0..6500.0).contains(&t), "at {t}");
        assert_eq!(form_visible, !(2500.0..7000.0).contains(&t), "at {t}");
        let expected = if t < 7000.0 {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL_IDLE
        };
        assert_eq!(label, expected, "at {t}");
        t += 10.0;
    }
}

#[test]
fn skipped_frames_emit_every_crossed_step_in_order() {
    let mut seq = running_at(0.0);
    assert_eq!(
        seq.advance(8000.0),
        vec![
            FormAction::FadeOutForm,
            FormAction::HideFormShowSuccess,
            FormAction::HideSuccess,
            FormAction::RestoreForm {
                label: SUBMIT_LABEL_IDLE
            },
        ]
    );
    assert!(!seq.is_running());
}

#[test]
fn second_submit_is_rejected_while_running() {
    let mut seq = running_at(0.0);
    assert_eq!(seq.start(100.0), Err(SubmitError::AlreadyRunning));
    seq.advance(3000.0);
    assert_eq!(seq.start(3000.0), Err(SubmitError::AlreadyRunning));

    seq.advance(7000.0);
    assert!(seq.start(7100.0).is_ok());
    // The new run is timed from its own start
    assert!(seq.advance(7100.0 + 1999.0).is_empty());
    assert_eq!(seq.advance(7100.0 + 2000.0), vec![FormAction::FadeOutForm]);
}

#[test]
fn cancel_while_success_is_shown_hides_it_and_restores() {
    let mut seq = running_at(0.0);
    seq.advance(3000.0);
    assert_eq!(seq.phase(), SubmitPhase::SuccessShown);

    let token = seq.cancel_token();
    token.cancel();
    assert!(token.is_cancelled());
    assert_eq!(
        seq.advance(3016.0),
        vec![
            FormAction::HideSuccess,
            FormAction::RestoreForm {
                label: SUBMIT_LABEL_IDLE
            },
        ]
    );
    assert!(!seq.is_running());
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_before_fade_only_restores() {
    let mut seq = running_at(0.0);
    seq.cancel_token().cancel();
    assert_eq!(
        seq.advance(500.0),
        vec![FormAction::RestoreForm {
            label: SUBMIT_LABEL_IDLE
        }]
    );
    assert!(seq.start(600.0).is_ok());
    assert_eq!(seq.phase(), SubmitPhase::Submitting);
}

#[test]
fn stalled_sequence_blocks_until_aborted() {
    let mut seq = running_at(0.0);
    assert_eq!(seq.advance(2600.0).len(), 2);
    assert_eq!(seq.phase(), SubmitPhase::SuccessShown);

    // No further frames: the sequence is still holding the form.
    assert_eq!(seq.start(60_000.0), Err(SubmitError::AlreadyRunning));

    assert_eq!(
        seq.abort(),
        vec![
            FormAction::HideSuccess,
            FormAction::RestoreForm {
                label: SUBMIT_LABEL_IDLE
            },
        ]
    );
    assert!(!seq.is_running());
    assert!(seq.start(60_000.0).is_ok());
    assert_eq!(seq.advance(62_000.0), vec![FormAction::FadeOutForm]);
}

#[test]
fn abort_before_fade_only_restores_and_is_idempotent() {
    let mut seq = running_at(0.0);
    assert_eq!(
        seq.abort(),
        vec![FormAction::RestoreForm {
            label: SUBMIT_LABEL_IDLE
        }]
    );
    assert!(seq.abort().is_empty());
    assert!(SubmitSequence::default().abort().is_empty());
}

#[test]
fn cancel_while_idle_does_not_leak_into_next_run() {
    let mut seq = SubmitSequence::default();
    seq.cancel_token().cancel();
    assert!(seq.advance(0.0).is_empty());
    seq.start(0.0).unwrap();
    assert_eq!(seq.advance(2000.0), vec![FormAction::FadeOutForm]);
}

#[test]
fn custom_timeline_is_honoured() {
    let mut seq = SubmitSequence::new(FormTimeline {
        fade_at_ms: 10.0,
        success_at_ms: 20.0,
        success_end_ms: 30.0,
        restore_at_ms: 40.0,
    });
    seq.start(0.0).unwrap();
    assert_eq!(seq.advance(25.0).len(), 2);
    assert_eq!(seq.advance(40.0).len(), 2);
    assert!(!seq.is_running());
}

#[test]
fn border_colour_tracks_emptiness() {
    assert_eq!(border_color_for(""), "rgba(0, 255, 136, 0.2)");
    assert_eq!(border_color_for("a"), "#00ff88");
    assert_eq!(border_color_for(" "), BORDER_FILLED_COLOR);
}

#[test]
fn label_colour_tracks_focus() {
    assert_eq!(label_color(true), "#00ff88");
    assert_eq!(label_color(false), "#8892b0");
}

#[test]
fn tilt_leans_away_from_pointer() {
    let rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 300.0,
        height: 600.0,
    };
    let (cx, cy) = rect.center();
    assert_eq!(Tilt::from_pointer(rect, cx, cy), Tilt::NEUTRAL);

    let corner = Tilt::from_pointer(rect, 100.0, 50.0);
    assert_eq!(corner.rotate_x, -10.0);
    assert_eq!(corner.rotate_y, 5.0);
    assert_eq!(
        corner.css_transform(),
        "perspective(1000px) rotateX(-10deg) rotateY(5deg)"
    );
}

#[test]
fn neutral_tilt_css() {
    assert_eq!(
        Tilt::NEUTRAL.css_transform(),
        "perspective(1000px) rotateX(0) rotateY(0)"
    );
}
