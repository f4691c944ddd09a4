// Host-side tests for the transient effects and the pool that bounds them.

use backdrop_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::f64::consts::TAU;

#[test]
fn typed_text_reveals_one_char_every_interval() {
    let start = 500.0;
    let typed = TypedText::new(TYPED_TEXT, start);
    let len = typed.char_count();
    assert_eq!(len, TYPED_TEXT.chars().count());

    let mut changes = Vec::new();
    let mut shown = 0usize;
    let mut t = start;
    while let Some(frame) = typed.sample(t) {
        if frame.visible_chars != shown {
            assert_eq!(frame.visible_chars, shown + 1, "one character at a time");
            changes.push(t - start);
            shown = frame.visible_chars;
        }
        t += 1.0;
    }
    assert_eq!(changes.len(), len);
    for (k, at) in changes.iter().enumerate() {
        assert_eq!(*at, (k + 1) as f64 * TYPED_CHAR_INTERVAL_MS);
    }
}

#[test]
fn typed_text_lingers_fades_and_is_removed() {
    let typed = TypedText::new("abc", 0.0);
    assert_eq!(typed.typed_at_ms(), 150.0);
    let done = typed.typed_at_ms();

    let hold = typed.sample(done + 1999.0).unwrap();
    assert_eq!(hold.opacity, 1.0);
    assert_eq!(hold.shift_px, 0.0);

    let mid = typed.sample(done + 2150.0).unwrap();
    assert!((mid.opacity - 0.5).abs() < 1e-9);
    assert!((mid.shift_px - 10.0).abs() < 1e-9);

    assert!(typed.sample(done + 2299.0).is_some());
    assert!(typed.sample(done + 2300.0).is_none());
    assert_eq!(typed.ends_at_ms() - done, TYPED_HOLD_MS + TYPED_FADE_MS);
}

#[test]
fn typed_prefix_respects_multibyte_chars() {
    let typed = TypedText::new(TYPED_TEXT, 0.0);
    let len = typed.char_count();
    assert_eq!(typed.prefix(0), "");
    assert_eq!(typed.prefix(2), "> ");
    assert_eq!(typed.prefix(len), TYPED_TEXT);
    assert!(!typed.prefix(len - 1).ends_with('\u{2713}'));
    assert!(typed.prefix(len).ends_with('\u{2713}'));
}

#[test]
fn burst_spawns_fifteen_evenly_spaced_pieces() {
    let mut rng = StdRng::seed_from_u64(21);
    let burst = ParticleBurst::spawn((120.0, 80.0), 1000.0, &mut rng);
    let pieces = burst.pieces();
    assert_eq!(pieces.len(), 15);
    for (i, p) in pieces.iter().enumerate() {
        assert!((p.angle - TAU * i as f64 / 15.0).abs() < 1e-12);
        assert!((50.0..80.0).contains(&p.distance));
        assert!((600.0..1000.0).contains(&p.duration_ms));
    }
    for w in pieces.windows(2) {
        assert!((w[1].angle - w[0].angle - TAU / 15.0).abs() < 1e-12);
    }
}

#[test]
fn burst_pieces_fly_out_shrink_and_end_on_their_own_duration() {
    let mut rng = StdRng::seed_from_u64(4);
    let start = 2000.0;
    let burst = ParticleBurst::spawn((0.0, 0.0), start, &mut rng);

    for i in 0..15 {
        let first = burst.sample(i, start).unwrap();
        assert_eq!(first.dx, 0.0);
        assert_eq!(first.dy, 0.0);
        assert_eq!(first.scale, 1.0);
        assert_eq!(first.opacity, 1.0);

        let p = burst.pieces()[i];
        let late = burst.sample(i, start + p.duration_ms * 0.999).unwrap();
        let reach = (late.dx * late.dx + late.dy * late.dy).sqrt();
        assert!((reach - p.distance).abs() < 1.0, "piece {i} reached {reach}");
        assert!(late.opacity < 0.05);

        assert!(burst.sample(i, start + p.duration_ms).is_none());
    }
    let end = burst.ends_at_ms();
    assert!((0..15).all(|i| burst.sample(i, end).is_none()));
    assert!(burst.sample(15, start).is_none());
}

#[test]
fn pieces_are_gone_exactly_at_their_end_time() {
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = 123_456.789 + seed as f64 * 16.7;
        let burst = ParticleBurst::spawn((10.0, 20.0), start, &mut rng);
        for (i, p) in burst.pieces().iter().enumerate() {
            assert!(
                burst.sample(i, start + p.duration_ms).is_none(),
                "seed {seed} burst piece {i}"
            );
        }
        let confetti = ConfettiBurst::spawn(start, &mut rng);
        for (i, p) in confetti.pieces().iter().enumerate() {
            assert!(
                confetti.sample(i, start + p.duration_ms).is_none(),
                "seed {seed} confetti piece {i}"
            );
        }
    }
}

#[test]
fn confetti_spawns_fifty_pieces_with_upward_bias() {
    let mut rng = StdRng::seed_from_u64(99);
    let confetti = ConfettiBurst::spawn(0.0, &mut rng);
    assert_eq!(confetti.pieces().len(), 50);
    let mut round = 0;
    for p in confetti.pieces() {
        assert!(CONFETTI_PALETTE.contains(&p.color));
        assert!((1000.0..2000.0).contains(&p.duration_ms));
        assert!((0.0..720.0).contains(&p.spin_deg));
        let (tx, ty) = p.target;
        let speed = (tx * tx + (ty + CONFETTI_LIFT).powi(2)).sqrt();
        assert!(speed >= 200.0 - 1e-9 && speed < 500.0 + 1e-9);
        if p.round {
            round += 1;
        }
    }
    assert!(round > 10 && round < 40, "round count {round}");
}

#[test]
fn confetti_spins_and_fades_then_is_gone() {
    let mut rng = StdRng::seed_from_u64(5);
    let confetti = ConfettiBurst::spawn(100.0, &mut rng);
    let p = confetti.pieces()[0];
    let half = confetti.sample(0, 100.0 + p.duration_ms / 2.0).unwrap();
    assert!(half.opacity < 1.0 && half.opacity > 0.0);
    assert!(half.rotation_deg <= p.spin_deg);
    assert_eq!(half.scale, 1.0);
    assert!(confetti.sample(0, 100.0 + p.duration_ms).is_none());
    assert!(confetti.ends_at_ms() <= 100.0 + 2000.0);
}

#[test]
fn pool_caps_concurrent_effects_without_binding_rejected_ones() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pool: EffectPool<u32> = EffectPool::with_capacity(2).unwrap();
    let binds = Cell::new(0);
    let bind = |_: &Effect| {
        binds.set(binds.get() + 1);
        binds.get()
    };

    let a = pool.try_spawn(Effect::Typed(TypedText::new("hi", 0.0)), bind);
    let b = pool.try_spawn(
        Effect::Burst(ParticleBurst::spawn((0.0, 0.0), 0.0, &mut rng)),
        bind,
    );
    let c = pool.try_spawn(Effect::Confetti(ConfettiBurst::spawn(0.0, &mut rng)), bind);
    assert!(a.is_some() && b.is_some());
    assert_ne!(a, b);
    assert!(c.is_none());
    assert_eq!(binds.get(), 2);
    assert!(pool.is_full());
    assert_eq!(pool.len(), 2);
}

#[test]
fn pool_reaps_finished_effects_and_releases_handles() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut pool: EffectPool<&'static str> = EffectPool::with_capacity(4).unwrap();
    let typed = pool
        .try_spawn(Effect::Typed(TypedText::new("ok", 0.0)), |_| "typed")
        .unwrap();
    pool.try_spawn(Effect::Burst(ParticleBurst::spawn((0.0, 0.0), 0.0, &mut rng)), |_| {
        "burst"
    });

    let mut released = Vec::new();
    assert_eq!(pool.reap(500.0, |_, h| released.push(h)), 0);
    // Burst pieces last at most 1000 ms; the typed overlay runs to 2400 ms.
    assert_eq!(pool.reap(1000.0, |_, h| released.push(h)), 1);
    assert_eq!(released, vec!["burst"]);
    assert!(pool.get(typed).is_some());

    assert_eq!(pool.reap(2400.0, |_, h| released.push(h)), 1);
    assert!(pool.is_empty());
}

#[test]
fn pool_clear_releases_everything() {
    let mut pool: EffectPool<u8> = EffectPool::with_capacity(3).unwrap();
    pool.try_spawn(Effect::Typed(TypedText::new("a", 0.0)), |_| 1);
    pool.try_spawn(Effect::Typed(TypedText::new("b", 0.0)), |_| 2);
    let mut n = 0;
    pool.clear(|_, _| n += 1);
    assert_eq!(n, 2);
    assert!(pool.is_empty());
}

#[test]
fn zero_capacity_pool_is_an_error() {
    assert_eq!(
        EffectPool::<()>::with_capacity(0).err(),
        Some(ParamsError::PoolCapacity)
    );
}

#[test]
fn effect_piece_counts() {
    let mut rng = StdRng::seed_from_u64(8);
    assert_eq!(
        Effect::Burst(ParticleBurst::spawn((0.0, 0.0), 0.0, &mut rng)).piece_count(),
        BURST_PIECES
    );
    assert_eq!(
        Effect::Confetti(ConfettiBurst::spawn(0.0, &mut rng)).piece_count(),
        CONFETTI_PIECES
    );
    assert_eq!(Effect::Typed(TypedText::new("x", 0.0)).piece_count(), 1);
}
