use super::*;

#[test]
fn eases_out_and_settles_on_target() {
    let mut v = AnimatedValue::new(0.0, 0.5);
    v.set_target(-100.0);
    assert!(v.is_animating());

    assert!(v.tick());
    assert_eq!(v.value(), -50.0);
    assert!(v.tick());
    assert_eq!(v.value(), -75.0);

    let mut ticks = 0;
    while v.tick() {
        ticks += 1;
        assert!(ticks < 100, "animation never settled");
    }
    assert_eq!(v.value(), -100.0);
    assert!(!v.is_animating());
    assert!(!v.tick());
}

#[test]
fn steps_shrink_every_frame() {
    let mut v = AnimatedValue::new(0.0, 0.35);
    v.set_target(370.0);
    let mut last = v.value();
    let mut last_step = f64::INFINITY;
    while v.tick() {
        let step = v.value() - last;
        assert!(step > 0.0);
        // The final tick snaps the leftover distance in one go.
        if v.is_animating() {
            assert!(step <= last_step);
            last_step = step;
        }
        last = v.value();
    }
}

#[test]
fn snap_to_skips_motion() {
    let mut v = AnimatedValue::new(1.0, 0.35).with_epsilon(0.05);
    v.snap_to(0.0);
    assert_eq!(v.value(), 0.0);
    assert_eq!(v.target(), 0.0);
    assert!(!v.tick());
}

#[test]
fn speed_is_clamped() {
    let mut v = AnimatedValue::new(0.0, 5.0);
    v.set_target(10.0);
    v.tick();
    assert_eq!(v.value(), 10.0);

    v.set_speed(0.0);
    v.set_target(0.0);
    v.tick();
    assert!((v.value() - 9.5).abs() < 1e-9);
}
