//! Unboxing domain: tests for the shake guard, timer and keyframes.

use std::time::Duration;

use super::{BoxPose, BoxShake, SHAKE_CYCLE_SECS, shake_pose};

const DELAY: Duration = Duration::from_millis(1000);

// -----------------------------------------------------------------------------
// BoxShake tests
// -----------------------------------------------------------------------------

#[test]
fn test_box_shake_default_state() {
    let shake = BoxShake::default();
    assert!(!shake.is_started());
    assert!(!shake.is_shaking());
    assert_eq!(shake.elapsed_secs(), 0.0);
}

#[test]
fn test_second_tap_while_shaking_is_ignored() {
    let mut shake = BoxShake::default();
    assert!(shake.begin(DELAY));
    assert!(!shake.begin(DELAY));
    assert!(shake.is_shaking());
}

#[test]
fn test_repeated_taps_fire_once() {
    let mut shake = BoxShake::default();
    let mut fired = 0;

    for _ in 0..30 {
        shake.begin(DELAY);
        if shake.tick(Duration::from_millis(100)) {
            fired += 1;
        }
    }

    assert_eq!(fired, 1);
}

#[test]
fn test_shake_does_not_fire_early() {
    let mut shake = BoxShake::default();
    shake.begin(DELAY);

    assert!(!shake.tick(Duration::from_millis(500)));
    assert!(!shake.tick(Duration::from_millis(499)));
    assert!(shake.is_shaking());
    assert!(shake.tick(Duration::from_millis(1)));
    assert!(!shake.is_shaking());
}

#[test]
fn test_shake_fires_on_large_tick() {
    let mut shake = BoxShake::default();
    shake.begin(DELAY);
    assert!(shake.tick(Duration::from_secs(5)));
    assert!(!shake.tick(Duration::from_secs(5)));
}

#[test]
fn test_tick_without_tap_never_fires() {
    let mut shake = BoxShake::default();
    assert!(!shake.tick(Duration::from_secs(10)));
    assert!(!shake.is_started());
}

#[test]
fn test_finished_shake_blocks_new_taps_until_reset() {
    let mut shake = BoxShake::default();
    shake.begin(DELAY);
    shake.tick(DELAY);

    assert!(!shake.begin(DELAY));

    shake.reset();
    assert!(shake.begin(DELAY));
}

// -----------------------------------------------------------------------------
// Keyframe tests
// -----------------------------------------------------------------------------

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_shake_pose_hits_keyframes() {
    let step = SHAKE_CYCLE_SECS / 6.0;

    let start = shake_pose(0.0);
    assert_close(start.rotation_deg, -5.0);
    assert_close(start.scale, 1.0);

    let first = shake_pose(step);
    assert_close(first.rotation_deg, 5.0);
    assert_close(first.scale, 1.1);

    let fifth = shake_pose(step * 5.0);
    assert!(fifth.rotation_deg > 4.9);
}

#[test]
fn test_shake_pose_interpolates_between_keyframes() {
    let step = SHAKE_CYCLE_SECS / 6.0;
    let mid = shake_pose(step / 2.0);
    assert_close(mid.rotation_deg, 0.0);
    assert_close(mid.scale, 1.05);
}

#[test]
fn test_shake_pose_repeats_each_cycle() {
    for elapsed in [0.03, 0.12, 0.27, 0.41] {
        let a = shake_pose(elapsed);
        let b = shake_pose(elapsed + SHAKE_CYCLE_SECS);
        assert_close(a.rotation_deg, b.rotation_deg);
        assert_close(a.scale, b.scale);
    }
}

#[test]
fn test_shake_pose_stays_in_bounds() {
    for i in 0..200 {
        let pose = shake_pose(i as f32 * 0.0137);
        assert!((-5.0..=5.0).contains(&pose.rotation_deg));
        assert!((1.0..=1.1 + 1e-6).contains(&pose.scale));
    }
}

#[test]
fn test_idle_pose() {
    assert_eq!(BoxPose::IDLE.rotation_deg, 0.0);
    assert_eq!(BoxPose::IDLE.scale, 1.0);
}
