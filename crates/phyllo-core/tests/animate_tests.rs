// Tests for the animation drivers and the sim-time guard.

use phyllo_core::*;
use std::time::Duration;

#[test]
fn sim_time_is_active_only_when_running_past_zero() {
    assert!(!SimTime::stopped().is_active());
    assert!(!SimTime::running(Duration::ZERO).is_active());
    assert!(SimTime::running(Duration::from_millis(16)).is_active());
    let paused = SimTime {
        running: false,
        elapsed: Duration::from_secs(3),
    };
    assert!(!paused.is_active());
}

#[test]
fn turn_animator_steps_only_when_enabled() {
    let mut tf = 0.5f32;
    TurnAnimator::default().advance(&mut tf);
    assert_eq!(tf, 0.5);

    let animator = TurnAnimator::default();
    assert!((animator.step_per_tick - TURN_STEP_PER_TICK).abs() < f32::EPSILON);

    let animator = TurnAnimator::new(0.25);
    for _ in 0..4 {
        animator.advance(&mut tf);
    }
    assert!((tf - 1.5).abs() < 1e-6);
}

#[test]
fn point_adder_adds_one_point_per_interval() {
    let mut adder = PointAdder::new(Duration::from_millis(250));
    let mut count = 10usize;
    assert_eq!(adder.tick(Duration::from_millis(100), &mut count), 0);
    assert_eq!(adder.tick(Duration::from_millis(200), &mut count), 1);
    assert_eq!(count, 11);
    // carries the 50 ms remainder
    assert_eq!(adder.tick(Duration::from_millis(200), &mut count), 1);
    assert_eq!(adder.tick(Duration::from_secs(1), &mut count), 4);
    assert_eq!(count, 16);
}

#[test]
fn default_point_adder_is_idle_at_three_per_second() {
    let mut adder = PointAdder::default();
    let mut count = 5usize;
    assert_eq!(adder.tick(Duration::from_secs(2), &mut count), 0);
    assert_eq!(count, 5);

    adder.enabled = true;
    for _ in 0..10 {
        adder.tick(Duration::from_millis(100), &mut count);
    }
    assert_eq!(count, 8);
}

#[test]
fn zero_interval_never_adds() {
    let mut adder = PointAdder::new(Duration::ZERO);
    let mut count = 1usize;
    assert_eq!(adder.tick(Duration::from_secs(1), &mut count), 0);
    assert_eq!(count, 1);
}
