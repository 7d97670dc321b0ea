use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn linear_progress_clamps_by_default() {
    assert_eq!(linear_progress(-5.0, [0.0, 20.0], false), 0.0);
    assert_eq!(linear_progress(10.0, [0.0, 20.0], false), 0.5);
    assert_eq!(linear_progress(30.0, [0.0, 20.0], false), 1.0);
}

#[test]
fn linear_progress_extrapolates_on_request() {
    assert_eq!(linear_progress(30.0, [0.0, 20.0], true), 1.5);
    assert_eq!(linear_progress(-10.0, [0.0, 20.0], true), -0.5);
}

#[test]
fn zero_length_window_is_a_step() {
    assert_eq!(linear_progress(4.0, [5.0, 5.0], false), 0.0);
    assert_eq!(linear_progress(5.0, [5.0, 5.0], false), 1.0);
}

#[test]
fn resolution_precedence() {
    let spring = SpringConfig::new(10.0, 100.0, 1.0);
    assert_eq!(
        Timing::resolve(Some(spring), Some(Feel::Bouncy), Some(Ease::EaseIn)),
        Timing::Spring(spring)
    );
    assert_eq!(
        Timing::resolve(None, Some(Feel::Bouncy), Some(Ease::EaseIn)),
        Timing::Spring(Feel::Bouncy.spring())
    );
    assert_eq!(
        Timing::resolve(None, None, Some(Ease::EaseIn)),
        Timing::Eased(Ease::EaseIn)
    );
    assert_eq!(Timing::resolve(None, None, None), Timing::Linear);
}

#[test]
fn every_timing_reaches_exactly_one_at_window_end() {
    for timing in [
        Timing::Linear,
        Timing::Eased(Ease::EaseOut),
        Timing::Eased(Ease::Elastic),
        Timing::Spring(Feel::Smooth.spring()),
        Timing::Spring(Feel::Bouncy.spring()),
    ] {
        assert_eq!(timing.progress(0.0, 20.0, fps30()), 0.0);
        assert_eq!(timing.progress(20.0, 20.0, fps30()), 1.0);
        assert_eq!(timing.progress(500.0, 20.0, fps30()), 1.0);
        assert_eq!(timing.progress(-3.0, 20.0, fps30()), 0.0);
    }
}

#[test]
fn non_overshoot_spring_is_monotonic_inside_window() {
    let timing = Timing::Spring(Feel::Gentle.spring());
    assert!(!timing.overshoots());
    let mut prev = 0.0;
    for f in 0..=24 {
        let p = timing.progress(f as f64, 24.0, fps30());
        assert!(p >= prev);
        assert!(p <= 1.0);
        prev = p;
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn bouncy_spring_overshoots_inside_window() {
    let timing = Timing::Spring(Feel::Bouncy.spring());
    assert!(timing.overshoots());
    let peak = (0..30)
        .map(|f| timing.progress(f as f64, 30.0, fps30()))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn spring_timing_is_settled_just_before_window_end() {
    for feel in [Feel::Smooth, Feel::Gentle, Feel::Heavy, Feel::Elastic] {
        let timing = Timing::Spring(feel.spring());
        let late = timing.progress(24.0 - 1e-6, 24.0, fps30());
        assert!((1.0 - late).abs() < 0.006, "{feel:?} jumps from {late}");
    }
}
