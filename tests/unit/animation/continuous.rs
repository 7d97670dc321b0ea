use super::*;

fn spec(kind: ContinuousKind, axis: MotionAxis) -> ContinuousMotion {
    ContinuousMotion {
        kind,
        intensity: 1.0,
        speed: 1.0,
        axis,
    }
}

const ALL: [ContinuousKind; 5] = [
    ContinuousKind::Oscillate,
    ContinuousKind::Pulse,
    ContinuousKind::Drift,
    ContinuousKind::Breathe,
    ContinuousKind::Float,
];

#[test]
fn starts_at_identity() {
    for kind in ALL {
        let m = continuous_motion(0.0, &spec(kind, MotionAxis::Both));
        assert!(m.dx.abs() < 1e-12, "{kind:?}");
        assert!(m.dy.abs() < 1e-12, "{kind:?}");
        assert!((m.scale_factor - 1.0).abs() < 1e-12);
        assert!((m.opacity_factor - 1.0).abs() < 1e-12);
    }
}

#[test]
fn negative_elapsed_is_identity() {
    for kind in ALL {
        assert_eq!(
            continuous_motion(-4.0, &spec(kind, MotionAxis::Y)),
            MotionOffset::IDENTITY
        );
    }
}

#[test]
fn periodic_with_base_period() {
    let s = spec(ContinuousKind::Oscillate, MotionAxis::Y);
    let a = continuous_motion(13.0, &s);
    let b = continuous_motion(13.0 + BASE_PERIOD_FRAMES, &s);
    assert!((a.dy - b.dy).abs() < 1e-9);

    let fast = ContinuousMotion { speed: 2.0, ..s };
    let c = continuous_motion(13.0 + BASE_PERIOD_FRAMES / 2.0, &fast);
    assert!((continuous_motion(13.0, &fast).dy - c.dy).abs() < 1e-9);
}

#[test]
fn axis_gates_translation() {
    let m = continuous_motion(10.0, &spec(ContinuousKind::Oscillate, MotionAxis::X));
    assert_eq!(m.dy, 0.0);
    assert!(m.dx != 0.0);
    let m = continuous_motion(10.0, &spec(ContinuousKind::Float, MotionAxis::Y));
    assert_eq!(m.dx, 0.0);
    assert!(m.dy < 0.0);
}

#[test]
fn breathe_has_no_net_drift() {
    let s = spec(ContinuousKind::Breathe, MotionAxis::Both);
    for f in 0..120 {
        let m = continuous_motion(f as f64, &s);
        assert_eq!((m.dx, m.dy), (0.0, 0.0));
        assert!(m.scale_factor >= 1.0 && m.scale_factor <= 1.02 + 1e-12);
        assert!(m.opacity_factor <= 1.0);
    }
}

#[test]
fn parses_with_defaults() {
    let m: ContinuousMotion = serde_json::from_str(r#"{"type": "pulse"}"#).unwrap();
    assert_eq!(m.kind, ContinuousKind::Pulse);
    assert_eq!(m.intensity, 1.0);
    assert_eq!(m.speed, 1.0);
    assert_eq!(m.axis, MotionAxis::Y);
}
