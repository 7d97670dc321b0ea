use super::*;

fn all_presets() -> Vec<Ease> {
    PRESETS.iter().map(|(_, e)| *e).collect()
}

#[test]
fn endpoints_are_stable() {
    for ease in all_presets() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
    let custom = Ease::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
    assert_eq!(custom.apply(0.0), 0.0);
    assert_eq!(custom.apply(1.0), 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(7.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn standard_curves_are_monotonic() {
    for ease in all_presets().into_iter().filter(|e| !e.overshoots()) {
        if ease == Ease::Bounce {
            continue;
        }
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v + 1e-9 >= prev, "{ease:?} dipped at {i}");
            prev = v;
        }
    }
}

#[test]
fn overshoot_and_anticipate_leave_unit_range() {
    let peak = (1..100)
        .map(|i| Ease::Overshoot.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    let dip = (1..100)
        .map(|i| Ease::Anticipate.apply(i as f64 / 100.0))
        .fold(f64::MAX, f64::min);
    assert!(dip < 0.0);
}

#[test]
fn css_ease_in_out_is_symmetric() {
    let a = Ease::EaseInOut.apply(0.25);
    let b = Ease::EaseInOut.apply(0.75);
    assert!((a + b - 1.0).abs() < 1e-6);
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn parses_names_arrays_and_objects() {
    let v: Ease = serde_json::from_str("\"ease-in-out\"").unwrap();
    assert_eq!(v, Ease::EaseInOut);
    let v: Ease = serde_json::from_str("\"sharp_snap\"").unwrap();
    assert_eq!(v, Ease::SharpSnap);
    let v: Ease = serde_json::from_str("[0.25, 0.1, 0.25, 1.0]").unwrap();
    assert!(matches!(v, Ease::CubicBezier { .. }));
    let v: Ease = serde_json::from_str(r#"{"cubicBezier": [0, 0, 1, 1]}"#).unwrap();
    assert!((v.apply(0.3) - 0.3).abs() < 1e-6);
    assert!(serde_json::from_str::<Ease>("\"wobbly\"").is_err());
}

#[test]
fn serializes_presets_by_name() {
    assert_eq!(serde_json::to_string(&Ease::Bounce).unwrap(), "\"bounce\"");
    let custom = Ease::CubicBezier {
        x1: 0.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert_eq!(
        serde_json::to_string(&custom).unwrap(),
        "[0.5,0.0,0.5,1.0]"
    );
}

#[test]
fn bezier_easing_wraps_curve() {
    let f = bezier_easing(Ease::OutQuad);
    assert_eq!(f(0.5), 0.75);
}
