use super::*;

#[test]
fn visible_state_serializes_compactly() {
    let json = serde_json::to_value(VisualState::visible()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "opacity": 1.0,
            "translateX": 0.0,
            "translateY": 0.0,
            "scaleX": 1.0,
            "scaleY": 1.0,
        })
    );
}

#[test]
fn extras_are_tagged_by_kind() {
    let s = VisualState::visible().with_extras(Extras::Countup {
        value: 5.0,
        text: "5".to_owned(),
    });
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["extras"]["kind"], "countup");
    assert_eq!(json["extras"]["text"], "5");
}

#[test]
fn finiteness_covers_extras() {
    assert!(VisualState::visible().is_finite());
    let mut s = VisualState::visible();
    s.blur = Some(f64::NAN);
    assert!(!s.is_finite());
    let s = VisualState::visible().with_extras(Extras::Stroke {
        path_length: f64::INFINITY,
        dash_array: vec![],
        dash_offset: 0.0,
        start_cap_visible: false,
        end_cap_visible: false,
    });
    assert!(!s.is_finite());
}

#[test]
fn motion_offsets_compose() {
    let mut s = VisualState::visible();
    s.translate_x = 10.0;
    s.apply_motion(MotionOffset {
        dx: 2.0,
        dy: -3.0,
        scale_factor: 1.5,
        opacity_factor: 0.5,
    });
    assert_eq!(s.translate_x, 12.0);
    assert_eq!(s.translate_y, -3.0);
    assert_eq!(s.scale_x, 1.5);
    assert_eq!(s.opacity, 0.5);
}
