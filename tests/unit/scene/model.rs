use super::*;

#[test]
fn text_layer_parses_flattened_enter_params() {
    let layer: LayerSpec = serde_json::from_str(
        r#"{
            "type": "text",
            "id": "title",
            "zIndex": 2,
            "position": "center",
            "text": "HELLO",
            "animation": {
                "enter": "typewriter",
                "speed": 3,
                "cursor": false,
                "enterDurationFrames": 30,
                "feel": "snappy"
            }
        }"#,
    )
    .unwrap();
    assert_eq!(layer.id.as_deref(), Some("title"));
    assert_eq!(layer.z_index, 2);
    assert_eq!(layer.placement.position, Some(PositionPreset::Center));
    let LayerKind::Text(text) = &layer.kind else {
        panic!("expected text layer");
    };
    assert_eq!(text.text, "HELLO");
    assert_eq!(text.font_size, 64.0);
    let TextEnter::Typewriter(p) = &text.animation.enter else {
        panic!("expected typewriter");
    };
    assert_eq!(p.speed, 3.0);
    assert!(!p.cursor);
    assert_eq!(p.blink_period, 30.0);
    assert_eq!(text.animation.timing.enter_duration_frames, 30);
    assert_eq!(text.animation.timing.exit_duration_frames, 15);
    assert_eq!(text.animation.timing.feel, Some(Feel::Snappy));
}

#[test]
fn unit_enter_kinds_and_defaults() {
    let a: TextAnimation =
        serde_json::from_str(r#"{"enter": "slide_left", "distance": 80}"#).unwrap();
    assert_eq!(a.enter, TextEnter::SlideLeft);
    assert_eq!(a.timing.distance, Some(80.0));
    assert_eq!(a.timing.enter_duration_frames, 20);

    assert_eq!(TextAnimation::default().enter, TextEnter::None);
}

#[test]
fn layer_window_defaults_to_clip() {
    let layer: LayerSpec =
        serde_json::from_str(r#"{"type": "background", "variant": "aurora"}"#).unwrap();
    assert_eq!(layer.window(90), [0, 90]);
    assert_eq!(layer.kind_name(), "background");

    let layer: LayerSpec = serde_json::from_str(
        r#"{"type": "image", "startFrame": 10, "durationFrames": 30, "motion": "zoom_in"}"#,
    )
    .unwrap();
    assert_eq!(layer.window(90), [10, 40]);
}

#[test]
fn coords_are_lenient() {
    let conn: ConnectorLayer = serde_json::from_str(
        r#"{"from": [10, "20"], "to": {"x": "left", "y": 5}, "waypoints": [[1, 2]]}"#,
    )
    .unwrap();
    assert_eq!(conn.from, CoordPair::new(10.0, 20.0));
    assert!(conn.to.x.0.is_nan());
    assert!(!conn.to.is_finite());
    assert_eq!(conn.points().len(), 3);
}

#[test]
fn button_accepts_style_alias() {
    let b: ButtonLayer = serde_json::from_str(
        r#"{"label": "Go", "animation": {"style": "pop", "pulse": {"intensity": 0.1}}}"#,
    )
    .unwrap();
    assert_eq!(b.animation.style, ButtonStyle::Pop);
    let pulse = b.animation.pulse.unwrap();
    assert_eq!(pulse.intensity, 0.1);
    assert_eq!(pulse.period_frames, 45.0);
}

#[test]
fn generated_image_shares_image_fields() {
    let layer: LayerSpec = serde_json::from_str(
        r#"{"type": "generated_image", "prompt": "city", "deviceFrame": "iphone", "scale": 0.5}"#,
    )
    .unwrap();
    let LayerKind::GeneratedImage(img) = &layer.kind else {
        panic!("expected generated image");
    };
    assert_eq!(img.device_frame, Some(DeviceFrame::Iphone));
    assert_eq!(img.scale, 0.5);
    assert_eq!(img.motion, MotionCurve::Static);
}
