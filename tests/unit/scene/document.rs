use super::*;

#[test]
fn from_json_surfaces_first_schema_path() {
    let err = SceneSpec::from_json(
        r#"{
            "meta": {"durationFrames": 0, "fps": 30, "width": 1920, "height": 1080},
            "clips": [{"id": "", "durationFrames": 10}]
        }"#,
    )
    .unwrap_err();
    match err {
        MotionError::SchemaViolation { path, message } => {
            assert_eq!(path, "$.meta.durationFrames");
            assert!(message.contains("and 1 more"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_a_schema_violation() {
    let err = SceneSpec::from_json(r#"{"meta": {"durationFrames": 10}"#).unwrap_err();
    assert!(err.is_schema_violation());
}

fn schema_path(json: &str) -> (String, String) {
    match SceneSpec::from_json(json).unwrap_err() {
        MotionError::SchemaViolation { path, message } => (path, message),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_layer_type_reports_its_layer() {
    let (path, message) = schema_path(
        r#"{
            "meta": {"durationFrames": 10, "fps": 30, "width": 100, "height": 100},
            "clips": [{"id": "a", "durationFrames": 10, "layers": [
                {"type": "text", "text": "ok"},
                {"type": "hologram"}
            ]}]
        }"#,
    );
    assert_eq!(path, "$.clips[0].layers[1]");
    assert!(message.contains("hologram"), "{message}");
}

#[test]
fn mistyped_clip_field_reports_the_field() {
    let (path, _) = schema_path(
        r#"{
            "meta": {"durationFrames": 10, "fps": 30, "width": 100, "height": 100},
            "clips": [{"id": "a", "durationFrames": "thirty"}]
        }"#,
    );
    assert_eq!(path, "$.clips[0].durationFrames");
}

#[test]
fn missing_connector_endpoint_reports_its_layer() {
    let (path, message) = schema_path(
        r#"{
            "meta": {"durationFrames": 10, "fps": 30, "width": 100, "height": 100},
            "clips": [
                {"id": "a", "durationFrames": 10},
                {"id": "b", "durationFrames": 10, "layers": [
                    {"type": "connector", "from": {"x": 0, "y": 0}}
                ]}
            ]
        }"#,
    );
    assert_eq!(path, "$.clips[1].layers[0]");
    assert!(message.contains("`to`"), "{message}");
}

#[test]
fn mistyped_meta_field_reports_the_field() {
    let (path, _) = schema_path(
        r#"{"meta": {"durationFrames": 10, "fps": 30, "width": -1, "height": 100}, "clips": []}"#,
    );
    assert_eq!(path, "$.meta.width");
}

#[test]
fn trailing_garbage_is_rejected() {
    let err = SceneSpec::from_json(
        r#"{"meta": {"durationFrames": 10, "fps": 30, "width": 10, "height": 10}} extra"#,
    )
    .unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn json_round_trip_preserves_structure() {
    let json = r#"{
        "meta": {"durationFrames": 60, "fps": {"num": 30000, "den": 1001}, "width": 1280, "height": 720},
        "clips": [{"id": "intro", "durationFrames": 60, "layers": [
            {"type": "text", "text": "Hi", "animation": {"enter": "countup", "to": 10, "suffix": "%"}}
        ]}]
    }"#;
    let spec = SceneSpec::from_json(json).unwrap();
    let again = SceneSpec::from_json(&spec.to_json().unwrap()).unwrap();
    assert_eq!(again.meta.fps.num, 30000);
    assert_eq!(again.clips[0].layers.len(), 1);
}
