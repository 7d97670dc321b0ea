use super::*;

fn scene(json: &str) -> SceneSpec {
    serde_json::from_str(json).unwrap()
}

fn paths(spec: &SceneSpec) -> Vec<String> {
    match validate_scene(spec) {
        Ok(()) => Vec::new(),
        Err(e) => e.errors.iter().map(|e| e.path_string()).collect(),
    }
}

#[test]
fn accepts_minimal_scene() {
    let s = scene(r#"{"meta": {"durationFrames": 90, "fps": 30, "width": 1920, "height": 1080}, "clips": []}"#);
    assert!(paths(&s).is_empty());
}

#[test]
fn reports_clip_paths() {
    let s = scene(
        r#"{
            "meta": {"durationFrames": 90, "fps": 30, "width": 1920, "height": 1080},
            "clips": [
                {"id": "a", "durationFrames": 30},
                {"id": "a", "durationFrames": 0}
            ]
        }"#,
    );
    let p = paths(&s);
    assert!(p.contains(&"$.clips[1].id".to_owned()));
    assert!(p.contains(&"$.clips[1].durationFrames".to_owned()));
}

#[test]
fn reports_nested_animation_paths() {
    let s = scene(
        r#"{
            "meta": {"durationFrames": 90, "fps": 30, "width": 1920, "height": 1080},
            "clips": [{"id": "a", "durationFrames": 30, "layers": [
                {"type": "text", "text": "x", "animation": {"enter": "typewriter", "speed": 0}},
                {"type": "image", "keyframes": [
                    {"frame": 10, "x": 50, "y": 50},
                    {"frame": 5, "x": 50, "y": 50}
                ]}
            ]}]
        }"#,
    );
    let p = paths(&s);
    assert_eq!(
        p,
        vec![
            "$.clips[0].layers[0].animation.speed".to_owned(),
            "$.clips[0].layers[1].keyframes[1].frame".to_owned(),
        ]
    );
}

#[test]
fn nan_connector_coordinates_are_not_schema_errors() {
    let s = scene(
        r#"{
            "meta": {"durationFrames": 90, "fps": 30, "width": 1920, "height": 1080},
            "clips": [{"id": "a", "durationFrames": 30, "layers": [
                {"type": "connector", "from": ["abc", 0], "to": [10, 10]}
            ]}]
        }"#,
    );
    assert!(paths(&s).is_empty());
}
