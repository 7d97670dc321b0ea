use super::*;

fn scene(clips: &str) -> SceneSpec {
    SceneSpec::from_json(&format!(
        r#"{{"meta": {{"durationFrames": 90, "fps": 30, "width": 1920, "height": 1080}},
            "clips": {clips}}}"#
    ))
    .unwrap()
}

fn hello() -> SceneSpec {
    scene(
        r#"[{"id": "intro", "durationFrames": 90, "layers": [
            {"type": "text", "id": "hello", "text": "HELLO",
             "animation": {"enter": "fade", "enterDurationFrames": 20}}
        ]}]"#,
    )
}

fn opacity_of(out: &FrameOutput, id: &str) -> f64 {
    out.layer(id).unwrap().state.opacity
}

#[test]
fn hello_fade_scenario() {
    let s = hello();
    assert_eq!(opacity_of(&evaluate_frame(&s, 0), "hello"), 0.0);
    assert_eq!(opacity_of(&evaluate_frame(&s, 10), "hello"), 0.5);
    assert_eq!(opacity_of(&evaluate_frame(&s, 20), "hello"), 1.0);
    assert_eq!(opacity_of(&evaluate_frame(&s, 89), "hello"), 1.0);

    let past = evaluate_frame(&s, 90);
    assert_eq!(past.frame, 90);
    assert!(past.layers.is_empty());
    assert!(past.diagnostics.is_empty());
}

#[test]
fn layers_sort_by_z_then_clip_then_declaration() {
    let s = scene(
        r#"[
            {"id": "a", "durationFrames": 90, "layers": [
                {"type": "background", "id": "a0", "zIndex": 2},
                {"type": "background", "id": "a1", "zIndex": 0},
                {"type": "background", "id": "a2", "zIndex": 2}
            ]},
            {"id": "b", "durationFrames": 90, "layers": [
                {"type": "background", "id": "b0", "zIndex": 0}
            ]}
        ]"#,
    );
    let out = evaluate_frame(&s, 5);
    let ids: Vec<_> = out
        .layers
        .iter()
        .map(|l| l.layer_id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, ["a1", "b0", "a0", "a2"]);
    assert_eq!(out.layers[2].stacking_index, 2);
    assert_eq!(out.layers[1].clip_id, "b");
}

#[test]
fn clips_only_show_inside_their_window() {
    let s = scene(
        r#"[{"id": "late", "startFrame": 30, "durationFrames": 30, "layers": [
            {"type": "background", "id": "bg"}
        ]}]"#,
    );
    assert!(evaluate_frame(&s, 29).layers.is_empty());
    assert!(evaluate_frame(&s, 30).layer("bg").is_some());
    assert!(evaluate_frame(&s, 59).layer("bg").is_some());
    assert!(evaluate_frame(&s, 60).layers.is_empty());
}

#[test]
fn layer_window_and_persist() {
    let s = scene(
        r#"[{"id": "c", "durationFrames": 90, "layers": [
            {"type": "text", "id": "brief", "text": "Brief", "startFrame": 10, "durationFrames": 20,
             "animation": {"enter": "fade", "enterDurationFrames": 10, "exit": "fade"}},
            {"type": "text", "id": "kept", "text": "Kept", "startFrame": 10, "durationFrames": 20,
             "persist": true,
             "animation": {"enter": "fade", "enterDurationFrames": 10, "exit": "fade"}}
        ]}]"#,
    );
    let pre = evaluate_frame(&s, 5);
    assert!(pre.layer("brief").is_none());
    assert!(pre.layer("kept").is_none());

    let active = evaluate_frame(&s, 15);
    assert_eq!(opacity_of(&active, "brief"), 0.5);

    let post = evaluate_frame(&s, 40);
    assert!(post.layer("brief").is_none());
    assert_eq!(opacity_of(&post, "kept"), 1.0);
}

#[test]
fn clip_fade_multiplies_layer_opacity() {
    let s = scene(
        r#"[{"id": "c", "durationFrames": 40,
             "enterTransition": {"type": "fade", "durationFrames": 10, "easing": "linear"},
             "exitTransition": {"type": "fade", "durationFrames": 10, "easing": "linear"},
             "layers": [
                {"type": "text", "id": "t", "text": "Hi",
                 "animation": {"enter": "fade", "enterDurationFrames": 20}}
             ]}]"#,
    );
    // 0.5 from the clip times 0.25 from the layer.
    assert!((opacity_of(&evaluate_frame(&s, 5), "t") - 0.125).abs() < 1e-12);
    assert_eq!(opacity_of(&evaluate_frame(&s, 20), "t"), 1.0);
    assert!((opacity_of(&evaluate_frame(&s, 35), "t") - 0.5).abs() < 1e-12);
}

#[test]
fn slide_and_zoom_transitions() {
    let s = scene(
        r#"[{"id": "c", "durationFrames": 40,
             "enterTransition": {"type": "slide_up", "durationFrames": 10, "easing": "linear",
                                 "distance": 100},
             "exitTransition": {"type": "zoom", "durationFrames": 10, "easing": "linear"},
             "layers": [{"type": "background", "id": "bg"}]}]"#,
    );
    let entering = evaluate_frame(&s, 5).layer("bg").unwrap().state.clone();
    assert!((entering.translate_y - 50.0).abs() < 1e-12);
    assert_eq!(entering.translate_x, 0.0);
    assert!((entering.opacity - 0.5).abs() < 1e-12);

    let exiting = evaluate_frame(&s, 35).layer("bg").unwrap().state.clone();
    assert!((exiting.scale_x - 0.95).abs() < 1e-12);
    assert!((exiting.opacity - 0.5).abs() < 1e-12);

    let rest = evaluate_frame(&s, 20).layer("bg").unwrap().state.clone();
    assert_eq!(rest.translate_y, 0.0);
    assert_eq!(rest.scale_x, 1.0);
}

#[test]
fn compose_scales_then_offsets() {
    let pose = ClipPose {
        opacity: 0.5,
        translate_x: 10.0,
        translate_y: -4.0,
        scale: 2.0,
    };
    let mut state = VisualState::visible();
    state.translate_x = 3.0;
    state.translate_y = 1.0;
    state.opacity = 0.5;
    let out = pose.compose(state);
    assert_eq!(out.translate_x, 16.0);
    assert_eq!(out.translate_y, -2.0);
    assert_eq!(out.scale_x, 2.0);
    assert_eq!(out.opacity, 0.25);
}

#[test]
fn defective_layers_become_diagnostics() {
    let s = scene(
        r#"[{"id": "c", "durationFrames": 90, "layers": [
            {"type": "background", "id": "bg"},
            {"type": "connector", "id": "arrow", "from": ["left", 0], "to": [100, 100]}
        ]}]"#,
    );
    let out = evaluate_frame(&s, 10);
    assert!(out.layer("bg").is_some());
    assert!(out.layer("arrow").is_none());
    assert_eq!(out.diagnostics.len(), 1);
    let d = &out.diagnostics[0];
    assert_eq!(d.kind, EvalDiagnosticKind::LayerEvaluationDefect);
    assert_eq!(d.clip_id, "c");
    assert_eq!(d.layer_index, 1);
    assert_eq!(d.layer_id.as_deref(), Some("arrow"));
    assert!(d.message.contains("from"), "{}", d.message);

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["diagnostics"][0]["kind"], "layer_evaluation_defect");
    assert_eq!(json["diagnostics"][0]["layerIndex"], 1);
}

#[test]
fn output_serializes_camel_case() {
    let json = serde_json::to_value(evaluate_frame(&hello(), 10)).unwrap();
    assert_eq!(json["frame"], 10);
    assert_eq!(json["layers"][0]["layerId"], "hello");
    assert_eq!(json["layers"][0]["clipId"], "intro");
    assert_eq!(json["layers"][0]["stackingIndex"], 0);
    assert_eq!(json["layers"][0]["state"]["opacity"], 0.5);
    assert!(json.get("diagnostics").is_none());
}

#[test]
fn evaluation_is_repeatable() {
    let s = hello();
    for f in [0, 7, 13, 45] {
        assert_eq!(evaluate_frame(&s, f), evaluate_frame(&s, f));
    }
}
