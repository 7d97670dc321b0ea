use super::*;

fn scene() -> SceneSpec {
    SceneSpec::from_json(
        r#"{"meta": {"durationFrames": 120, "fps": 30, "width": 1280, "height": 720},
            "clips": [
              {"id": "a", "durationFrames": 80, "layers": [
                {"type": "background", "variant": "aurora"},
                {"type": "text", "id": "title", "text": "Glitchy",
                 "animation": {"enter": "glitch", "intensity": 1.5}},
                {"type": "text", "id": "words", "text": "one two three four",
                 "animation": {"enter": "stagger", "delay": [0, 3, 5], "variance": 2}}
              ]},
              {"id": "b", "startFrame": 60, "durationFrames": 60, "layers": [
                {"type": "text", "id": "count", "text": "0",
                 "animation": {"enter": "countup", "to": 1000000, "enterDurationFrames": 50}}
              ]}
            ]}"#,
    )
    .unwrap()
}

#[test]
fn sequential_keeps_request_order() {
    let frames = [5, 0, 119, 60, 200];
    let out = evaluate_frames(&scene(), &frames, &EvalThreading::default()).unwrap();
    let got: Vec<u64> = out.iter().map(|f| f.frame).collect();
    assert_eq!(got, frames);
    assert!(out[4].layers.is_empty());
}

#[test]
fn parallel_matches_sequential() {
    let s = scene();
    let frames: Vec<u64> = (0..120).collect();
    let seq = evaluate_frames(&s, &frames, &EvalThreading::default()).unwrap();
    let par = evaluate_frames(
        &s,
        &frames,
        &EvalThreading {
            parallel: true,
            chunk_size: 7,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let err = evaluate_frames(
        &scene(),
        &[0],
        &EvalThreading {
            parallel: true,
            chunk_size: 4,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, MotionError::Evaluation(_)));
}

#[test]
fn threading_defaults_from_empty_json() {
    let t: EvalThreading = serde_json::from_str("{}").unwrap();
    assert_eq!(t, EvalThreading::default());
    let t: EvalThreading = serde_json::from_str(r#"{"parallel": true, "chunkSize": 8}"#).unwrap();
    assert!(t.parallel);
    assert_eq!(t.chunk_size, 8);
}
