use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: f64) -> EvalCtx {
    EvalCtx::new(
        frame,
        90.0,
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

fn layer(json: &str) -> LayerSpec {
    serde_json::from_str(json).unwrap()
}

#[test]
fn dispatches_by_layer_kind() {
    let text = layer(r#"{"type": "text", "text": "HELLO", "animation": {"enter": "fade"}}"#);
    assert_eq!(evaluate_layer(&text, &ctx(10.0)).unwrap().opacity, 0.5);

    let bg = layer(r#"{"type": "background", "variant": "grid"}"#);
    assert!(matches!(
        evaluate_layer(&bg, &ctx(10.0)).unwrap().extras,
        state::Extras::Background { .. }
    ));
}

#[test]
fn defects_become_none() {
    let conn = layer(r#"{"type": "connector", "from": ["nope", 0], "to": [10, 10]}"#);
    assert!(evaluate_layer(&conn, &ctx(10.0)).is_none());
    assert_eq!(
        try_evaluate_layer(&conn, &ctx(10.0)),
        Err(LayerDefect::NonFiniteCoordinate("from"))
    );
}

#[test]
fn non_finite_output_is_a_defect() {
    let text = layer(
        r#"{"type": "text", "text": "x", "animation": {"enter": "wave", "frequency": 1e308, "spread": 1e308}}"#,
    );
    assert!(try_evaluate_layer(&text, &ctx(10.0)).is_err());
}
