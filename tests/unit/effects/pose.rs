use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: f64) -> EvalCtx {
    EvalCtx::new(
        frame,
        60.0,
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1280,
            height: 720,
        },
    )
}

#[test]
fn none_style_is_fully_visible() {
    assert_eq!(
        entrance_pose(EntranceStyle::None, 0.0, 40.0),
        VisualState::visible()
    );
}

#[test]
fn overshooting_progress_clamps_opacity_only() {
    let s = entrance_pose(EntranceStyle::Pop, 1.2, 40.0);
    assert_eq!(s.opacity, 1.0);
    assert!((s.scale_x - 1.1).abs() < 1e-12);
}

#[test]
fn slide_offsets_oppose_travel() {
    let down = entrance_pose(EntranceStyle::Slide(Direction::Down), 0.5, 40.0);
    assert_eq!(down.translate_y, -20.0);
    let left = entrance_pose(EntranceStyle::Slide(Direction::Left), 0.0, 40.0);
    assert_eq!(left.translate_x, 40.0);
}

#[test]
fn exit_scale_shrinks_and_fades() {
    let anim = AnimationTiming {
        exit: Some(ExitKind::Scale),
        exit_duration_frames: 10,
        ..AnimationTiming::default()
    };
    let mut s = VisualState::visible();
    apply_exit(&mut s, &anim, &ctx(55.0));
    assert_eq!(s.opacity, 0.5);
    assert_eq!(s.scale_x, 0.9);
}

#[test]
fn exit_none_and_missing_exit_are_noops() {
    for exit in [None, Some(ExitKind::None)] {
        let anim = AnimationTiming {
            exit,
            ..AnimationTiming::default()
        };
        let mut s = VisualState::visible();
        apply_exit(&mut s, &anim, &ctx(59.0));
        assert_eq!(s, VisualState::visible());
    }
}
