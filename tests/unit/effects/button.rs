use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: f64) -> EvalCtx {
    EvalCtx::new(
        frame,
        120.0,
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

fn button(style: ButtonStyle) -> ButtonLayer {
    let mut b = ButtonLayer::new("Start");
    b.animation.style = style;
    b
}

#[test]
fn entrance_styles_settle_to_identity() {
    for style in [
        ButtonStyle::Fade,
        ButtonStyle::Scale,
        ButtonStyle::Pop,
        ButtonStyle::Slide,
    ] {
        let s = evaluate_button(&button(style), &ctx(20.0));
        assert_eq!(s, VisualState::visible(), "{style:?}");
    }
}

#[test]
fn pop_starts_at_half_scale() {
    let s = evaluate_button(&button(ButtonStyle::Pop), &ctx(0.0));
    assert_eq!(s.scale_x, 0.5);
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn pulse_and_hover_multiply_onto_settled_pose() {
    let mut b = button(ButtonStyle::Scale);
    b.animation.pulse = Some(PulseSpec {
        intensity: 0.1,
        period_frames: 40.0,
    });
    b.animation.hover = Some(HoverSpec {
        at_frame: 50.0,
        scale: 1.2,
        nudge: 5.0,
        duration_frames: 10.0,
    });

    // Half a pulse period after settling, hover fully engaged.
    let s = evaluate_button(&b, &ctx(60.0));
    let pulse = pulse_factor(b.animation.pulse.as_ref().unwrap(), 40.0);
    assert!((pulse - 1.0).abs() < 1e-12);
    let s2 = evaluate_button(&b, &ctx(40.0));
    let expected = pulse_factor(b.animation.pulse.as_ref().unwrap(), 20.0);
    assert!((s2.scale_x - expected).abs() < 1e-12);
    assert!((s.scale_x - 1.2).abs() < 1e-12);
    assert_eq!(s.translate_y, -5.0);
}

#[test]
fn no_idle_motion_before_settle() {
    let mut b = button(ButtonStyle::Fade);
    b.animation.pulse = Some(PulseSpec {
        intensity: 0.5,
        period_frames: 10.0,
    });
    let s = evaluate_button(&b, &ctx(15.0));
    assert_eq!(s.scale_x, 1.0);
}

#[test]
fn hover_ramps_in() {
    let hover = HoverSpec {
        at_frame: 10.0,
        scale: 1.1,
        nudge: 4.0,
        duration_frames: 8.0,
    };
    assert_eq!(hover_pose(&hover, 5.0), (1.0, 0.0));
    assert_eq!(hover_pose(&hover, 18.0), (1.1, -4.0));
}
