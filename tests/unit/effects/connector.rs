use super::*;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::model::CoordPair;
use kurbo::ParamCurve;

fn ctx(frame: f64) -> EvalCtx {
    EvalCtx::new(
        frame,
        60.0,
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

#[test]
fn polyline_length_sums_segments() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(3.0, 10.0),
    ];
    assert_eq!(compute_path_length(&pts, false), 11.0);
    assert_eq!(compute_path_length(&pts[..1], false), 0.0);
}

#[test]
fn curved_two_point_path_is_straight() {
    let pts = [Point::new(0.0, 0.0), Point::new(30.0, 40.0)];
    assert_eq!(compute_path_length(&pts, true), 50.0);
}

#[test]
fn curved_path_is_shorter_than_its_control_polygon() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
    ];
    let curved = compute_path_length(&pts, true);
    let straight = compute_path_length(&pts, false);
    assert!(curved < straight);
    assert!(curved > pts[0].distance(pts[2]));
}

#[test]
fn midpoint_spline_passes_through_endpoints() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 20.0),
        Point::new(30.0, 0.0),
        Point::new(50.0, 20.0),
    ];
    let path = midpoint_spline(&pts);
    let segs: Vec<_> = path.segments().collect();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].start(), pts[0]);
    assert_eq!(segs[1].end(), pts[3]);
}

#[test]
fn dash_offset_draws_in() {
    let layer = ConnectorLayer::new(CoordPair::new(0.0, 0.0), CoordPair::new(100.0, 0.0));
    let s = evaluate_connector(&layer, &ctx(10.0)).unwrap();
    assert_eq!(s.stroke_progress, Some(0.5));
    let Extras::Stroke {
        path_length,
        dash_array,
        dash_offset,
        ..
    } = s.extras
    else {
        panic!("expected stroke extras");
    };
    assert_eq!(path_length, 100.0);
    assert_eq!(dash_array, vec![100.0, 100.0]);
    assert_eq!(dash_offset, 50.0);
}

#[test]
fn reverse_negates_offset_and_caps_wait_for_progress() {
    let mut layer = ConnectorLayer::new(CoordPair::new(0.0, 0.0), CoordPair::new(0.0, 80.0));
    layer.direction = DrawDirection::Reverse;
    layer.end_cap = LineCap::Arrow;

    let start = evaluate_connector(&layer, &ctx(0.0)).unwrap();
    let Extras::Stroke {
        dash_offset,
        end_cap_visible,
        start_cap_visible,
        ..
    } = start.extras
    else {
        panic!("expected stroke extras");
    };
    assert_eq!(dash_offset, -80.0);
    assert!(!end_cap_visible);
    assert!(!start_cap_visible);

    let later = evaluate_connector(&layer, &ctx(1.0)).unwrap();
    let Extras::Stroke {
        end_cap_visible, ..
    } = later.extras
    else {
        panic!("expected stroke extras");
    };
    assert!(end_cap_visible);
}

#[test]
fn non_finite_endpoint_is_a_defect() {
    let layer = ConnectorLayer::new(CoordPair::new(f64::NAN, 0.0), CoordPair::new(1.0, 1.0));
    assert_eq!(
        evaluate_connector(&layer, &ctx(5.0)),
        Err(LayerDefect::NonFiniteCoordinate("from"))
    );
    let mut layer = ConnectorLayer::new(CoordPair::new(0.0, 0.0), CoordPair::new(1.0, 1.0));
    layer.waypoints.push(CoordPair::new(2.0, f64::INFINITY));
    assert_eq!(
        evaluate_connector(&layer, &ctx(5.0)),
        Err(LayerDefect::NonFiniteCoordinate("waypoints"))
    );
}

#[test]
fn dashed_and_dotted_patterns_scale_with_stroke() {
    assert_eq!(dash_pattern(LineStyle::Dashed, 500.0, 4.0), vec![16.0, 10.0]);
    assert_eq!(dash_pattern(LineStyle::Dotted, 500.0, 4.0), vec![0.0, 8.0]);
}
