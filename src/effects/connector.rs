use crate::{
    effects::{
        pose::{apply_exit, enter_progress},
        state::{EvalCtx, Extras, LayerDefect, VisualState},
    },
    foundation::{core::Point, math::clamp01},
    scene::model::{ConnectorLayer, DrawDirection, LineCap, LineStyle},
};
use kurbo::{BezPath, ParamCurveArclen};

const ARCLEN_ACCURACY: f64 = 1e-6;

/// Smooth path through `points`: quadratic segments with each interior point as the control
/// and the midpoints between them as joints.
pub fn midpoint_spline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    if rest.len() < 2 {
        if let Some(&p) = rest.first() {
            path.line_to(p);
        }
        return path;
    }
    let n = points.len();
    for i in 1..n - 2 {
        path.quad_to(points[i], points[i].midpoint(points[i + 1]));
    }
    path.quad_to(points[n - 2], points[n - 1]);
    path
}

/// Total length of the polyline (or midpoint spline when `curved`) through `points`.
pub fn compute_path_length(points: &[Point], curved: bool) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    if curved && points.len() > 2 {
        return midpoint_spline(points)
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum();
    }
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Dash pattern for a line style. Solid lines use one dash as long as the path so the
/// offset alone drives the draw-in.
pub fn dash_pattern(style: LineStyle, length: f64, stroke_width: f64) -> Vec<f64> {
    match style {
        LineStyle::Solid => vec![length, length],
        LineStyle::Dashed => vec![stroke_width * 4.0, stroke_width * 2.5],
        LineStyle::Dotted => vec![0.0, stroke_width * 2.0],
    }
}

/// Draw-in progress and dash state; non-finite endpoints are a defect.
pub fn evaluate_connector(
    layer: &ConnectorLayer,
    ctx: &EvalCtx,
) -> Result<VisualState, LayerDefect> {
    let mut points = Vec::with_capacity(layer.waypoints.len() + 2);
    for (i, c) in layer.points().iter().enumerate() {
        if !c.is_finite() {
            let at = match i {
                0 => "from",
                i if i == layer.waypoints.len() + 1 => "to",
                _ => "waypoints",
            };
            return Err(LayerDefect::NonFiniteCoordinate(at));
        }
        points.push(Point::new(c.x.0, c.y.0));
    }

    let p = clamp01(enter_progress(&layer.animation, ctx));
    let length = compute_path_length(&points, layer.curved);
    let offset = length * (1.0 - p);
    let dash_offset = match layer.direction {
        DrawDirection::Forward => offset,
        DrawDirection::Reverse => -offset,
    };
    let drawn = p > 0.0;

    let mut state = VisualState::visible();
    state.stroke_progress = Some(p);
    state = state.with_extras(Extras::Stroke {
        path_length: length,
        dash_array: dash_pattern(layer.line_style, length, layer.stroke_width),
        dash_offset,
        start_cap_visible: drawn && layer.start_cap != LineCap::None,
        end_cap_visible: drawn && layer.end_cap != LineCap::None,
    });
    apply_exit(&mut state, &layer.animation, ctx);
    Ok(state)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/connector.rs"]
mod tests;
