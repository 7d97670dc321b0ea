//! Bounding-box estimation without a text shaper or decoded images.
//!
//! Text uses a per-weight average glyph width, images use nominal device-frame sizes, and
//! everything is placed against the canvas using the layer's placement fields.

use crate::{
    foundation::core::{Canvas, Rect},
    layout::validator::ValidatorConfig,
    scene::model::{
        Anchor, ButtonLayer, DeviceFrame, ImageLayer, LayerKind, LayerSpec, Placement,
        PositionPreset, TextLayer,
    },
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Axis-aligned box in canvas pixels.
pub struct BoundingBox {
    /// Left edge x.
    pub left: f64,
    /// Top edge y.
    pub top: f64,
    /// Right edge x.
    pub right: f64,
    /// Bottom edge y.
    pub bottom: f64,
    /// `right - left`.
    pub width: f64,
    /// `bottom - top`.
    pub height: f64,
    /// Horizontal center.
    pub center_x: f64,
    /// Vertical center.
    pub center_y: f64,
}

impl BoundingBox {
    /// Box with its top-left corner at `(left, top)`.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
        }
    }

    /// Box covering a kurbo rect.
    pub fn from_rect(r: Rect) -> Self {
        Self::from_origin_size(r.x0, r.y0, r.width(), r.height())
    }

    /// The same box as a kurbo rect.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Shared area, or 0 unless the boxes intersect with positive extent on both axes.
    pub fn overlap_area(&self, other: &Self) -> f64 {
        let i = self.rect().intersect(other.rect());
        if i.width() > 0.0 && i.height() > 0.0 {
            i.area()
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// How much the estimated size can be trusted.
pub enum Confidence {
    /// No real size information; the box is a placeholder.
    Low,
    /// Derived from approximate metrics or nominal sizes.
    Medium,
    /// Declared explicitly or fixed by definition.
    High,
}

/// Average glyph width as a fraction of the font size.
pub fn weight_ratio(weight: u32) -> f64 {
    match weight {
        0..=300 => 0.50,
        301..=500 => 0.55,
        501..=700 => 0.60,
        _ => 0.65,
    }
}

/// Estimated `(width, height)` of a text block.
///
/// Width follows the longest explicit line. When it exceeds `maxWidth`, every line wraps
/// into `ceil(width / maxWidth)` rows and width clamps to `maxWidth`.
pub fn text_size(text: &TextLayer, width_fudge: f64) -> (f64, f64) {
    let longest = text.text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut lines = text.text.lines().count().max(1) as f64;
    let mut width =
        longest as f64 * text.font_size * weight_ratio(text.font_weight) * width_fudge;
    if let Some(max) = text.max_width
        && max > 0.0
        && width > max
    {
        lines *= (width / max).ceil();
        width = max;
    }
    (width, text.font_size * text.line_height * lines)
}

/// Nominal outer size of a device mockup at scale 1.
pub fn device_size(frame: DeviceFrame) -> (f64, f64) {
    match frame {
        DeviceFrame::Phone => (375.0, 812.0),
        DeviceFrame::Iphone => (390.0, 844.0),
        DeviceFrame::Android => (412.0, 915.0),
        DeviceFrame::Tablet => (768.0, 1024.0),
        DeviceFrame::Ipad => (820.0, 1180.0),
        DeviceFrame::Laptop => (1280.0, 800.0),
        DeviceFrame::Macbook => (1440.0, 900.0),
        DeviceFrame::Browser => (1280.0, 800.0),
        DeviceFrame::Desktop => (1920.0, 1080.0),
    }
}

fn image_size(img: &ImageLayer, canvas: Canvas) -> ((f64, f64), Confidence) {
    match img.device_frame {
        Some(frame) => {
            let (w, h) = device_size(frame);
            ((w * img.scale, h * img.scale), Confidence::Medium)
        }
        None => (
            (canvas.w() * img.scale, canvas.h() * img.scale),
            Confidence::Low,
        ),
    }
}

fn button_size(b: &ButtonLayer, config: &ValidatorConfig) -> ((f64, f64), Confidence) {
    let confidence = if b.width.is_some() && b.height.is_some() {
        Confidence::High
    } else {
        Confidence::Medium
    };
    (
        (
            b.width.unwrap_or(config.button_width),
            b.height.unwrap_or(config.button_height),
        ),
        confidence,
    )
}

fn anchor_fraction(anchor: Anchor) -> (f64, f64) {
    match anchor {
        Anchor::Center => (0.5, 0.5),
        Anchor::TopLeft => (0.0, 0.0),
        Anchor::TopRight => (1.0, 0.0),
        Anchor::BottomLeft => (0.0, 1.0),
        Anchor::BottomRight => (1.0, 1.0),
    }
}

/// Top-left corner of a `w` x `h` box placed on `canvas`.
///
/// Explicit `x`/`y` percentages win and place the anchor point; a missing axis is centered and
/// the anchor defaults to the box center. A preset names a point on the margin-inset edge (or
/// the canvas center on that axis). Without an anchor the box edge matching the preset sits on
/// that point, so `top_left` hugs the top-left margin corner.
pub fn resolve_origin(
    placement: &Placement,
    w: f64,
    h: f64,
    canvas: Canvas,
    margin_ratio: f64,
) -> (f64, f64) {
    let (cw, ch) = (canvas.w(), canvas.h());
    if placement.x.is_some() || placement.y.is_some() {
        let px = placement.x.unwrap_or(50.0) / 100.0 * cw;
        let py = placement.y.unwrap_or(50.0) / 100.0 * ch;
        let (fx, fy) = anchor_fraction(placement.anchor.unwrap_or_default());
        return (px - fx * w, py - fy * h);
    }

    let (mx, my) = (cw * margin_ratio, ch * margin_ratio);
    let start = (mx, my, 0.0, 0.0);
    let (ax, ay) = (cw / 2.0, ch / 2.0);
    let (ex, ey) = (cw - mx, ch - my);
    // (point x, point y, natural fraction x, natural fraction y)
    let (px, py, nx, ny) = match placement.position.unwrap_or(PositionPreset::Center) {
        PositionPreset::TopLeft => start,
        PositionPreset::TopCenter => (ax, my, 0.5, 0.0),
        PositionPreset::TopRight => (ex, my, 1.0, 0.0),
        PositionPreset::CenterLeft => (mx, ay, 0.0, 0.5),
        PositionPreset::Center => (ax, ay, 0.5, 0.5),
        PositionPreset::CenterRight => (ex, ay, 1.0, 0.5),
        PositionPreset::BottomLeft => (mx, ey, 0.0, 1.0),
        PositionPreset::BottomCenter => (ax, ey, 0.5, 1.0),
        PositionPreset::BottomRight => (ex, ey, 1.0, 1.0),
    };
    let (fx, fy) = placement.anchor.map(anchor_fraction).unwrap_or((nx, ny));
    (px - fx * w, py - fy * h)
}

/// Estimated canvas box of `layer` and how far to trust it.
pub fn estimate_box(
    layer: &LayerSpec,
    canvas: Canvas,
    config: &ValidatorConfig,
) -> (BoundingBox, Confidence) {
    let ((w, h), confidence) = match &layer.kind {
        LayerKind::Background(_) => {
            return (BoundingBox::from_rect(canvas.rect()), Confidence::High);
        }
        LayerKind::Connector(conn) => {
            // Endpoints are canvas pixels; waypoints are not part of the box.
            if !conn.from.is_finite() || !conn.to.is_finite() {
                return (
                    BoundingBox::from_origin_size(0.0, 0.0, 0.0, 0.0),
                    Confidence::Low,
                );
            }
            let r = Rect::from_points(
                (conn.from.x.0, conn.from.y.0),
                (conn.to.x.0, conn.to.y.0),
            );
            return (BoundingBox::from_rect(r), Confidence::High);
        }
        LayerKind::Text(text) => (text_size(text, config.width_fudge), Confidence::Medium),
        LayerKind::Image(img) | LayerKind::GeneratedImage(img) => image_size(img, canvas),
        LayerKind::Button(b) => button_size(b, config),
    };
    let (left, top) = resolve_origin(&layer.placement, w, h, canvas, config.safe_margin);
    (BoundingBox::from_origin_size(left, top, w, h), confidence)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
