use crate::{
    foundation::core::Canvas,
    layout::geometry::{BoundingBox, Confidence, estimate_box},
    scene::model::{LayerKind, LayerSpec, SceneSpec},
};
use serde::{Deserialize, Serialize};

/// Bleed below this many pixels is rounding noise from edge-aligned presets.
const BLEED_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Thresholds for the layout checks.
pub struct ValidatorConfig {
    /// Safe-zone inset per edge, as a fraction of the canvas dimension.
    pub safe_margin: f64,
    /// Minimum vertical gap between stacked text, as a fraction of the taller box.
    pub spacing_ratio: f64,
    /// Multiplier on the raw glyph-width estimate.
    pub width_fudge: f64,
    /// Button width when the layer declares none.
    pub button_width: f64,
    /// Button height when the layer declares none.
    pub button_height: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            safe_margin: 0.12,
            spacing_ratio: 0.10,
            width_fudge: 1.05,
            button_width: 240.0,
            button_height: 64.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// What a [`Diagnostic`] reports.
pub enum DiagnosticKind {
    /// Box crosses the left safe margin.
    BleedLeft,
    /// Box crosses the right safe margin.
    BleedRight,
    /// Box crosses the top safe margin.
    BleedTop,
    /// Box crosses the bottom safe margin.
    BleedBottom,
    /// Two text/button boxes intersect.
    Overlap,
    /// Vertically adjacent text blocks sit too close.
    TightSpacing,
    /// The box is a placeholder; other checks on this layer are skipped.
    GeometryUnknown,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One layout finding.
pub struct Diagnostic {
    /// Finding type.
    pub kind: DiagnosticKind,
    /// Indices into the validated layer list.
    pub layers: Vec<usize>,
    /// Pixels for bleed and spacing, square pixels for overlap.
    pub magnitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Summary verdict for one layer.
pub enum LayerStatus {
    /// Nothing to fix.
    Ok,
    /// At least one finding other than `geometry_unknown` involves the layer.
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Estimated box and single-layer findings for one layer.
pub struct LayerReport {
    /// Index into the validated layer list.
    pub index: usize,
    /// Layer id, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Estimated canvas box.
    pub bbox: BoundingBox,
    /// Verdict including scene-level findings.
    pub status: LayerStatus,
    /// Trust in `bbox`.
    pub confidence: Confidence,
    /// Bleed or geometry-unknown findings for this layer alone.
    pub issues: Vec<Diagnostic>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Layout report for one list of layers.
pub struct ValidationReport {
    /// One entry per input layer, in input order.
    pub layers: Vec<LayerReport>,
    /// Diagnostics that involve more than one layer.
    pub scene_issues: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Every diagnostic of `kind`, from layers and scene alike.
    pub fn issues_of(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.layers
            .iter()
            .flat_map(|l| l.issues.iter())
            .chain(self.scene_issues.iter())
            .filter(|d| d.kind == kind)
            .collect()
    }

    /// `true` when no layer carries a warning.
    pub fn is_clean(&self) -> bool {
        self.layers.iter().all(|l| l.status == LayerStatus::Ok)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Layout report of one clip.
pub struct ClipValidation {
    /// Id of the validated clip.
    pub clip_id: String,
    /// Findings for the clip's layers.
    pub report: ValidationReport,
}

fn bleed(bbox: &BoundingBox, canvas: Canvas, margin: f64, index: usize) -> Vec<Diagnostic> {
    let (mx, my) = (canvas.w() * margin, canvas.h() * margin);
    let edges = [
        (DiagnosticKind::BleedLeft, mx - bbox.left),
        (DiagnosticKind::BleedRight, bbox.right - (canvas.w() - mx)),
        (DiagnosticKind::BleedTop, my - bbox.top),
        (DiagnosticKind::BleedBottom, bbox.bottom - (canvas.h() - my)),
    ];
    edges
        .into_iter()
        .filter(|(_, outside)| *outside > BLEED_EPSILON)
        .map(|(kind, outside)| Diagnostic {
            kind,
            layers: vec![index],
            magnitude: outside,
        })
        .collect()
}

fn is_text(layer: &LayerSpec) -> bool {
    matches!(layer.kind, LayerKind::Text(_))
}

fn is_text_or_button(layer: &LayerSpec) -> bool {
    matches!(layer.kind, LayerKind::Text(_) | LayerKind::Button(_))
}

/// Estimate a box per layer and report safe-zone bleed, overlap and tight spacing.
///
/// Overlap only compares text and button layers, and spacing only text layers. Spacing looks
/// at vertical extent alone: text sharing a row gives a negative gap and is flagged. Layers
/// whose geometry is unknown get a `geometry_unknown` note instead of bleed checks.
#[tracing::instrument(skip_all, fields(layers = layers.len()))]
pub fn validate_layers(
    layers: &[LayerSpec],
    canvas: Canvas,
    config: &ValidatorConfig,
) -> ValidationReport {
    let mut reports: Vec<LayerReport> = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let (bbox, confidence) = estimate_box(layer, canvas, config);
            let issues = match &layer.kind {
                LayerKind::Background(_) => Vec::new(),
                _ if confidence == Confidence::Low => vec![Diagnostic {
                    kind: DiagnosticKind::GeometryUnknown,
                    layers: vec![index],
                    magnitude: 0.0,
                }],
                _ => bleed(&bbox, canvas, config.safe_margin, index),
            };
            LayerReport {
                index,
                id: layer.id.clone(),
                bbox,
                status: LayerStatus::Ok,
                confidence,
                issues,
            }
        })
        .collect();

    let mut scene_issues = Vec::new();

    let boxed: Vec<usize> = (0..layers.len())
        .filter(|&i| is_text_or_button(&layers[i]))
        .collect();
    for (n, &a) in boxed.iter().enumerate() {
        for &b in &boxed[n + 1..] {
            let area = reports[a].bbox.overlap_area(&reports[b].bbox);
            if area > 0.0 {
                scene_issues.push(Diagnostic {
                    kind: DiagnosticKind::Overlap,
                    layers: vec![a, b],
                    magnitude: area,
                });
            }
        }
    }

    let mut texts: Vec<usize> = (0..layers.len()).filter(|&i| is_text(&layers[i])).collect();
    texts.sort_by(|&a, &b| reports[a].bbox.top.total_cmp(&reports[b].bbox.top));
    for pair in texts.windows(2) {
        let (upper, lower) = (&reports[pair[0]].bbox, &reports[pair[1]].bbox);
        let gap = lower.top - upper.bottom;
        let needed = config.spacing_ratio * upper.height.max(lower.height);
        if gap < needed {
            scene_issues.push(Diagnostic {
                kind: DiagnosticKind::TightSpacing,
                layers: vec![pair[0], pair[1]],
                magnitude: needed - gap,
            });
        }
    }

    for r in &mut reports {
        let flagged = r
            .issues
            .iter()
            .any(|d| d.kind != DiagnosticKind::GeometryUnknown)
            || scene_issues.iter().any(|d| d.layers.contains(&r.index));
        if flagged {
            r.status = LayerStatus::Warning;
        }
    }

    tracing::debug!(
        warnings = reports
            .iter()
            .filter(|r| r.status == LayerStatus::Warning)
            .count(),
        scene_issues = scene_issues.len(),
        "layout validated"
    );
    ValidationReport {
        layers: reports,
        scene_issues,
    }
}

/// Validate each clip's layers against the scene canvas.
#[tracing::instrument(skip_all, fields(clips = scene.clips.len()))]
pub fn validate_scene(scene: &SceneSpec, config: &ValidatorConfig) -> Vec<ClipValidation> {
    let canvas = scene.meta.canvas();
    scene
        .clips
        .iter()
        .map(|clip| ClipValidation {
            clip_id: clip.id.clone(),
            report: validate_layers(&clip.layers, canvas, config),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/validator.rs"]
mod tests;
