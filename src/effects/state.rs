use crate::{
    animation::continuous::MotionOffset,
    foundation::core::{Canvas, Fps},
    scene::model::BackgroundVariant,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Inset clip rectangle, each edge as a percentage of the layer box hidden from that side.
pub struct ClipRegion {
    /// Hidden from the top edge.
    pub top: f64,
    /// Hidden from the right edge.
    pub right: f64,
    /// Hidden from the bottom edge.
    pub bottom: f64,
    /// Hidden from the left edge.
    pub left: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Per-item state for split-text effects (stagger, wave).
pub struct ItemState {
    /// Position of the item in split order.
    pub index: usize,
    /// Item text (a character, word or line).
    pub text: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub translate_x: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
    /// Uniform scale about the item center.
    pub scale: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Effect-specific output that doesn't fit the shared transform fields.
pub enum Extras {
    /// Nothing beyond the shared fields.
    #[default]
    None,
    /// Typed-so-far text.
    #[serde(rename_all = "camelCase")]
    Typewriter {
        /// Prefix of the layer text currently on screen.
        visible_text: String,
        /// Length of `visible_text` in characters.
        visible_chars: usize,
        /// Blink phase of the cursor.
        cursor_visible: bool,
    },
    /// Split-text items.
    #[serde(rename_all = "camelCase")]
    Items {
        /// One entry per character, word or line.
        items: Vec<ItemState>,
    },
    /// Partly resolved scramble text.
    #[serde(rename_all = "camelCase")]
    Scramble {
        /// Display string, same length as the target.
        text: String,
        /// Leading characters already settled on the target.
        revealed: usize,
    },
    /// Chromatic ghost copy drawn under a glitching layer.
    #[serde(rename_all = "camelCase")]
    Glitch {
        /// Ghost offset from the layer in pixels.
        ghost_offset_x: f64,
        /// Ghost offset from the layer in pixels.
        ghost_offset_y: f64,
        /// Ghost opacity, fading across the glitch window.
        ghost_opacity: f64,
    },
    /// Marker sweep behind the text.
    #[serde(rename_all = "camelCase")]
    Highlight {
        /// Swept fraction of the text width.
        progress: f64,
        /// Marker padding in pixels.
        padding: f64,
    },
    /// Animated number.
    #[serde(rename_all = "camelCase")]
    Countup {
        /// Current numeric value.
        value: f64,
        /// `value` formatted with prefix, separators and suffix.
        text: String,
    },
    /// Connector stroke dash state.
    #[serde(rename_all = "camelCase")]
    Stroke {
        /// Arc length of the full path in pixels.
        path_length: f64,
        /// Dash pattern; empty for a solid line.
        dash_array: Vec<f64>,
        /// Dash offset that hides the undrawn part of the path.
        dash_offset: f64,
        /// Start cap is drawn.
        start_cap_visible: bool,
        /// End cap is drawn.
        end_cap_visible: bool,
    },
    /// Looping background animation.
    #[serde(rename_all = "camelCase")]
    Background {
        /// Background style being animated.
        variant: BackgroundVariant,
        /// Loop phase in `[0, 1)`.
        phase: f64,
        /// Slow drift of the pattern in pixels.
        drift_x: f64,
        /// Slow drift of the pattern in pixels.
        drift_y: f64,
    },
}

impl Extras {
    /// `true` for [`Extras::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    fn numbers(&self) -> Vec<f64> {
        match self {
            Self::None | Self::Typewriter { .. } | Self::Scramble { .. } => Vec::new(),
            Self::Items { items } => items
                .iter()
                .flat_map(|i| [i.opacity, i.translate_x, i.translate_y, i.scale])
                .collect(),
            Self::Glitch {
                ghost_offset_x,
                ghost_offset_y,
                ghost_opacity,
            } => vec![*ghost_offset_x, *ghost_offset_y, *ghost_opacity],
            Self::Highlight { progress, padding } => vec![*progress, *padding],
            Self::Countup { value, .. } => vec![*value],
            Self::Stroke {
                path_length,
                dash_array,
                dash_offset,
                ..
            } => {
                let mut v = dash_array.clone();
                v.push(*path_length);
                v.push(*dash_offset);
                v
            }
            Self::Background {
                phase,
                drift_x,
                drift_y,
                ..
            } => vec![*phase, *drift_x, *drift_y],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Evaluated visual state of one layer at one frame.
///
/// Translations are canvas pixels relative to the layer's resting placement; scale is about
/// the layer box center.
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub translate_x: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Wipe mask for reveal entrances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_region: Option<ClipRegion>,
    /// Drawn fraction of a connector path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_progress: Option<f64>,
    /// Gaussian blur radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Horizontal skew in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew: Option<f64>,
    /// Effect-specific output.
    #[serde(skip_serializing_if = "Extras::is_none")]
    pub extras: Extras,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::visible()
    }
}

impl VisualState {
    /// Fully visible, untransformed.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: None,
            clip_region: None,
            stroke_progress: None,
            blur: None,
            skew: None,
            extras: Extras::None,
        }
    }

    /// Untransformed with zero opacity.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::visible()
        }
    }

    /// Replace [`VisualState::extras`].
    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    pub(crate) fn scale_by(&mut self, k: f64) {
        self.scale_x *= k;
        self.scale_y *= k;
    }

    /// Layer idle motion on top of the current pose.
    pub(crate) fn apply_motion(&mut self, m: MotionOffset) {
        self.translate_x += m.dx;
        self.translate_y += m.dy;
        self.scale_by(m.scale_factor);
        self.opacity *= m.opacity_factor;
    }

    /// `true` when every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        let scalars = [
            self.opacity,
            self.translate_x,
            self.translate_y,
            self.scale_x,
            self.scale_y,
        ];
        let optional = [self.rotation, self.stroke_progress, self.blur, self.skew];
        let clip = self
            .clip_region
            .map(|c| [c.top, c.right, c.bottom, c.left])
            .unwrap_or_default();
        scalars
            .iter()
            .chain(optional.iter().flatten())
            .chain(clip.iter())
            .chain(self.extras.numbers().iter())
            .all(|v| v.is_finite())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
/// Why a structurally valid layer could not be evaluated at a frame.
pub enum LayerDefect {
    /// A connector endpoint or waypoint is not a finite number; names the field.
    #[error("non-finite coordinate at {0}")]
    NonFiniteCoordinate(&'static str),
    /// An effect that needs text got an empty string; names the effect.
    #[error("{0} text is empty")]
    EmptyText(&'static str),
    /// The evaluator produced NaN or infinity.
    #[error("evaluated state is not finite")]
    NonFiniteState,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Frame context handed to every evaluator.
pub struct EvalCtx {
    /// Frames since the layer window opened. Negative before it.
    pub layer_frame: f64,
    /// Frames since the clip window opened.
    pub clip_frame: f64,
    /// Clip length in frames.
    pub clip_duration: f64,
    /// Layer window length in frames.
    pub layer_duration: f64,
    /// Scene frame rate.
    pub fps: Fps,
    /// Scene canvas.
    pub canvas: Canvas,
    /// The layer is past its window and held by `persist`; exit ramps are suppressed.
    pub persisting: bool,
}

impl EvalCtx {
    /// Context for a layer spanning a whole clip.
    pub fn new(frame: f64, duration: f64, fps: Fps, canvas: Canvas) -> Self {
        Self {
            layer_frame: frame,
            clip_frame: frame,
            clip_duration: duration,
            layer_duration: duration,
            fps,
            canvas,
            persisting: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/state.rs"]
mod tests;
