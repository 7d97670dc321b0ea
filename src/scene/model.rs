use crate::animation::{
    continuous::ContinuousMotion,
    ease::Ease,
    spring::{Feel, SpringConfig},
    stagger::StaggerSpec,
    timing::Timing,
};
use crate::foundation::core::{Canvas, Fps};
use serde::{Deserialize, Serialize};

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Scene-wide timing and canvas.
pub struct SceneMeta {
    /// Scene length in frames; frames at or past it render nothing.
    pub duration_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl SceneMeta {
    /// Canvas of this scene.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Root scene document.
pub struct SceneSpec {
    /// Frame rate, length and canvas.
    pub meta: SceneMeta,
    /// Clips in declaration order; later clips paint above earlier ones at equal `zIndex`.
    #[serde(default)]
    pub clips: Vec<ClipSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A time window of layers. Clip windows may overlap.
pub struct ClipSpec {
    /// Unique clip id.
    pub id: String,
    /// Scene frame the clip opens at.
    #[serde(default)]
    pub start_frame: u64,
    /// Clip length in frames.
    pub duration_frames: u64,
    /// Layers in declaration order.
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
    /// Transition over the first frames of the clip.
    #[serde(default)]
    pub enter_transition: Option<ClipTransition>,
    /// Transition over the last frames of the clip.
    #[serde(default)]
    pub exit_transition: Option<ClipTransition>,
}

impl ClipSpec {
    /// `[start, end)` in scene frames.
    pub fn window(&self) -> [u64; 2] {
        [
            self.start_frame,
            self.start_frame.saturating_add(self.duration_frames),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Whole-clip transition shape.
pub enum ClipTransitionKind {
    /// Opacity only.
    Fade,
    /// Fade while travelling up.
    SlideUp,
    /// Fade while travelling down.
    SlideDown,
    /// Fade while travelling left.
    SlideLeft,
    /// Fade while travelling right.
    SlideRight,
    /// Fade while scaling between 0.9 and 1.
    Zoom,
    /// No transition.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Opacity/translate ramp applied to a whole clip at its start or end.
pub struct ClipTransition {
    /// Transition shape.
    #[serde(rename = "type")]
    pub kind: ClipTransitionKind,
    /// Transition length in frames.
    pub duration_frames: u64,
    /// Defaults to ease-out on enter and ease-in on exit.
    #[serde(default)]
    pub easing: Option<Ease>,
    /// Slide distance in pixels; defaults to 10% of the canvas along the slide axis.
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// 9-way placement preset.
pub enum PositionPreset {
    /// Top-left margin corner.
    TopLeft,
    /// Centered on the top margin.
    TopCenter,
    /// Top-right margin corner.
    TopRight,
    /// Centered on the left margin.
    CenterLeft,
    /// Canvas center.
    Center,
    /// Centered on the right margin.
    CenterRight,
    /// Bottom-left margin corner.
    BottomLeft,
    /// Centered on the bottom margin.
    BottomCenter,
    /// Bottom-right margin corner.
    BottomRight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which point of the layer box the placement coordinates refer to.
pub enum Anchor {
    /// Box center.
    #[default]
    Center,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Where a layer sits on the canvas. `x`/`y` are canvas percentages and win over `position`.
pub struct Placement {
    /// Named spot on the safe margin; center when nothing is set.
    #[serde(default)]
    pub position: Option<PositionPreset>,
    /// Horizontal canvas percentage.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical canvas percentage.
    #[serde(default)]
    pub y: Option<f64>,
    /// Box point placed on the resolved spot.
    #[serde(default)]
    pub anchor: Option<Anchor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One layer inside a clip. Frames are relative to the clip start.
pub struct LayerSpec {
    /// Optional id, echoed in frame output and reports.
    #[serde(default)]
    pub id: Option<String>,
    /// Paint order across all visible clips; higher draws later.
    #[serde(default)]
    pub z_index: i32,
    /// Clip-local frame the layer appears at; defaults to 0.
    #[serde(default)]
    pub start_frame: Option<u64>,
    /// Layer window length; defaults to the rest of the clip.
    #[serde(default)]
    pub duration_frames: Option<u64>,
    /// Stay visible in the settled pose after the layer window until the clip ends.
    #[serde(default)]
    pub persist: bool,
    /// Canvas placement, used by the layout checks.
    #[serde(flatten)]
    pub placement: Placement,
    /// Layer type and its params.
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl LayerSpec {
    /// `[start, end)` in clip-local frames.
    pub fn window(&self, clip_duration: u64) -> [u64; 2] {
        let start = self.start_frame.unwrap_or(0);
        let end = match self.duration_frames {
            Some(d) => start.saturating_add(d),
            None => clip_duration,
        };
        [start, end]
    }

    /// Wire name of the layer type.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Layer type, tagged by `type`.
pub enum LayerKind {
    /// Animated backdrop.
    Background(BackgroundLayer),
    /// Still image with a motion curve.
    Image(ImageLayer),
    /// Generated image; animates like `image`.
    GeneratedImage(ImageLayer),
    /// Text block.
    Text(TextLayer),
    /// Line or curve between two canvas points.
    Connector(ConnectorLayer),
    /// Call-to-action button.
    Button(ButtonLayer),
}

impl LayerKind {
    /// Wire name of the layer type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background(_) => "background",
            Self::Image(_) => "image",
            Self::GeneratedImage(_) => "generated_image",
            Self::Text(_) => "text",
            Self::Connector(_) => "connector",
            Self::Button(_) => "button",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Background style.
pub enum BackgroundVariant {
    /// Flat color.
    #[default]
    Color,
    /// Shifting gradient.
    Gradient,
    /// Floating orbs.
    Orbs,
    /// Scrolling grid.
    Grid,
    /// Film grain.
    Noise,
    /// Radial glow.
    Radial,
    /// Mesh gradient.
    Mesh,
    /// Aurora bands.
    Aurora,
    /// Drifting particles.
    Particles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Full-canvas animated backdrop.
pub struct BackgroundLayer {
    /// Background style.
    #[serde(default)]
    pub variant: BackgroundVariant,
    /// CSS color strings for the renderer.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Loop speed multiplier.
    #[serde(default = "one")]
    pub speed: f64,
}

impl Default for BackgroundLayer {
    fn default() -> Self {
        Self {
            variant: BackgroundVariant::Color,
            colors: Vec::new(),
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Clip-progress driven motion for still images.
pub enum MotionCurve {
    /// Scale up over the clip.
    ZoomIn,
    /// Scale down over the clip.
    ZoomOut,
    /// Pan toward the left.
    PanLeft,
    /// Pan toward the right.
    PanRight,
    /// Pan upward.
    PanUp,
    /// Pan downward.
    PanDown,
    /// No motion.
    #[default]
    Static,
    /// Zoom while holding `focusX`/`focusY` in place.
    Focus,
    /// Slow zoom and pan; follows `keyframes` when any are given.
    KenBurns,
    /// Slight zoom with a horizontal glide.
    Parallax,
    /// Small zoom with a diagonal drift.
    ZoomDrift,
    /// Barely perceptible drift.
    SubtleDrift,
    /// Tiny periodic wobble.
    MicroMotion,
    /// Periodic scale swell.
    Breathe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Named device mockup around an image.
pub enum DeviceFrame {
    /// Generic phone.
    Phone,
    /// iPhone.
    Iphone,
    /// Android phone.
    Android,
    /// Generic tablet.
    Tablet,
    /// iPad.
    Ipad,
    /// Generic laptop.
    Laptop,
    /// MacBook.
    Macbook,
    /// Browser window.
    Browser,
    /// Desktop monitor.
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Keyframe for a ken-burns pan. `x`/`y` are focal percentages, `frame` is clip-local.
pub struct PanKeyframe {
    /// Clip-local frame of the key.
    pub frame: f64,
    /// Focal x percentage.
    pub x: f64,
    /// Focal y percentage.
    pub y: f64,
    /// Zoom factor.
    #[serde(default = "one")]
    pub scale: f64,
    /// Frames to dwell on this pose before moving toward the next one.
    #[serde(default)]
    pub hold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Shared by `image` and `generated_image` layers.
pub struct ImageLayer {
    /// Image source for the renderer.
    #[serde(default)]
    pub src: Option<String>,
    /// Generation prompt for `generated_image`.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Motion curve.
    #[serde(default)]
    pub motion: MotionCurve,
    /// Motion amplitude multiplier.
    #[serde(default = "one")]
    pub intensity: f64,
    /// Focal x percentage for `focus`; defaults to 50.
    #[serde(default)]
    pub focus_x: Option<f64>,
    /// Focal y percentage for `focus`; defaults to 50.
    #[serde(default)]
    pub focus_y: Option<f64>,
    /// Zoom at clip start for `focus`; defaults to 1.
    #[serde(default)]
    pub start_scale: Option<f64>,
    /// Zoom at clip end for `focus`; defaults to 1.3.
    #[serde(default)]
    pub end_scale: Option<f64>,
    /// Ken-burns keys, ordered by frame.
    #[serde(default)]
    pub keyframes: Vec<PanKeyframe>,
    /// Curve easing; linear when unset.
    #[serde(default)]
    pub easing: Option<Ease>,
    /// Device mockup around the image.
    #[serde(default)]
    pub device_frame: Option<DeviceFrame>,
    /// Display scale of the image box.
    #[serde(default = "one")]
    pub scale: f64,
    /// Opacity ramp at the start of the layer window.
    #[serde(default)]
    pub fade_in_frames: Option<u64>,
}

impl Default for ImageLayer {
    fn default() -> Self {
        Self {
            src: None,
            prompt: None,
            motion: MotionCurve::Static,
            intensity: 1.0,
            focus_x: None,
            focus_y: None,
            start_scale: None,
            end_scale: None,
            keyframes: Vec::new(),
            easing: None,
            device_frame: None,
            scale: 1.0,
            fade_in_frames: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Text block with an entrance effect.
pub struct TextLayer {
    /// Content; `\n` separates lines.
    #[serde(default)]
    pub text: String,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// CSS font weight.
    #[serde(default = "default_font_weight")]
    pub font_weight: u32,
    /// Line height as a multiple of the font size.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Wrap width in pixels.
    #[serde(default)]
    pub max_width: Option<f64>,
    /// Entrance, timing and exit.
    #[serde(default)]
    pub animation: TextAnimation,
}

fn default_font_size() -> f64 {
    64.0
}

fn default_font_weight() -> u32 {
    700
}

fn default_line_height() -> f64 {
    1.2
}

impl TextLayer {
    /// Text layer with default typography and no entrance.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            line_height: default_line_height(),
            max_width: None,
            animation: TextAnimation::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Exit shape over the last frames of the layer window.
pub enum ExitKind {
    /// Opacity ramp down.
    Fade,
    /// Fade while shrinking.
    Scale,
    /// Fade while travelling up.
    SlideUp,
    /// Fade while travelling down.
    SlideDown,
    /// Fade while travelling left.
    SlideLeft,
    /// Fade while travelling right.
    SlideRight,
    /// No exit.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Timing fields shared by every animated layer.
pub struct AnimationTiming {
    /// Exit shape; none when unset.
    #[serde(default)]
    pub exit: Option<ExitKind>,
    /// Entrance length in frames.
    #[serde(default = "default_enter_frames")]
    pub enter_duration_frames: u64,
    /// Exit length in frames.
    #[serde(default = "default_exit_frames")]
    pub exit_duration_frames: u64,
    /// Named spring preset.
    #[serde(default)]
    pub feel: Option<Feel>,
    /// Explicit spring constants; win over `feel`.
    #[serde(default)]
    pub spring: Option<SpringConfig>,
    /// Easing curve when no spring is set.
    #[serde(default)]
    pub easing: Option<Ease>,
    /// Slide distance in pixels.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Idle motion once the entrance settled.
    #[serde(default)]
    pub continuous: Option<ContinuousMotion>,
}

fn default_enter_frames() -> u64 {
    20
}

fn default_exit_frames() -> u64 {
    15
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            exit: None,
            enter_duration_frames: default_enter_frames(),
            exit_duration_frames: default_exit_frames(),
            feel: None,
            spring: None,
            easing: None,
            distance: None,
            continuous: None,
        }
    }
}

impl AnimationTiming {
    /// Resolved progress mapping.
    pub fn timing(&self) -> Timing {
        Timing::resolve(self.spring, self.feel, self.easing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Text entrance plus shared timing.
pub struct TextAnimation {
    /// Entrance effect and its params.
    #[serde(flatten)]
    pub enter: TextEnter,
    /// Shared timing fields.
    #[serde(flatten)]
    pub timing: AnimationTiming,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "enter", rename_all = "snake_case")]
/// Text entrance effect; the effect-specific params sit next to the `enter` tag.
pub enum TextEnter {
    /// Opacity ramp.
    Fade,
    /// Fade while growing.
    Scale,
    /// Scale-up pop that follows spring overshoot.
    Pop,
    /// Fade while rising into place.
    SlideUp,
    /// Fade while dropping into place.
    SlideDown,
    /// Fade while moving left into place.
    SlideLeft,
    /// Fade while moving right into place.
    SlideRight,
    /// Characters appear one at a time.
    Typewriter(TypewriterParams),
    /// Split items enter one after another.
    Stagger(StaggerParams),
    /// Wipe mask uncovers the text.
    Reveal(RevealParams),
    /// Hash-driven jitter before settling.
    Glitch(GlitchParams),
    /// Marker sweep behind the text.
    Highlight(HighlightParams),
    /// Number counts toward a target.
    Countup(CountupParams),
    /// Items ripple along a sine wave.
    Wave(WaveParams),
    /// Random characters resolve left to right.
    Scramble(ScrambleParams),
    /// Visible at rest.
    #[default]
    None,
}

impl TextEnter {
    /// Wire name of the entrance.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Scale => "scale",
            Self::Pop => "pop",
            Self::SlideUp => "slide_up",
            Self::SlideDown => "slide_down",
            Self::SlideLeft => "slide_left",
            Self::SlideRight => "slide_right",
            Self::Typewriter(_) => "typewriter",
            Self::Stagger(_) => "stagger",
            Self::Reveal(_) => "reveal",
            Self::Glitch(_) => "glitch",
            Self::Highlight(_) => "highlight",
            Self::Countup(_) => "countup",
            Self::Wave(_) => "wave",
            Self::Scramble(_) => "scramble",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Backspace the typed text after a pause.
pub struct DeleteAfter {
    /// Frames to hold the full text before deleting.
    pub hold_frames: f64,
    /// Frames per removed character; defaults to the typing speed.
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Typewriter params.
pub struct TypewriterParams {
    /// Frames per character.
    #[serde(default = "default_type_speed")]
    pub speed: f64,
    /// Show a blinking cursor.
    #[serde(default = "yes")]
    pub cursor: bool,
    /// Cursor blink period in frames.
    #[serde(default = "default_blink")]
    pub blink_period: f64,
    /// Frames before the first character.
    #[serde(default)]
    pub start_delay: f64,
    /// Delete again after typing.
    #[serde(default)]
    pub delete_after: Option<DeleteAfter>,
}

fn default_type_speed() -> f64 {
    2.0
}

fn default_blink() -> f64 {
    30.0
}

impl Default for TypewriterParams {
    fn default() -> Self {
        Self {
            speed: default_type_speed(),
            cursor: true,
            blink_period: default_blink(),
            start_delay: 0.0,
            delete_after: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Split granularity for stagger.
pub enum SplitBy {
    /// Per character.
    Char,
    /// Per word.
    #[default]
    Word,
    /// Per line.
    Line,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Per-item entrance shape.
pub enum StaggerMode {
    /// Travel only.
    Slide,
    /// Opacity only.
    Fade,
    /// Scale only.
    Scale,
    /// Fade, travel and scale together.
    #[default]
    Combined,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Stagger params.
pub struct StaggerParams {
    /// Split granularity.
    #[serde(default)]
    pub split: SplitBy,
    /// Per-item delay in frames: uniform step or cycled list.
    #[serde(default)]
    pub delay: StaggerSpec,
    /// Hash-driven jitter added to each delay, in frames.
    #[serde(default)]
    pub variance: Option<f64>,
    /// Per-item entrance shape.
    #[serde(default)]
    pub mode: StaggerMode,
    /// Frames each item needs to settle; defaults to the enter duration.
    #[serde(default)]
    pub settle_frames: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Direction the reveal wipe travels.
pub enum RevealDirection {
    /// Toward the left.
    #[default]
    Left,
    /// Toward the right.
    Right,
    /// Upward.
    Up,
    /// Downward.
    Down,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Reveal params.
pub struct RevealParams {
    /// Wipe direction.
    #[serde(default)]
    pub direction: RevealDirection,
    /// Blur radius that clears as the wipe completes.
    #[serde(default)]
    pub blur: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Glitch params.
pub struct GlitchParams {
    /// Jitter strength.
    #[serde(default = "one")]
    pub intensity: f64,
    /// Layer frame the glitch starts at.
    #[serde(default)]
    pub start_frame: f64,
    /// Defaults to the enter duration.
    #[serde(default)]
    pub duration_frames: Option<f64>,
}

impl Default for GlitchParams {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            start_frame: 0.0,
            duration_frames: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Highlight params.
pub struct HighlightParams {
    /// Marker color for the renderer.
    #[serde(default)]
    pub color: Option<String>,
    /// Marker padding in pixels.
    #[serde(default)]
    pub padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Count-up params.
pub struct CountupParams {
    /// Start value.
    #[serde(default)]
    pub from: f64,
    /// Target value.
    pub to: f64,
    /// Digits after the decimal point.
    #[serde(default)]
    pub decimals: u32,
    /// Thousands separator.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Text before the number.
    #[serde(default)]
    pub prefix: String,
    /// Text after the number.
    #[serde(default)]
    pub suffix: String,
}

fn default_separator() -> String {
    ",".to_owned()
}

impl Default for CountupParams {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            decimals: 0,
            separator: default_separator(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Wave params.
pub struct WaveParams {
    /// Peak offset in pixels.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Radians per frame.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Phase step between neighbouring items, in frames.
    #[serde(default = "default_spread")]
    pub spread: f64,
    /// Offset axis.
    #[serde(default)]
    pub axis: crate::animation::continuous::MotionAxis,
    /// Scale swing matching the wave.
    #[serde(default)]
    pub scale_variation: Option<f64>,
}

fn default_amplitude() -> f64 {
    10.0
}

fn default_frequency() -> f64 {
    0.2
}

fn default_spread() -> f64 {
    3.0
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            spread: default_spread(),
            axis: Default::default(),
            scale_variation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Scramble params.
pub struct ScrambleParams {
    /// Characters drawn while unresolved.
    #[serde(default = "default_charset")]
    pub charset: String,
}

fn default_charset() -> String {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*".to_owned()
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self {
            charset: default_charset(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A leniently parsed coordinate.
///
/// Accepts numbers and numeric strings. Anything else becomes NaN so that the layer is
/// reported as a defect at evaluation time instead of failing the whole document.
pub struct Coord(pub f64);

impl Serialize for Coord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Self(v),
            Repr::Str(s) => Self(s.trim().parse().unwrap_or(f64::NAN)),
            Repr::Other(_) => Self(f64::NAN),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Connector point in canvas pixels. Accepts `[x, y]` or `{ "x": .., "y": .. }`.
pub struct CoordPair {
    /// Horizontal canvas pixel.
    pub x: Coord,
    /// Vertical canvas pixel.
    pub y: Coord,
}

impl CoordPair {
    /// Point from plain numbers.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Coord(x),
            y: Coord(y),
        }
    }

    /// `true` when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.0.is_finite() && self.y.0.is_finite()
    }
}

impl<'de> Deserialize<'de> for CoordPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([Coord; 2]),
            Obj { x: Coord, y: Coord },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Stroke pattern.
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashes scaled to the stroke width.
    Dashed,
    /// Round dots scaled to the stroke width.
    Dotted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which end the draw-in starts from.
pub enum DrawDirection {
    /// From `from` to `to`.
    #[default]
    Forward,
    /// From `to` back to `from`.
    Reverse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Line end decoration.
pub enum LineCap {
    /// Bare end.
    #[default]
    None,
    /// Arrow head.
    Arrow,
    /// Small filled dot.
    Dot,
    /// Hollow circle.
    Circle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Animated line or curve between canvas points.
pub struct ConnectorLayer {
    /// Start point.
    pub from: CoordPair,
    /// End point.
    pub to: CoordPair,
    /// Points the path passes through, in order.
    #[serde(default)]
    pub waypoints: Vec<CoordPair>,
    /// Smooth the path through the waypoints.
    #[serde(default)]
    pub curved: bool,
    /// Stroke pattern.
    #[serde(default)]
    pub line_style: LineStyle,
    /// Draw-in direction.
    #[serde(default)]
    pub direction: DrawDirection,
    /// Decoration at `from`.
    #[serde(default)]
    pub start_cap: LineCap,
    /// Decoration at `to`.
    #[serde(default)]
    pub end_cap: LineCap,
    /// Stroke width in pixels.
    #[serde(default = "default_stroke")]
    pub stroke_width: f64,
    /// Draw-in timing.
    #[serde(default)]
    pub animation: AnimationTiming,
}

fn default_stroke() -> f64 {
    4.0
}

impl ConnectorLayer {
    /// Straight solid connector with default timing.
    pub fn new(from: CoordPair, to: CoordPair) -> Self {
        Self {
            from,
            to,
            waypoints: Vec::new(),
            curved: false,
            line_style: LineStyle::Solid,
            direction: DrawDirection::Forward,
            start_cap: LineCap::None,
            end_cap: LineCap::None,
            stroke_width: default_stroke(),
            animation: AnimationTiming::default(),
        }
    }

    /// `from`, waypoints, `to` in drawing order.
    pub fn points(&self) -> Vec<CoordPair> {
        let mut pts = Vec::with_capacity(self.waypoints.len() + 2);
        pts.push(self.from);
        pts.extend_from_slice(&self.waypoints);
        pts.push(self.to);
        pts
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Button entrance shape.
pub enum ButtonStyle {
    /// Opacity ramp.
    #[default]
    Fade,
    /// Fade while growing.
    Scale,
    /// Scale-up pop that follows spring overshoot.
    Pop,
    /// Fade while rising into place.
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Idle scale pulse once the entrance has settled.
pub struct PulseSpec {
    /// Peak extra scale.
    #[serde(default = "default_pulse_intensity")]
    pub intensity: f64,
    /// Pulse period in frames.
    #[serde(default = "default_pulse_period")]
    pub period_frames: f64,
}

fn default_pulse_intensity() -> f64 {
    0.05
}

fn default_pulse_period() -> f64 {
    45.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Simulated cursor hover starting at a layer-local frame.
pub struct HoverSpec {
    /// Layer frame the hover starts at.
    pub at_frame: f64,
    /// Scale at full hover.
    #[serde(default = "default_hover_scale")]
    pub scale: f64,
    /// Upward nudge in pixels.
    #[serde(default = "default_hover_nudge")]
    pub nudge: f64,
    /// Frames to reach full hover.
    #[serde(default = "default_hover_frames")]
    pub duration_frames: f64,
}

fn default_hover_scale() -> f64 {
    1.06
}

fn default_hover_nudge() -> f64 {
    4.0
}

fn default_hover_frames() -> f64 {
    8.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Button entrance, idle pulse and hover.
pub struct ButtonAnimation {
    /// Entrance shape; also accepted as `style`.
    #[serde(default, rename = "enter", alias = "style")]
    pub style: ButtonStyle,
    /// Idle pulse after the entrance.
    #[serde(default)]
    pub pulse: Option<PulseSpec>,
    /// Simulated hover.
    #[serde(default)]
    pub hover: Option<HoverSpec>,
    /// Shared timing fields.
    #[serde(flatten)]
    pub timing: AnimationTiming,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Call-to-action button.
pub struct ButtonLayer {
    /// Button text.
    #[serde(default)]
    pub label: String,
    /// Box width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Box height in pixels.
    #[serde(default)]
    pub height: Option<f64>,
    /// Label font size in pixels.
    #[serde(default = "default_button_font")]
    pub font_size: f64,
    /// Entrance, pulse and hover.
    #[serde(default)]
    pub animation: ButtonAnimation,
}

fn default_button_font() -> f64 {
    28.0
}

impl ButtonLayer {
    /// Button with default size and animation.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: None,
            height: None,
            font_size: default_button_font(),
            animation: ButtonAnimation::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
