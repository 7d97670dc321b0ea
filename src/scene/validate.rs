use crate::animation::stagger::StaggerSpec;
use crate::scene::model::{
    AnimationTiming, ClipSpec, ClipTransition, LayerKind, LayerSpec, SceneSpec, TextEnter,
};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    pub(crate) fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

/// Path-carrying accumulator so nested checks don't rebuild prefixes by hand.
struct Checker {
    path: Vec<SchemaPathElem>,
    errors: Vec<SchemaError>,
}

impl Checker {
    fn push(&mut self, message: impl Into<String>) {
        self.errors.push(SchemaError::at(&self.path, message));
    }

    fn field(&mut self, name: &'static str, ok: bool, message: &str) {
        if !ok {
            self.path.push(SchemaPathElem::Field(name));
            self.push(message);
            self.path.pop();
        }
    }

    fn scoped(&mut self, elems: &[SchemaPathElem], f: impl FnOnce(&mut Self)) {
        let depth = self.path.len();
        self.path.extend_from_slice(elems);
        f(self);
        self.path.truncate(depth);
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

pub(crate) fn validate_scene(spec: &SceneSpec) -> Result<(), SchemaErrors> {
    let mut c = Checker {
        path: Vec::new(),
        errors: Vec::new(),
    };

    c.scoped(&[SchemaPathElem::Field("meta")], |c| {
        let m = &spec.meta;
        c.field("durationFrames", m.duration_frames > 0, "durationFrames must be > 0");
        c.field("width", m.width > 0, "width must be > 0");
        c.field("height", m.height > 0, "height must be > 0");
        c.field(
            "fps",
            m.fps.num > 0 && m.fps.den > 0,
            "fps must be positive",
        );
    });

    let mut ids = HashSet::<&str>::new();
    for (i, clip) in spec.clips.iter().enumerate() {
        c.scoped(
            &[SchemaPathElem::Field("clips"), SchemaPathElem::Index(i)],
            |c| {
                if clip.id.trim().is_empty() {
                    c.field("id", false, "clip id must be non-empty");
                } else if !ids.insert(clip.id.as_str()) {
                    c.scoped(&[SchemaPathElem::Field("id")], |c| {
                        c.push(format!("duplicate clip id \"{}\"", clip.id))
                    });
                }
                validate_clip(clip, c);
            },
        );
    }

    if c.errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors: c.errors })
    }
}

fn validate_clip(clip: &ClipSpec, c: &mut Checker) {
    c.field(
        "durationFrames",
        clip.duration_frames > 0,
        "durationFrames must be > 0",
    );
    if let Some(t) = &clip.enter_transition {
        c.scoped(&[SchemaPathElem::Field("enterTransition")], |c| {
            validate_transition(t, c)
        });
    }
    if let Some(t) = &clip.exit_transition {
        c.scoped(&[SchemaPathElem::Field("exitTransition")], |c| {
            validate_transition(t, c)
        });
    }
    for (j, layer) in clip.layers.iter().enumerate() {
        c.scoped(
            &[SchemaPathElem::Field("layers"), SchemaPathElem::Index(j)],
            |c| validate_layer(layer, c),
        );
    }
}

fn validate_transition(t: &ClipTransition, c: &mut Checker) {
    c.field(
        "durationFrames",
        t.duration_frames > 0,
        "durationFrames must be > 0",
    );
    if let Some(d) = t.distance {
        c.field("distance", d.is_finite(), "distance must be finite");
    }
}

fn validate_layer(layer: &LayerSpec, c: &mut Checker) {
    if let Some(d) = layer.duration_frames {
        c.field("durationFrames", d > 0, "durationFrames must be > 0");
    }
    if let Some(x) = layer.placement.x {
        c.field("x", x.is_finite(), "x must be a finite percentage");
    }
    if let Some(y) = layer.placement.y {
        c.field("y", y.is_finite(), "y must be a finite percentage");
    }

    match &layer.kind {
        LayerKind::Background(bg) => {
            c.field("speed", bg.speed.is_finite(), "speed must be finite");
        }
        LayerKind::Image(img) | LayerKind::GeneratedImage(img) => {
            c.field("scale", positive(img.scale), "scale must be finite and > 0");
            c.field(
                "intensity",
                non_negative(img.intensity),
                "intensity must be finite and >= 0",
            );
            for (name, v) in [
                ("focusX", img.focus_x),
                ("focusY", img.focus_y),
                ("startScale", img.start_scale),
                ("endScale", img.end_scale),
            ] {
                if let Some(v) = v {
                    c.field(name, v.is_finite(), "must be finite");
                }
            }
            let mut prev = f64::NEG_INFINITY;
            for (k, key) in img.keyframes.iter().enumerate() {
                c.scoped(
                    &[SchemaPathElem::Field("keyframes"), SchemaPathElem::Index(k)],
                    |c| {
                        let finite = [key.frame, key.x, key.y, key.scale, key.hold]
                            .iter()
                            .all(|v| v.is_finite());
                        if !finite {
                            c.push("keyframe values must be finite");
                        } else if key.frame < prev {
                            c.field("frame", false, "keyframes must be ordered by frame");
                        }
                        c.field("scale", key.scale > 0.0, "scale must be > 0");
                        c.field("hold", key.hold >= 0.0, "hold must be >= 0");
                    },
                );
                prev = prev.max(key.frame);
            }
        }
        LayerKind::Text(text) => {
            c.field(
                "fontSize",
                positive(text.font_size),
                "fontSize must be finite and > 0",
            );
            c.field(
                "lineHeight",
                positive(text.line_height),
                "lineHeight must be finite and > 0",
            );
            if let Some(w) = text.max_width {
                c.field("maxWidth", positive(w), "maxWidth must be finite and > 0");
            }
            c.scoped(&[SchemaPathElem::Field("animation")], |c| {
                validate_timing(&text.animation.timing, c);
                validate_text_enter(&text.animation.enter, c);
            });
        }
        LayerKind::Connector(conn) => {
            c.field(
                "strokeWidth",
                non_negative(conn.stroke_width),
                "strokeWidth must be finite and >= 0",
            );
            c.scoped(&[SchemaPathElem::Field("animation")], |c| {
                validate_timing(&conn.animation, c)
            });
        }
        LayerKind::Button(button) => {
            if let Some(w) = button.width {
                c.field("width", positive(w), "width must be finite and > 0");
            }
            if let Some(h) = button.height {
                c.field("height", positive(h), "height must be finite and > 0");
            }
            c.scoped(&[SchemaPathElem::Field("animation")], |c| {
                let anim = &button.animation;
                validate_timing(&anim.timing, c);
                if let Some(p) = anim.pulse {
                    c.scoped(&[SchemaPathElem::Field("pulse")], |c| {
                        c.field(
                            "periodFrames",
                            positive(p.period_frames),
                            "periodFrames must be finite and > 0",
                        );
                        c.field(
                            "intensity",
                            p.intensity.is_finite(),
                            "intensity must be finite",
                        );
                    });
                }
                if let Some(h) = anim.hover {
                    c.scoped(&[SchemaPathElem::Field("hover")], |c| {
                        c.field("atFrame", h.at_frame.is_finite(), "atFrame must be finite");
                        c.field("scale", positive(h.scale), "scale must be finite and > 0");
                        c.field("nudge", h.nudge.is_finite(), "nudge must be finite");
                        c.field(
                            "durationFrames",
                            non_negative(h.duration_frames),
                            "durationFrames must be finite and >= 0",
                        );
                    });
                }
            });
        }
    }
}

fn validate_timing(t: &AnimationTiming, c: &mut Checker) {
    if let Some(s) = t.spring {
        c.scoped(&[SchemaPathElem::Field("spring")], |c| {
            c.field(
                "damping",
                non_negative(s.damping),
                "damping must be finite and >= 0",
            );
            c.field(
                "stiffness",
                positive(s.stiffness),
                "stiffness must be finite and > 0",
            );
            c.field("mass", positive(s.mass), "mass must be finite and > 0");
        });
    }
    if let Some(d) = t.distance {
        c.field("distance", d.is_finite(), "distance must be finite");
    }
    if let Some(m) = t.continuous {
        c.scoped(&[SchemaPathElem::Field("continuous")], |c| {
            c.field("intensity", m.intensity.is_finite(), "intensity must be finite");
            c.field("speed", m.speed.is_finite(), "speed must be finite");
        });
    }
}

fn validate_text_enter(enter: &TextEnter, c: &mut Checker) {
    match enter {
        TextEnter::Typewriter(p) => {
            c.field("speed", positive(p.speed), "speed must be finite and > 0");
            c.field(
                "blinkPeriod",
                positive(p.blink_period),
                "blinkPeriod must be finite and > 0",
            );
            c.field(
                "startDelay",
                p.start_delay.is_finite(),
                "startDelay must be finite",
            );
            if let Some(d) = p.delete_after {
                c.scoped(&[SchemaPathElem::Field("deleteAfter")], |c| {
                    c.field(
                        "holdFrames",
                        non_negative(d.hold_frames),
                        "holdFrames must be finite and >= 0",
                    );
                    if let Some(s) = d.speed {
                        c.field("speed", positive(s), "speed must be finite and > 0");
                    }
                });
            }
        }
        TextEnter::Stagger(p) => {
            let delays_ok = match &p.delay {
                StaggerSpec::Uniform(v) => non_negative(*v),
                StaggerSpec::Irregular(v) => v.iter().all(|d| non_negative(*d)),
            };
            c.field("delay", delays_ok, "delay must be finite and >= 0");
            if let Some(v) = p.variance {
                c.field("variance", non_negative(v), "variance must be finite and >= 0");
            }
            if let Some(s) = p.settle_frames {
                c.field(
                    "settleFrames",
                    non_negative(s),
                    "settleFrames must be finite and >= 0",
                );
            }
        }
        TextEnter::Reveal(p) => {
            if let Some(b) = p.blur {
                c.field("blur", non_negative(b), "blur must be finite and >= 0");
            }
        }
        TextEnter::Glitch(p) => {
            c.field(
                "intensity",
                non_negative(p.intensity),
                "intensity must be finite and >= 0",
            );
            c.field(
                "startFrame",
                p.start_frame.is_finite(),
                "startFrame must be finite",
            );
            if let Some(d) = p.duration_frames {
                c.field(
                    "durationFrames",
                    positive(d),
                    "durationFrames must be finite and > 0",
                );
            }
        }
        TextEnter::Highlight(p) => {
            c.field("padding", p.padding.is_finite(), "padding must be finite");
        }
        TextEnter::Countup(p) => {
            c.field("from", p.from.is_finite(), "from must be finite");
            c.field("to", p.to.is_finite(), "to must be finite");
            c.field("decimals", p.decimals <= 12, "decimals must be <= 12");
        }
        TextEnter::Wave(p) => {
            c.field("amplitude", p.amplitude.is_finite(), "amplitude must be finite");
            c.field("frequency", p.frequency.is_finite(), "frequency must be finite");
            c.field("spread", p.spread.is_finite(), "spread must be finite");
            if let Some(s) = p.scale_variation {
                c.field("scaleVariation", s.is_finite(), "scaleVariation must be finite");
            }
        }
        TextEnter::Scramble(p) => {
            c.field(
                "charset",
                !p.charset.is_empty(),
                "charset must be non-empty",
            );
        }
        TextEnter::Fade
        | TextEnter::Scale
        | TextEnter::Pop
        | TextEnter::SlideUp
        | TextEnter::SlideDown
        | TextEnter::SlideLeft
        | TextEnter::SlideRight
        | TextEnter::None => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/validate.rs"]
mod tests;
