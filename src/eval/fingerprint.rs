use crate::effects::state::{ClipRegion, Extras, ItemState, VisualState};
use crate::eval::evaluator::{ComposedLayer, FrameOutput};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit digest of an evaluated frame.
///
/// Floats are hashed by bit pattern, so two frames match only when they are bit-identical.
/// The frame index is left out: a still stretch of the scene gives equal fingerprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High 64 bits of the digest.
    pub hi: u64,
    /// Low 64 bits of the digest.
    pub lo: u64,
}

/// Digest of the composed layers and diagnostics of `frame`.
pub fn fingerprint_frame(frame: &FrameOutput) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(frame.layers.len() as u32);
    for layer in &frame.layers {
        write_layer(&mut h, layer);
    }
    h.write_u32(frame.diagnostics.len() as u32);
    for d in &frame.diagnostics {
        h.write_str(&d.clip_id);
        h.write_u64(d.layer_index as u64);
        h.write_str(&d.message);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.write_u8(1);
                self.write_f64(v);
            }
            None => self.write_u8(0),
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_layer(h: &mut StableHasher, layer: &ComposedLayer) {
    h.write_str(&layer.clip_id);
    match &layer.layer_id {
        Some(id) => {
            h.write_u8(1);
            h.write_str(id);
        }
        None => h.write_u8(0),
    }
    h.write_u32(layer.stacking_index as u32);
    write_state(h, &layer.state);
}

fn write_state(h: &mut StableHasher, s: &VisualState) {
    for v in [s.opacity, s.translate_x, s.translate_y, s.scale_x, s.scale_y] {
        h.write_f64(v);
    }
    h.write_opt_f64(s.rotation);
    h.write_opt_f64(s.stroke_progress);
    h.write_opt_f64(s.blur);
    h.write_opt_f64(s.skew);
    match s.clip_region {
        Some(ClipRegion {
            top,
            right,
            bottom,
            left,
        }) => {
            h.write_u8(1);
            for v in [top, right, bottom, left] {
                h.write_f64(v);
            }
        }
        None => h.write_u8(0),
    }
    write_extras(h, &s.extras);
}

fn write_item(h: &mut StableHasher, item: &ItemState) {
    h.write_u64(item.index as u64);
    h.write_str(&item.text);
    for v in [item.opacity, item.translate_x, item.translate_y, item.scale] {
        h.write_f64(v);
    }
}

fn write_extras(h: &mut StableHasher, extras: &Extras) {
    match extras {
        Extras::None => h.write_u8(0),
        Extras::Typewriter {
            visible_text,
            visible_chars,
            cursor_visible,
        } => {
            h.write_u8(1);
            h.write_str(visible_text);
            h.write_u64(*visible_chars as u64);
            h.write_bool(*cursor_visible);
        }
        Extras::Items { items } => {
            h.write_u8(2);
            h.write_u32(items.len() as u32);
            for item in items {
                write_item(h, item);
            }
        }
        Extras::Scramble { text, revealed } => {
            h.write_u8(3);
            h.write_str(text);
            h.write_u64(*revealed as u64);
        }
        Extras::Glitch {
            ghost_offset_x,
            ghost_offset_y,
            ghost_opacity,
        } => {
            h.write_u8(4);
            h.write_f64(*ghost_offset_x);
            h.write_f64(*ghost_offset_y);
            h.write_f64(*ghost_opacity);
        }
        Extras::Highlight { progress, padding } => {
            h.write_u8(5);
            h.write_f64(*progress);
            h.write_f64(*padding);
        }
        Extras::Countup { value, text } => {
            h.write_u8(6);
            h.write_f64(*value);
            h.write_str(text);
        }
        Extras::Stroke {
            path_length,
            dash_array,
            dash_offset,
            start_cap_visible,
            end_cap_visible,
        } => {
            h.write_u8(7);
            h.write_f64(*path_length);
            h.write_u32(dash_array.len() as u32);
            for v in dash_array {
                h.write_f64(*v);
            }
            h.write_f64(*dash_offset);
            h.write_bool(*start_cap_visible);
            h.write_bool(*end_cap_visible);
        }
        Extras::Background {
            variant,
            phase,
            drift_x,
            drift_y,
        } => {
            h.write_u8(8);
            h.write_u8(*variant as u8);
            h.write_f64(*phase);
            h.write_f64(*drift_x);
            h.write_f64(*drift_y);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
