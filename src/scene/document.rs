use crate::foundation::error::{MotionError, MotionResult};
use crate::scene::model::SceneSpec;
use crate::scene::validate::validate_scene;

impl SceneSpec {
    /// Parse and validate a scene from a JSON string.
    pub fn from_json(json: &str) -> MotionResult<Self> {
        let spec = parse(serde_json::Deserializer::from_str(json))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parse and validate a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        let spec = parse(serde_json::Deserializer::from_reader(r))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Structural validation.
    ///
    /// Reports the first offending path. Semantic problems inside otherwise well-formed layers
    /// (NaN connector endpoints, empty typewriter text) are not schema violations; they surface
    /// as per-frame diagnostics.
    pub fn validate(&self) -> MotionResult<()> {
        validate_scene(self).map_err(|errs| {
            for e in errs.errors.iter().skip(1) {
                tracing::debug!(error = %e, "additional schema violation");
            }
            match errs.errors.first() {
                Some(first) => {
                    let more = errs.errors.len() - 1;
                    let message = if more == 0 {
                        first.message.clone()
                    } else {
                        format!("{} (and {more} more)", first.message)
                    };
                    MotionError::schema(first.path_string(), message)
                }
                None => MotionError::schema("$", "invalid scene"),
            }
        })
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> MotionResult<String> {
        serde_json::to_string(self).map_err(|e| MotionError::serde(e.to_string()))
    }
}

/// Deserialize a whole document, keeping the path of the first value serde rejects.
fn parse<'de, R: serde_json::de::Read<'de>>(
    mut de: serde_json::Deserializer<R>,
) -> MotionResult<SceneSpec> {
    let spec: SceneSpec = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = json_path(e.path());
        parse_error(path, e.into_inner())
    })?;
    de.end().map_err(|e| parse_error("$".to_owned(), e))?;
    Ok(spec)
}

fn parse_error(path: String, e: serde_json::Error) -> MotionError {
    MotionError::schema(
        path,
        format!("parse scene JSON (line {}, column {}): {e}", e.line(), e.column()),
    )
}

/// `$.clips[0].layers[2]` style rendering of a serde path.
///
/// Values behind a flattened layer body are buffered before they are typed, so errors inside a
/// layer's own fields resolve to the layer itself.
fn json_path(path: &serde_path_to_error::Path) -> String {
    use serde_path_to_error::Segment;

    let mut s = String::from("$");
    for seg in path.iter() {
        match seg {
            Segment::Seq { index } => s.push_str(&format!("[{index}]")),
            Segment::Map { key } => {
                s.push('.');
                s.push_str(key);
            }
            Segment::Enum { variant } => {
                s.push('.');
                s.push_str(variant);
            }
            Segment::Unknown => s.push_str(".?"),
        }
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
