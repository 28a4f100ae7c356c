//! Pack loading: syntax to structure.
//!
//! Reads a pack file, parses it with serde_yaml, converts the YAML value
//! model into `serde_json::Value` for uniform handling (YAML and JSON
//! sources take the same path), then shapes it into a [`ContentPack`].
//!
//! Nothing here checks the schema. A successfully loaded pack may still be
//! missing every required field; that is the validator's job. Every failure
//! comes back as one [`PackError`] carrying the underlying diagnostic.

use std::path::Path;

use serde_json::Value;

use crate::error::{PackError, PackResult};
use crate::pack::ContentPack;

/// Load a content pack from a YAML (or JSON) file.
pub fn load_pack(path: &Path) -> PackResult<ContentPack> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let pack = parse_pack(path, &content)?;
    tracing::debug!(
        path = %path.display(),
        country = pack.country().unwrap_or("?"),
        "loaded content pack"
    );
    Ok(pack)
}

/// Parse pack text already in memory. `source` is only used for error
/// context.
///
/// An empty document loads as a pack with every field missing.
pub fn parse_pack(source: &Path, text: &str) -> PackResult<ContentPack> {
    if text.trim().is_empty() {
        return Ok(ContentPack::default());
    }
    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| PackError::YamlParse {
            path: source.to_path_buf(),
            source: e,
        })?;
    let document = match yaml_to_json_value(source, yaml_value)? {
        Value::Null => Value::Object(serde_json::Map::new()),
        obj @ Value::Object(_) => obj,
        other => {
            return Err(PackError::Shape {
                path: source.to_path_buf(),
                detail: format!(
                    "document root must be a mapping, found {}",
                    json_kind(&other)
                ),
            })
        }
    };
    serde_json::from_value(document).map_err(|e| PackError::Shape {
        path: source.to_path_buf(),
        detail: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Convert a serde_yaml::Value to a serde_json::Value.
///
/// Integral floats (`30.0`) become integers so that `sla_days: 30.0` reads
/// as 30. Non-string mapping keys are stringified and YAML tags are
/// dropped. NaN and infinities have no JSON form and are rejected.
fn yaml_to_json_value(source: &Path, yaml: serde_yaml::Value) -> PackResult<Value> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number_to_json(source, &n)?,
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::Array(
            seq.into_iter()
                .map(|v| yaml_to_json_value(source, v))
                .collect::<PackResult<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => format!("{other:?}"),
                };
                obj.insert(key, yaml_to_json_value(source, v)?);
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(source, tagged.value)?,
    })
}

fn yaml_number_to_json(source: &Path, n: &serde_yaml::Number) -> PackResult<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    let non_finite = || PackError::Shape {
        path: source.to_path_buf(),
        detail: format!("number {n} is not finite"),
    };
    let f = n.as_f64().ok_or_else(non_finite)?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        return Ok(Value::from(f as i64));
    }
    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(non_finite)
}
