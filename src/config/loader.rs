use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_yaml::Value;

use crate::config::schema::{Settings, UpscaleMethod};
use crate::error::{ConfigError, Result};

/// Read `path` and merge its fields over the compiled-in defaults
///
/// Fails only on file-level problems: a missing or unreadable file, malformed
/// YAML, or a root/`upscaling` node that is not a mapping. Field-level problems
/// never fail; the offending field keeps its default.
pub fn try_load(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let document = read_document(path)?;
    merge(&document, Settings::DEFAULT)
}

fn read_document(path: &Path) -> Result<Value> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_error)?;

    Ok(serde_yaml::from_str(&contents)?)
}

/// Overlay every recognized field of `document` on `base`
///
/// Absent keys and values of the wrong type keep the value from `base`.
pub fn merge(document: &Value, base: Settings) -> Result<Settings> {
    let root = section(Some(document), "document root")?;
    let upscaling_node = section(root.and_then(|r| r.get("upscaling")), "upscaling")?;

    let mut settings = base;
    let upscaling = &mut settings.upscaling;
    upscaling.enabled = field(upscaling_node, "enabled", upscaling.enabled);
    let method = method_text(upscaling_node, upscaling.method.as_str().to_string());
    upscaling.method = method_from_text(&method);
    upscaling.render_scale = field(upscaling_node, "renderScale", upscaling.render_scale);
    upscaling.sharpness = field(upscaling_node, "sharpness", upscaling.sharpness);
    upscaling.radius = field(upscaling_node, "radius", upscaling.radius);
    upscaling.apply_mip_bias = field(upscaling_node, "applyMipBias", upscaling.apply_mip_bias);

    settings.debug_mode = field(root, "debugMode", settings.debug_mode);

    Ok(settings)
}

/// Resolve a node expected to be a mapping
///
/// Null, absent and sequence nodes mean "no section": every field in it keeps
/// its current value. Only a scalar in place of a mapping is an error.
fn section<'a>(node: Option<&'a Value>, name: &str) -> Result<Option<&'a Value>> {
    match node {
        None | Some(Value::Null | Value::Sequence(_)) => Ok(None),
        Some(Value::Mapping(_)) => Ok(node),
        Some(Value::Tagged(tagged)) => section(Some(&tagged.value), name),
        Some(other) => Err(ConfigError::Structure(format!(
            "expected a mapping for {name}, found {}",
            kind(other)
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn field<T: Coerce>(node: Option<&Value>, key: &str, current: T) -> T {
    node.and_then(|n| n.get(key))
        .and_then(T::coerce)
        .unwrap_or(current)
}

/// A null `method` reads as the text "null", so it is reported as unknown
fn method_text(node: Option<&Value>, current: String) -> String {
    match node.and_then(|n| n.get("method")) {
        Some(Value::Null) => "null".to_string(),
        other => other.and_then(String::coerce).unwrap_or(current),
    }
}

fn method_from_text(text: &str) -> UpscaleMethod {
    UpscaleMethod::parse(text).unwrap_or_else(|| {
        tracing::info!(
            "Unknown upscaling method {}, defaulting to FSR",
            text.to_lowercase()
        );
        UpscaleMethod::Fsr
    })
}

/// Loose conversion of a YAML scalar into a typed value
trait Coerce: Sized {
    fn coerce(value: &Value) -> Option<Self>;
}

impl Coerce for bool {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => bool_from_text(s),
            Value::Tagged(tagged) => Self::coerce(&tagged.value),
            _ => None,
        }
    }
}

impl Coerce for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(|v| v as Self),
            Value::String(s) => s.trim().parse().ok(),
            Value::Tagged(tagged) => Self::coerce(&tagged.value),
            _ => None,
        }
    }
}

impl Coerce for String {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Tagged(tagged) => Self::coerce(&tagged.value),
            _ => None,
        }
    }
}

/// YAML 1.1 boolean words, accepted in lower, UPPER or Capitalised form
fn bool_from_text(text: &str) -> Option<bool> {
    const WORDS: [(&str, bool); 8] = [
        ("y", true),
        ("yes", true),
        ("true", true),
        ("on", true),
        ("n", false),
        ("no", false),
        ("false", false),
        ("off", false),
    ];

    let lower = text.to_lowercase();
    let (_, value) = WORDS.iter().find(|(word, _)| *word == lower)?;
    let consistent_case = text == lower || text == text.to_uppercase() || is_capitalised(text);
    consistent_case.then_some(*value)
}

fn is_capitalised(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase)
}
