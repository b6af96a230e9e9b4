//! Face description JSON
//!
//! Parsing is strict about structure (a `face` array of objects with a known
//! `type`) and lenient about size: extra elements are dropped and long values
//! are cut, since the watch could not show them anyway.

use pebbar_protocol::MAX_FACE_ELEMENTS;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Element kind sent for `"type": "text"`
pub const KIND_TEXT: u8 = 0;

/// Maximum value length in characters
pub const MAX_VALUE_CHARS: usize = 255;

/// Errors from [`parse_face`]
#[derive(Debug, Error)]
pub enum FaceParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing 'face' array")]
    MissingFace,

    #[error("Element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Unknown element type: '{found}'")]
    UnknownType { index: usize, found: String },
}

/// One element of a face description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceElement {
    pub kind: u8,
    pub value: String,
    /// Icon name, empty for none
    pub icon: String,
}

impl FaceElement {
    /// Plain text element without icon
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: KIND_TEXT,
            value: value.into(),
            icon: String::new(),
        }
    }
}

/// Parse a face description
///
/// An empty `face` array is valid and clears the watchface.
pub fn parse_face(json: &str) -> Result<Vec<FaceElement>, FaceParseError> {
    let obj: Map<String, Value> = serde_json::from_str(json)?;

    let face = obj
        .get("face")
        .and_then(Value::as_array)
        .ok_or(FaceParseError::MissingFace)?;

    face.iter()
        .take(MAX_FACE_ELEMENTS)
        .enumerate()
        .map(|(index, elem)| parse_element(index, elem))
        .collect()
}

fn parse_element(index: usize, elem: &Value) -> Result<FaceElement, FaceParseError> {
    let elem = elem
        .as_object()
        .ok_or(FaceParseError::NotAnObject { index })?;

    let kind = string_field(elem, "type");
    if kind != "text" {
        return Err(FaceParseError::UnknownType { index, found: kind });
    }

    Ok(FaceElement {
        kind: KIND_TEXT,
        value: truncate_chars(&string_field(elem, "value"), MAX_VALUE_CHARS),
        icon: string_field(elem, "icon"),
    })
}

/// Field as a string; missing or null is empty, scalars are stringified
fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Face description JSON for a single text element
pub fn wrap_quick_text(text: &str) -> String {
    json!({ "face": [{ "type": "text", "value": text }] }).to_string()
}
