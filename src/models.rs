use std::collections::HashMap;

use serde::Serialize;

use crate::constants::FILE_TAG;

/// Field names mapped to typed metric values
pub type FieldMap = HashMap<String, FieldValue>;

/// Tag names mapped to string values
pub type TagMap = HashMap<String, String>;

/// A typed metric field value.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    /// Returns the integer value, if this field holds one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    /// Returns the text value, if this field holds one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Integer(_) => None,
            FieldValue::Text(v) => Some(v.as_str()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

/// The result of probing one configured path.
///
/// Built fresh per probe and handed to the sink immediately; the gatherer
/// retains nothing between invocations. Optional attributes are populated
/// only for files that exist, so a missing file renders as a bare
/// `exists=0` observation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    pub path: String,
    pub exists: bool,
    pub size_bytes: Option<u64>,
    pub mode: Option<String>,
    pub checksum: Option<String>,
}

impl Observation {
    /// Create the default observation for a path that has not been
    /// confirmed to exist
    pub fn absent(path: &str) -> Self {
        Observation {
            path: path.to_string(),
            ..Default::default()
        }
    }

    /// Tags reported alongside the fields: `{"file": path}`
    pub fn tags(&self) -> TagMap {
        let mut tags = TagMap::new();
        tags.insert(FILE_TAG.to_string(), self.path.clone());
        tags
    }

    /// Render the observation as a typed field map.
    ///
    /// `exists` is encoded as 0/1. Attributes that were never populated are
    /// omitted entirely rather than emitted as nulls.
    pub fn fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert(
            "exists".to_string(),
            FieldValue::Integer(if self.exists { 1 } else { 0 }),
        );

        if let Some(size) = self.size_bytes {
            fields.insert("size_bytes".to_string(), FieldValue::Integer(size as i64));
        }
        if let Some(mode) = &self.mode {
            fields.insert("mode".to_string(), FieldValue::Text(mode.clone()));
        }
        if let Some(checksum) = &self.checksum {
            fields.insert("checksum".to_string(), FieldValue::Text(checksum.clone()));
        }

        fields
    }
}
