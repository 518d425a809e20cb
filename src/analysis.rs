use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful reply of `/upload`.
///
/// Fields the client does not interpret are kept in `extra` so the whole
/// object can be posted back to `/download` as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub success: bool,
    pub session_id: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_points: Option<String>,
    /// Raw mind-map payload. It is produced by a language model on the
    /// backend, so its shape is only checked when rendering.
    #[serde(default)]
    pub mindmap_data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub reading_time: u64,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    pub fn has_key_points(&self) -> bool {
        self.key_points.as_deref().is_some_and(|kp| !kp.is_empty())
    }

    /// `null`, `false`, `0` and `""` all mean the backend produced no mind map.
    pub fn has_mind_map(&self) -> bool {
        self.mindmap_data.as_ref().is_some_and(|v| match v {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    pub fn mind_map(&self) -> Option<MindMap> {
        self.mindmap_data.as_ref().and_then(MindMap::from_value)
    }
}

/// Two-level mind map: central topic, branches, and leaf texts per branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MindMap {
    pub central: String,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Branch {
    pub name: String,
    pub subbranches: Vec<String>,
}

impl MindMap {
    /// Reads a mind map out of an arbitrary JSON value.
    ///
    /// Only objects are accepted. A missing `central` or branch `name` becomes
    /// an empty string, non-object branches are dropped, and leaves that are
    /// objects contribute their `name`; anything below that is truncated.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let central = object.get("central").map(text_of).unwrap_or_default();
        let branches = object
            .get("branches")
            .and_then(Value::as_array)
            .map(|branches| branches.iter().filter_map(Branch::from_value).collect())
            .unwrap_or_default();
        Some(MindMap { central, branches })
    }
}

impl Branch {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name").map(text_of).unwrap_or_default();
        let subbranches = object
            .get("subbranches")
            .and_then(Value::as_array)
            .map(|leaves| leaves.iter().filter_map(leaf_text).collect())
            .unwrap_or_default();
        Some(Branch { name, subbranches })
    }
}

fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(o) => o.get("name").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
