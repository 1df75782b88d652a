use blockaudit_types::ids;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Fields of an object node. Ordered by name, which fixes the traversal order.
pub type Fields = BTreeMap<String, ContentNode>;

/// One node of a parsed content tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentNode {
    Object(Fields),
    Array(Vec<ContentNode>),
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl ContentNode {
    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            ContentNode::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContentNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ContentNode::Object(fields) => Value::Object(snapshot(fields)),
            ContentNode::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            ContentNode::String(s) => Value::String(s.clone()),
            ContentNode::Number(n) => Value::Number(n.clone()),
            ContentNode::Bool(b) => Value::Bool(*b),
            ContentNode::Null => Value::Null,
        }
    }
}

impl From<Value> for ContentNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                ContentNode::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(items) => ContentNode::Array(items.into_iter().map(Into::into).collect()),
            Value::String(s) => ContentNode::String(s),
            Value::Number(n) => ContentNode::Number(n),
            Value::Bool(b) => ContentNode::Bool(b),
            Value::Null => ContentNode::Null,
        }
    }
}

/// String value of a field. Missing fields and non-string values are both `None`.
pub fn field_str<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(ContentNode::as_str)
}

/// The block type tag carried in the `component` field.
pub fn component(fields: &Fields) -> Option<&str> {
    field_str(fields, ids::FIELD_COMPONENT)
}

/// JSON copy of an object node's fields, used as issue context.
pub fn snapshot(fields: &Fields) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, node)| (name.clone(), node.to_json()))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Error parsing content JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("Error parsing content JSON: nesting exceeds maximum depth of {limit}")]
    TooDeep { limit: usize },
}

/// Parse raw content text into a tree.
///
/// serde_json's own recursion limit (128) is lifted so realistic CMS nesting parses; instead,
/// arrays/objects nested deeper than `max_depth` are refused before any recursion happens.
pub fn parse_content(raw: &str, max_depth: usize) -> Result<ContentNode, ContentError> {
    if nesting_exceeds(raw, max_depth) {
        return Err(ContentError::TooDeep { limit: max_depth });
    }

    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value.into())
}

/// Linear scan of bracket nesting, ignoring brackets inside string literals.
fn nesting_exceeds(raw: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in raw.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}
