use crate::model::{ContentNode, Fields};
use crate::policy::RuleSet;
use blockaudit_types::RuleId;
use serde_json::{Value, json};

pub fn heading(level: &str) -> Value {
    json!({ "component": "heading", "heading_level": level, "text": "Heading" })
}

pub fn image(alt: Option<Value>) -> Value {
    let mut block = json!({ "component": "image", "src": "/img/hero.jpg" });
    if let Some(alt) = alt {
        block["alt"] = alt;
    }
    block
}

pub fn text_block(text: &str) -> Value {
    json!({ "component": "text", "text": text })
}

pub fn page(blocks: Vec<Value>) -> Value {
    json!({ "component": "page", "body": blocks })
}

pub fn fields(value: Value) -> Fields {
    match ContentNode::from(value) {
        ContentNode::Object(fields) => fields,
        other => panic!("expected an object node, got {other:?}"),
    }
}

pub fn only(rule: RuleId) -> RuleSet {
    [rule].into_iter().collect()
}
