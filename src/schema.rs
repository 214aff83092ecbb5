//! Declarative structural templates and the recursive matcher.
//!
//! A schema is a tree: tag leaves name the expected type of a field, nested
//! maps describe nested objects. Schemas are acyclic by caller contract —
//! cycles are not detected.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::tag::TypeTag;
use crate::validate::Validator;
use crate::value::Value;

/// One node of a structural template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Tag(TypeTag),
    Fields(IndexMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Parse a schema from its JSON form, e.g.
    /// `{"id": "string", "geo": {"lat": "number", "lon": "number"}}`.
    /// Unknown tag names and non-string leaves are parse errors.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Error)]
#[error("malformed schema: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

impl Validator {
    /// Does `main` have the shape `schema` describes? Recursive; delegates
    /// every tag leaf to [`Validator::check`] with no options and stops at
    /// the first mismatch.
    ///
    /// Both sides must be objects. Key-count parity ("both empty or both
    /// non-empty") is a top-level precondition only; recursive steps check
    /// key presence, not parity.
    pub fn same_objects(&self, main: &Value, schema: &SchemaNode) -> bool {
        if self.is_disabled() {
            return true;
        }
        if !self.check(main, TypeTag::Object, None) {
            return false;
        }
        let (Value::Object(main_fields), SchemaNode::Fields(schema_fields)) = (main, schema)
        else {
            self.diag("struct", "schema root must be a field map");
            return false;
        };
        if main_fields.is_empty() != schema_fields.is_empty() {
            self.diag("struct", "one side is empty and the other is not");
            return false;
        }
        self.match_fields(main_fields, schema_fields)
    }

    fn match_fields(
        &self,
        main: &IndexMap<String, Value>,
        schema: &IndexMap<String, SchemaNode>,
    ) -> bool {
        for (key, node) in schema {
            let Some(actual) = main.get(key) else {
                // missing key is always fatal; there is no optional-field
                // concept
                self.diag("struct", format_args!("key {key:?} is missing"));
                return false;
            };
            match node {
                SchemaNode::Tag(tag) => {
                    if !self.check(actual, *tag, None) {
                        self.diag("struct", format_args!("key {key:?} fails tag '{tag}'"));
                        return false;
                    }
                }
                // a nested template never describes an array
                SchemaNode::Fields(_) if matches!(actual, Value::Array(_)) => {
                    self.diag("struct", format_args!("key {key:?} pairs a template with an array"));
                    return false;
                }
                SchemaNode::Fields(nested) => {
                    if !self.check(actual, TypeTag::Object, None) {
                        self.diag("struct", format_args!("key {key:?} is not a plain object"));
                        return false;
                    }
                    let Value::Object(actual_fields) = actual else {
                        return false;
                    };
                    if !self.match_fields(actual_fields, nested) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(spec: serde_json::Value) -> SchemaNode {
        SchemaNode::from_json(spec).expect("test schema parses")
    }

    fn matches(main: serde_json::Value, spec: serde_json::Value) -> bool {
        Validator::new().same_objects(&Value::from_json(main), &schema(spec))
    }

    #[test]
    fn flat_shapes() {
        assert!(matches(json!({"a": 1}), json!({"a": "number"})));
        assert!(!matches(json!({"a": "x"}), json!({"a": "number"})));
        assert!(matches(
            json!({"id": "u-1", "count": 3, "tags": ["x"]}),
            json!({"id": "string", "count": "int", "tags": "array"}),
        ));
    }

    #[test]
    fn top_level_key_count_parity() {
        assert!(!matches(json!({}), json!({"a": "number"})));
        assert!(!matches(json!({"a": 1}), json!({})));
        assert!(matches(json!({}), json!({})));
    }

    #[test]
    fn missing_key_is_fatal_but_extras_are_not() {
        assert!(!matches(json!({"b": 1}), json!({"a": "number"})));
        // extra keys in main are ignored
        assert!(matches(json!({"a": 1, "b": 2}), json!({"a": "number"})));
    }

    #[test]
    fn nested_templates_recurse() {
        assert!(matches(json!({"a": {"b": 1}}), json!({"a": {"b": "number"}})));
        assert!(!matches(json!({"a": {"b": "x"}}), json!({"a": {"b": "number"}})));
        assert!(matches(
            json!({"geo": {"lat": 1.5, "lon": -2.5}, "name": "hq"}),
            json!({"geo": {"lat": "float", "lon": "float"}, "name": "string"}),
        ));
    }

    #[test]
    fn nested_steps_do_not_recheck_parity() {
        // an empty nested template accepts a populated nested object
        assert!(matches(json!({"a": {"x": 1}}), json!({"a": {}})));
    }

    #[test]
    fn template_against_array_is_a_malformed_pairing() {
        assert!(!matches(json!({"a": [1, 2]}), json!({"a": {"b": "number"}})));
    }

    #[test]
    fn nested_values_must_be_plain_objects() {
        assert!(!matches(json!({"a": 3}), json!({"a": {"b": "number"}})));
        assert!(!matches(json!({"a": null}), json!({"a": {"b": "number"}})));
    }

    #[test]
    fn non_object_roots_fail() {
        let v = Validator::new();
        assert!(!v.same_objects(&Value::from_json(json!([1])), &schema(json!({"a": "number"}))));
        assert!(!v.same_objects(&Value::Null, &schema(json!({"a": "number"}))));
        // a tag leaf is not a valid schema root
        assert!(!v.same_objects(
            &Value::from_json(json!({"a": 1})),
            &SchemaNode::Tag(TypeTag::Object),
        ));
    }

    #[test]
    fn schema_parsing_rejects_unknown_tags_and_non_string_leaves() {
        assert!(SchemaNode::from_json(json!({"a": "noodle"})).is_err());
        assert!(SchemaNode::from_json(json!({"a": 5})).is_err());
        assert!(SchemaNode::from_json(json!({"a": "number", "b": {"c": "STRING"}})).is_ok());
    }

    #[test]
    fn disabled_validator_matches_anything() {
        let v = Validator::new().bypassed();
        assert!(v.same_objects(&Value::Null, &schema(json!({"a": "number"}))));
    }
}
