//! Domain entities: the clue tree

use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::identifier::child_id;
use crate::domain::DomainError;

/// Path reported for errors in the top-level value, before any key is known.
const ROOT_PATH: &str = "(root)";

/// One decision point of the clue tree.
///
/// Children keep the insertion order of the source document; rendering
/// walks them in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Display label, e.g. the guessed word or a category name
    pub key: String,
    /// Outgoing edges: edge label -> child
    pub children: IndexMap<String, ChildValue>,
}

/// What an edge leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildValue {
    /// A further decision point, rendered as a link to its own section
    Branch(Node),
    /// A terminal result, rendered in place
    Leaf(String),
}

impl Node {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            children: IndexMap::new(),
        }
    }

    /// Append a leaf edge.
    pub fn with_leaf(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.children
            .insert(label.into(), ChildValue::Leaf(text.into()));
        self
    }

    /// Append a branch edge.
    pub fn with_branch(mut self, label: impl Into<String>, child: Node) -> Self {
        self.children.insert(label.into(), ChildValue::Branch(child));
        self
    }

    /// Iterate over the branch children only, in order.
    pub fn branches(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().filter_map(|(label, value)| match value {
            ChildValue::Branch(child) => Some((label.as_str(), child)),
            ChildValue::Leaf(_) => None,
        })
    }

    /// Decode a node from its wire shape `{ key: { edge: child, ... } }`.
    ///
    /// A child is either another single-entry object (branch) or a string
    /// (leaf). Anything else is a structural violation; the error carries
    /// the anchor path of the offending edge.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        Self::decode(value, None)
    }

    fn decode(value: &Value, path: Option<&str>) -> Result<Self, DomainError> {
        let shown_path = path.unwrap_or(ROOT_PATH);
        let entries = match value {
            Value::Object(map) => map,
            other => {
                return Err(DomainError::StructuralViolation {
                    path: shown_path.to_string(),
                    found: json_kind(other),
                })
            }
        };
        if entries.len() != 1 {
            return Err(DomainError::NodeArity {
                path: shown_path.to_string(),
                count: entries.len(),
            });
        }
        let Some((key, body)) = entries.iter().next() else {
            return Err(DomainError::NodeArity {
                path: shown_path.to_string(),
                count: 0,
            });
        };

        // the root section is addressed by its key
        let id = path.map_or_else(|| key.clone(), str::to_string);

        let edges = match body {
            Value::Object(edges) => edges,
            other => {
                return Err(DomainError::NodeBodyNotMapping {
                    path: id,
                    key: key.clone(),
                    found: json_kind(other),
                })
            }
        };

        let mut node = Node::new(key.clone());
        for (label, child) in edges {
            let child_path = child_id(&id, label);
            let child = match child {
                Value::String(text) => ChildValue::Leaf(text.clone()),
                Value::Object(_) => ChildValue::Branch(Self::decode(child, Some(&child_path))?),
                other => {
                    return Err(DomainError::StructuralViolation {
                        path: child_path,
                        found: json_kind(other),
                    })
                }
            };
            node.children.insert(label.clone(), child);
        }
        Ok(node)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_nested_object_when_decoding_then_keeps_edge_order() {
        let value: Value =
            serde_json::from_str(r#"{"root": {"z": "last", "a": {"next": {"y": "win"}}, "m": "mid"}}"#)
                .unwrap();

        let node = Node::from_json(&value).unwrap();

        assert_eq!(node.key, "root");
        let labels: Vec<&str> = node.children.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["z", "a", "m"]);
        match &node.children["a"] {
            ChildValue::Branch(child) => {
                assert_eq!(child.key, "next");
                assert_eq!(child.children["y"], ChildValue::Leaf("win".into()));
            }
            ChildValue::Leaf(_) => panic!("expected branch"),
        }
    }

    #[test]
    fn given_number_child_when_decoding_then_reports_structural_violation_with_path() {
        let value = json!({"root": {"no": {"child": {"y2": 3}}}});

        let err = Node::from_json(&value).unwrap_err();

        assert_eq!(
            err,
            DomainError::StructuralViolation {
                path: "root-no-y2".into(),
                found: "number",
            }
        );
    }

    #[test]
    fn given_two_keys_when_decoding_then_reports_arity() {
        let value = json!({"a": {"x": "1"}, "b": {"y": "2"}});

        let err = Node::from_json(&value).unwrap_err();

        assert_eq!(
            err,
            DomainError::NodeArity {
                path: "(root)".into(),
                count: 2
            }
        );
    }

    #[test]
    fn given_string_body_when_decoding_then_reports_body_not_mapping() {
        let value = json!({"root": "leaf"});

        let err = Node::from_json(&value).unwrap_err();

        assert!(matches!(err, DomainError::NodeBodyNotMapping { ref key, .. } if key == "root"));
    }

    #[test]
    fn given_empty_children_when_decoding_then_node_has_no_edges() {
        let node = Node::from_json(&json!({"lonely": {}})).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn given_mixed_children_when_iterating_branches_then_skips_leaves() {
        let node = Node::new("root")
            .with_leaf("yes", "win")
            .with_branch("no", Node::new("child").with_leaf("y2", "lose"));

        let branches: Vec<&str> = node.branches().map(|(label, _)| label).collect();
        assert_eq!(branches, vec!["no"]);
    }
}
