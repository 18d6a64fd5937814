//! Compiled query data model.

use serde::{Deserialize, Serialize};

use crate::core::types::ElementType;

/// One node of the query: a token or annotation term, with an optional
/// label constraints can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryElement {
    pub token: String,
    pub element_type: ElementType,
    pub label: Option<String>,
    /// Size of this element's connected component in the undirected
    /// constraint graph. Isolated nodes are 0, not 1 — a known quirk
    /// preserved deliberately for ordering compatibility.
    pub connect_qty: usize,
    pub component_id: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    Parent,
    Contains,
}

/// A single head -> dependent constraint edge. A `#name(head,dep1,...,depN)`
/// clause in the grammar expands into N of these sharing the same head and
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintEdge {
    pub head: usize,
    pub dependent: usize,
    pub kind: ConstraintKind,
}

/// Parser output: immutable, safely shared by reference across concurrent
/// query executions. Does not yet carry `sort_index` or the per-node
/// constraint index — those require posting cost, only known once the host
/// opens the index, and live on `OrderedQuery` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledQuery {
    pub elements: Vec<QueryElement>,
    pub edges: Vec<ConstraintEdge>,
}

impl CompiledQuery {
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.label.as_deref() == Some(label))
    }

    /// Serializes the compiled query as JSON, for a host that wants to log
    /// or cache a parsed query without re-running the parser.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_structure() {
        let compiled = crate::query::parser::parse("@s:sent @w:cat #contains(s,w)").unwrap();
        let json = compiled.to_json().unwrap();
        let restored = CompiledQuery::from_json(&json).unwrap();
        assert_eq!(compiled, restored);
    }
}
