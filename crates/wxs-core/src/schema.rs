//! Parsed schema types and the namespace index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::tag::VersionTag;

/// One namespace declaration from a schema file. Everything besides
/// `namespace` (types, functions, events, permissions, ...) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceSchema {
    pub namespace: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NamespaceSchema {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// File name (e.g. `privacy.json`) → fragments in file order.
pub type RawSchemas = BTreeMap<String, Vec<NamespaceSchema>>;

/// Namespace name → every fragment declared under it.
pub type NamespaceIndex = BTreeMap<String, Vec<NamespaceSchema>>;

/// Groups every fragment by its namespace. Files are visited in name order
/// and fragments in file order, so the result is deterministic.
pub fn build_namespace_index(raw: &RawSchemas) -> NamespaceIndex {
    let mut index = NamespaceIndex::new();
    for fragments in raw.values() {
        for fragment in fragments {
            index
                .entry(fragment.namespace.clone())
                .or_default()
                .push(fragment.clone());
        }
    }
    index
}

/// Result of a completed load run.
#[derive(Debug, Clone, Serialize)]
pub struct Schemas {
    tag: String,
    raw: RawSchemas,
    namespaces: NamespaceIndex,
}

impl Schemas {
    pub fn new(tag: &VersionTag, raw: RawSchemas) -> Self {
        let namespaces = build_namespace_index(&raw);
        Schemas {
            tag: tag.to_string(),
            raw,
            namespaces,
        }
    }

    /// The tag actually used for this run.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn raw(&self) -> &RawSchemas {
        &self.raw
    }

    pub fn namespaces(&self) -> &NamespaceIndex {
        &self.namespaces
    }

    pub fn file(&self, name: &str) -> Option<&[NamespaceSchema]> {
        self.raw.get(name).map(Vec::as_slice)
    }

    pub fn namespace(&self, name: &str) -> Option<&[NamespaceSchema]> {
        self.namespaces.get(name).map(Vec::as_slice)
    }
}
