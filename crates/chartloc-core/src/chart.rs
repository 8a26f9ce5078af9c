//! Chart descriptor records: the `dependencies` list and its entries.
//!
//! Only the fields the rewrite needs are typed. Everything else in the
//! document (`apiVersion`, `version`, per-dependency `condition`, ...) is kept
//! in an ordered `extra` mapping and written back unchanged.
//!
//! Flattened keys pass through serde's buffered content, so a non-string key
//! such as `1:` is written back as a string (`'1':`). Chart keys are
//! strings, so this only affects hand-crafted documents.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Parsed `Chart.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Top-level keys other than `dependencies`, in document order.
    #[serde(flatten)]
    pub extra: Mapping,
    /// Dependency entries, in document order. Required.
    pub dependencies: Vec<Dependency>,
}

/// One entry of `dependencies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Where the dependency is fetched from: a registry URL or a `file://` path.
    #[serde(rename = "repository")]
    pub location: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Dependency {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            extra: Mapping::new(),
        }
    }
}

impl Chart {
    /// Chart with only the given dependencies and no other keys.
    pub fn with_dependencies(dependencies: Vec<Dependency>) -> Self {
        Self {
            extra: Mapping::new(),
            dependencies,
        }
    }

    pub fn dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }
}
