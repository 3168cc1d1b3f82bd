//! One node of a transformation tree.
//!
//! YAML shape (every key optional):
//! ```yaml
//! type: object                 # free-form label, not interpreted
//! sourcePath: addresses        # where to read in the node's input
//! targetPath: contact.list     # where to nest the node's result
//! useKeyValueAsKey: name       # re-key array results by this field
//! condition:
//!   sourcePath: preferred
//!   comparator: "="
//!   value: true
//! specs:                       # children, evaluated against the extracted value
//!   - sourcePath: city
//!     targetPath: city
//! ```

use crate::path::DottedPath;
use crate::spec::Condition;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpecNode {
    /// Stored for tooling; no transformation reads it.
    #[serde(rename = "type", alias = "kind")]
    pub kind: Option<String>,

    #[serde(rename = "sourcePath")]
    pub source_path: DottedPath,

    #[serde(rename = "targetPath")]
    pub target_path: DottedPath,

    #[serde(rename = "useKeyValueAsKey", alias = "groupByField")]
    pub group_by: DottedPath,

    pub condition: Option<Condition>,

    #[serde(rename = "specs", alias = "children")]
    pub children: Vec<SpecNode>,
}

impl SpecNode {
    /// A path-less, condition-less node over `children`.
    pub fn root(children: Vec<SpecNode>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// A leaf copying the value at `source` to `target`.
    pub fn leaf(source: &str, target: &str) -> Self {
        Self {
            source_path: DottedPath::parse(source),
            target_path: DottedPath::parse(target),
            ..Self::default()
        }
    }
}
