//! Spec layer: the transformation tree as decoded from YAML.
//!
//! It owns:
//! - SpecNode (extraction, gating, grouping and re-insertion rules)
//! - Condition + Operator (typed comparison predicate)
//! - loading a multi-document spec stream under an implicit root

pub mod condition;
pub mod load;
pub mod node;

pub use condition::{Condition, Operator};
pub use load::{load_file, load_reader, load_str};
pub use node::SpecNode;
