//! jtl: declarative JSON-to-JSON transformation.
//!
//! A tree of [`SpecNode`]s describes where to read values in a source
//! document, which of them to keep, and where to put them in the output.
//!
//! Layout:
//! - path: dotted-path extraction and re-insertion
//! - merge: deep merge of output mappings
//! - spec: spec tree, conditions, YAML spec loading
//! - engine: recursive evaluation of a spec tree against an input
//! - input: JSON input decoding

pub mod engine;
pub mod input;
pub mod logging;
pub mod merge;
pub mod path;
pub mod spec;

pub use engine::process;
pub use path::DottedPath;
pub use spec::{Condition, Operator, SpecNode};

pub type Result<T> = anyhow::Result<T>;
