//! Spec stream loading.
//!
//! A spec file holds zero or more `---`-separated YAML documents. Each one is
//! a top-level SpecNode; together they become the children of a path-less
//! root, in file order.

use crate::Result;
use crate::spec::SpecNode;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load every spec document in the file at `path`.
pub fn load_file(path: &Path) -> Result<SpecNode> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read spec file {}", path.display()))?;
    load_str(&text).with_context(|| format!("load spec file {}", path.display()))
}

pub fn load_reader<R: Read>(mut reader: R) -> Result<SpecNode> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("read spec stream")?;
    load_str(&text)
}

pub fn load_str(text: &str) -> Result<SpecNode> {
    let mut children = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let doc_no = index + 1;
        // Empty documents (a stray `---` or a file of comments) decode to None.
        match Option::<SpecNode>::deserialize(document)
            .with_context(|| format!("decode spec document #{}", doc_no))?
        {
            Some(node) => children.push(node),
            None => tracing::debug!(document = doc_no, "skipping empty spec document"),
        }
    }

    tracing::debug!(specs = children.len(), "loaded spec stream");
    Ok(SpecNode::root(children))
}
