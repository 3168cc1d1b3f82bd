//! JSON input decoding.
//!
//! The input is read as a stream of JSON values and only the first one is
//! transformed. An empty stream is a null input, not an error.

use crate::Result;
use anyhow::Context;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read the input document from `path`, or from stdin when `path` is None.
pub fn read_input(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open source file {}", path.display()))?;
            decode_first(BufReader::new(file))
                .with_context(|| format!("decode source file {}", path.display()))
        }
        None => decode_first(io::stdin().lock()).context("decode source from stdin"),
    }
}

/// Decode the first JSON value in `reader`.
pub fn decode_first<R: Read>(reader: R) -> Result<Value> {
    let mut stream = serde_json::Deserializer::from_reader(reader).into_iter::<Value>();
    match stream.next() {
        Some(value) => Ok(value?),
        None => {
            tracing::warn!("input stream is empty; transforming null");
            Ok(Value::Null)
        }
    }
}
