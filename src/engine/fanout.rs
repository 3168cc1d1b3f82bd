//! Array fan-out: every element goes through the node's condition and
//! children on its own, then the survivors are shaped into one result.

use crate::engine::walk::{Step, run};
use crate::path::{extract, store_at};
use serde_json::{Map, Value};

/// Result shape of a fanned-out array, before nesting at the target path.
enum Shape {
    /// Survivors in input order.
    Rows(Vec<Value>),
    /// One child spec and one survivor: the row itself, not a one-element array.
    Single(Value),
    /// Survivors keyed by their group-by field.
    Keyed(Map<String, Value>),
}

impl Shape {
    fn into_value(self) -> Value {
        match self {
            Shape::Rows(rows) => Value::Array(rows),
            Shape::Single(row) => row,
            Shape::Keyed(keyed) => Value::Object(keyed),
        }
    }
}

pub(super) fn process_array(step: Step<'_>, items: &[Value]) -> Value {
    let element = step.per_element();
    let mut keyed = (!step.group_by.is_root()).then(Map::new);
    let mut rows = Vec::with_capacity(items.len());

    for item in items {
        let row = run(element, item);
        if row.is_null() {
            continue;
        }

        match keyed.as_mut() {
            // Rows whose key is missing or not a string are dropped from the
            // keyed result.
            Some(keyed) => {
                if let Value::String(key) = extract(item, step.group_by).as_ref() {
                    keyed.insert(key.clone(), row);
                }
            }
            None => rows.push(row),
        }
    }

    let shape = match keyed {
        Some(keyed) => {
            tracing::trace!(group_by = %step.group_by, rows = keyed.len(), "grouped array");
            Shape::Keyed(keyed)
        }
        None if step.children.len() == 1 && rows.len() == 1 => {
            tracing::trace!(target_path = %step.target, "collapsed singleton array");
            Shape::Single(rows.swap_remove(0))
        }
        None => Shape::Rows(rows),
    };

    store_at(shape.into_value(), step.target)
}
